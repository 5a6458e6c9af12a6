//! Touch arbitration between the sheet's drag handling and nested scrollables.
//!
//! While the sheet is fully expanded, a drag that starts over a nested list
//! which is scrolled away from its top belongs to that list: the user scrolls
//! it back first, and only then does the sheet take over dragging.

use crate::pointer::PointerEvent;
use crate::sheet_state::SheetState;
use truesheet_ui_graphics::Rect;

/// An immediate child of the sheet's content view.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContentChild {
    /// Vertical scroll offset, when the child is a scrollable region.
    pub scroll_offset: Option<f32>,
    /// Bounds in screen coordinates.
    pub screen_bounds: Rect,
}

impl ContentChild {
    pub fn scrollable(scroll_offset: f32, screen_bounds: Rect) -> Self {
        Self {
            scroll_offset: Some(scroll_offset),
            screen_bounds,
        }
    }

    pub fn fixed(screen_bounds: Rect) -> Self {
        Self {
            scroll_offset: None,
            screen_bounds,
        }
    }

    /// A scrollable region that is away from its origin.
    pub fn is_scrolled(&self) -> bool {
        self.scroll_offset.is_some_and(|offset| offset > 0.0)
    }
}

/// Returns `false` when the event must be left to a nested scrollable.
///
/// The sheet owns every gesture except, while [`SheetState::Expanded`]:
/// a cancellation, or a down event strictly inside a scrolled child.
pub fn should_intercept(
    event: &PointerEvent,
    state: SheetState,
    children: &[ContentChild],
) -> bool {
    if state != SheetState::Expanded {
        return true;
    }

    if event.is_cancel() {
        return false;
    }

    if !event.is_down() {
        return true;
    }

    let hit = children.iter().position(|child| {
        child.is_scrolled() && child.screen_bounds.contains_strictly(event.global_position)
    });

    match hit {
        Some(index) => {
            log::trace!("touch down over scrolled child {index}, leaving gesture to it");
            false
        }
        None => true,
    }
}
