//! Builders for the sheet's content children.

use truesheet_ui::{ContentChild, Point, Rect, Size};

/// A scrollable child at `origin` (screen coordinates), scrolled by `offset`.
pub fn scrollable_child(offset: f32, origin: Point, size: Size) -> ContentChild {
    ContentChild::scrollable(offset, Rect::from_origin_size(origin, size))
}

/// A non-scrollable child at `origin` (screen coordinates).
pub fn fixed_child(origin: Point, size: Size) -> ContentChild {
    ContentChild::fixed(Rect::from_origin_size(origin, size))
}
