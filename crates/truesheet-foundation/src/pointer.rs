use truesheet_ui_graphics::Point;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEventKind {
    Down,
    Move,
    Up,
    Cancel,
}

/// Raw touch event delivered to the sheet before its children see it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    pub kind: PointerEventKind,
    /// Position in screen coordinates.
    pub global_position: Point,
}

impl PointerEvent {
    pub fn new(kind: PointerEventKind, global_position: Point) -> Self {
        Self {
            kind,
            global_position,
        }
    }

    pub fn is_down(&self) -> bool {
        self.kind == PointerEventKind::Down
    }

    pub fn is_cancel(&self) -> bool {
        self.kind == PointerEventKind::Cancel
    }
}
