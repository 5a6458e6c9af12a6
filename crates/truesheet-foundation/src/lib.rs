//! Sheet states, size mapping and touch arbitration for TrueSheet

pub mod gesture_arbiter;
pub mod pointer;
pub mod sheet_state;

pub use gesture_arbiter::{should_intercept, ContentChild};
pub use pointer::{PointerEvent, PointerEventKind};
pub use sheet_state::{SheetState, SizeIndex, SizeInfo, StateSizeMapper};

pub mod prelude {
    pub use crate::gesture_arbiter::{should_intercept, ContentChild};
    pub use crate::pointer::{PointerEvent, PointerEventKind};
    pub use crate::sheet_state::{SheetState, SizeIndex, SizeInfo, StateSizeMapper};
}
