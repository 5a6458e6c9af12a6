//! Sheet behavior controller for TrueSheet
//!
//! [`SheetBehavior`] drives a host-owned [`SheetWidget`]: it reruns the
//! configuration pass whenever layout or configuration changes, turns
//! present/dismiss requests into widget states and reports settled states
//! back as [`SheetEvent`]s.

mod config;
mod event;
mod sheet_behavior;
mod widget;

pub use config::SheetConfig;
pub use event::SheetEvent;
pub use sheet_behavior::SheetBehavior;
pub use widget::SheetWidget;

pub use truesheet_foundation::{
    should_intercept, ContentChild, PointerEvent, PointerEventKind, SheetState, SizeIndex,
    SizeInfo, StateSizeMapper,
};
pub use truesheet_ui_graphics::{Density, Dp, Point, Px, Rect, Size};
pub use truesheet_ui_layout::{ContentHeight, SheetSize, SheetSizes, SheetTiers, SizeCount};

pub mod prelude {
    pub use crate::config::SheetConfig;
    pub use crate::event::SheetEvent;
    pub use crate::sheet_behavior::SheetBehavior;
    pub use crate::widget::SheetWidget;
    pub use truesheet_foundation::prelude::*;
    pub use truesheet_ui_graphics::prelude::*;
    pub use truesheet_ui_layout::prelude::*;
}
