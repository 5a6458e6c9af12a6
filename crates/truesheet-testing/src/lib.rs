//! Testing utilities and fakes for TrueSheet

pub mod assertions;
pub mod content;
pub mod fake_widget;

pub use assertions::*;
pub use content::*;
pub use fake_widget::FakeSheetWidget;

pub mod prelude {
    pub use crate::assertions::*;
    pub use crate::content::*;
    pub use crate::fake_widget::FakeSheetWidget;
}
