use truesheet_foundation::{SizeIndex, SizeInfo};

/// Notifications delivered to the host.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SheetEvent {
    /// The sheet was presented at a declared size.
    Present { index: SizeIndex },
    /// The sheet settled on a declared size.
    SizeChange(SizeInfo),
    /// The sheet settled hidden.
    Dismiss,
}
