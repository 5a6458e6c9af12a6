//! Size resolution and tier configuration for TrueSheet
//!
//! Declared sheet sizes are resolved against the viewport, the measured
//! content and an optional height cap, then folded into the boundary
//! properties the underlying sheet widget consumes.

mod resolver;
mod size;
mod tiers;

pub use resolver::*;
pub use size::*;
pub use tiers::*;

pub mod prelude {
    pub use crate::resolver::{ContentHeight, SizeResolver};
    pub use crate::size::{SheetSize, SheetSizes, SizeCount};
    pub use crate::tiers::SheetTiers;
}
