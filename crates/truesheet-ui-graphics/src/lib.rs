//! Units and geometry for TrueSheet
//!
//! This crate contains the density-aware unit types and the small set of
//! geometry primitives used by sheet sizing and touch hit-testing.

mod geometry;
mod unit;

pub use geometry::*;
pub use unit::*;

pub mod prelude {
    pub use crate::geometry::{Point, Rect, Size};
    pub use crate::unit::{Density, Dp, Px};
}
