//! Unit types: Dp, Px, Density and conversions

/// Density-independent pixels
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default)]
pub struct Dp(pub f32);

impl Dp {
    pub fn to_px(&self, density: Density) -> Px {
        Px(self.0 * density.0)
    }

    pub fn from_px(px: Px, density: Density) -> Self {
        Self(px.0 / density.0)
    }
}

/// Raw device pixels
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default)]
pub struct Px(pub f32);

impl Px {
    pub const ZERO: Px = Px(0.0);

    /// Drops the fractional part, the way the platform converts to integer pixels.
    pub fn truncate(self) -> Self {
        Self(self.0.trunc())
    }

    pub fn min(self, other: Px) -> Self {
        Self(self.0.min(other.0))
    }

    pub fn max(self, other: Px) -> Self {
        Self(self.0.max(other.0))
    }

    pub fn to_dp(self, density: Density) -> Dp {
        Dp::from_px(self, density)
    }
}

/// Display scale factor between [`Dp`] and [`Px`].
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Density(pub f32);

impl Density {
    pub const BASELINE: Density = Density(1.0);

    /// Returns a usable density; non-positive or non-finite factors fall back
    /// to the baseline so conversions never divide by zero.
    pub fn sanitized(self) -> Self {
        if self.0.is_finite() && self.0 > 0.0 {
            self
        } else {
            Self::BASELINE
        }
    }
}

impl Default for Density {
    fn default() -> Self {
        Self::BASELINE
    }
}
