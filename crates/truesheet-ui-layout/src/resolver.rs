//! Resolution of declared sizes into device pixels.

use crate::size::SheetSize;
use truesheet_ui_graphics::{Density, Px, Size};

/// Combined measured height of the sheet's content and footer views.
///
/// A view that is absent or not yet measured contributes zero.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct ContentHeight(pub Px);

impl ContentHeight {
    pub fn measure(content: Option<f32>, footer: Option<f32>) -> Self {
        let height = measured(content) + measured(footer);
        Self(Px(height))
    }
}

fn measured(height: Option<f32>) -> f32 {
    height.filter(|h| h.is_finite() && *h > 0.0).unwrap_or(0.0)
}

/// Resolves [`SheetSize`] descriptors for a single configuration pass.
///
/// Every resolved height lies in `[0, ceiling]`, where the ceiling is the
/// viewport height, lowered further by the max height cap when one is set.
/// Resolution never fails: text that cannot be parsed and non-finite values
/// resolve to zero, an unsupported descriptor to half the viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SizeResolver {
    viewport_height: Px,
    content_height: ContentHeight,
    max_height: Option<Px>,
    density: Density,
}

impl SizeResolver {
    pub fn new(
        viewport: Size,
        content_height: ContentHeight,
        max_height: Option<Px>,
        density: Density,
    ) -> Self {
        let viewport_height = if viewport.height.is_finite() {
            Px(viewport.height.max(0.0))
        } else {
            Px::ZERO
        };

        Self {
            viewport_height,
            content_height,
            max_height: max_height.filter(|cap| !cap.0.is_nan()),
            density: density.sanitized(),
        }
    }

    #[inline]
    pub fn viewport_height(&self) -> Px {
        self.viewport_height
    }

    #[inline]
    pub fn density(&self) -> Density {
        self.density
    }

    /// Upper bound for every resolved height.
    pub fn ceiling(&self) -> Px {
        match self.max_height {
            Some(cap) => cap.min(self.viewport_height),
            None => self.viewport_height,
        }
    }

    pub fn resolve(&self, size: &SheetSize) -> Px {
        let viewport = self.viewport_height.0;
        let height = match size {
            SheetSize::Px(px) => *px,
            SheetSize::Fixed(dp) => dp.to_px(self.density).truncate(),
            SheetSize::Auto => self.content_height.0,
            SheetSize::Large => self.viewport_height,
            SheetSize::Medium => Px(viewport * 0.5).truncate(),
            SheetSize::Small => Px(viewport * 0.25).truncate(),
            SheetSize::Percent(percent) => {
                let height = f64::from(viewport) * f64::from(*percent) / 100.0;
                Px(height as f32).truncate()
            }
            SheetSize::Invalid(raw) => {
                log::debug!("unparsable sheet size {raw:?}, resolving to 0");
                Px::ZERO
            }
            SheetSize::Unsupported => Px(viewport * 0.5).truncate(),
        };

        if !height.0.is_finite() {
            log::debug!("non-finite sheet size {size:?}, resolving to 0");
            return Px::ZERO;
        }

        height.min(self.ceiling()).max(Px::ZERO)
    }
}

#[cfg(test)]
#[path = "tests/resolver_tests.rs"]
mod tests;
