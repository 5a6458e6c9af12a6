//! Tier configuration: declared sizes to widget boundary properties.

use crate::resolver::SizeResolver;
use crate::size::{SheetSizes, SizeCount};
use truesheet_ui_graphics::Px;

/// Smallest distance kept between the half-expanded ratio and its bounds.
pub const HALF_EXPANDED_RATIO_EPSILON: f32 = 0.001;

/// Boundary properties handed to the sheet widget in one write.
///
/// Recomputed from scratch on every configuration pass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SheetTiers {
    /// Height of the collapsed state. Unset for a single declared size.
    pub peek_height: Option<Px>,
    /// Half-expanded height as a fraction of the viewport, strictly inside `(0, 1)`
    /// and below `max_height / viewport_height`. Only set for three declared
    /// sizes on a measured viewport.
    ///
    /// When the expanded tier resolves to zero no ratio fits below it; the
    /// ratio then sits at [`HALF_EXPANDED_RATIO_EPSILON`].
    pub half_expanded_ratio: Option<f32>,
    pub max_height: Px,
    /// `false` when the widget must interpolate a half-expanded state.
    pub fit_to_contents: bool,
    pub skip_collapsed: bool,
    pub hideable: bool,
    /// Viewport height the tiers were resolved against.
    pub viewport_height: Px,
}

impl SheetTiers {
    pub fn configure(sizes: &SheetSizes, resolver: &SizeResolver) -> Self {
        let resolve = |index: usize| {
            sizes
                .get(index)
                .map_or(Px::ZERO, |size| resolver.resolve(size))
        };
        let viewport_height = resolver.viewport_height();

        let tiers = match sizes.size_count() {
            SizeCount::One => Self {
                peek_height: None,
                half_expanded_ratio: None,
                max_height: resolve(0),
                fit_to_contents: true,
                skip_collapsed: true,
                hideable: true,
                viewport_height,
            },
            SizeCount::Two => Self {
                peek_height: Some(resolve(0)),
                half_expanded_ratio: None,
                max_height: resolve(1),
                fit_to_contents: true,
                skip_collapsed: false,
                hideable: true,
                viewport_height,
            },
            SizeCount::Three => {
                let max_height = resolve(2);
                Self {
                    peek_height: Some(resolve(0)),
                    half_expanded_ratio: half_expanded_ratio(
                        resolve(1),
                        max_height,
                        viewport_height,
                    ),
                    max_height,
                    fit_to_contents: false,
                    skip_collapsed: false,
                    hideable: true,
                    viewport_height,
                }
            }
        };

        log::trace!("configured sheet tiers {tiers:?}");
        tiers
    }

    /// Height of the half-expanded state, truncated to whole pixels.
    pub fn half_expanded_height(&self) -> Option<Px> {
        self.half_expanded_ratio
            .map(|ratio| Px(ratio * self.viewport_height.0).truncate())
    }
}

fn half_expanded_ratio(half: Px, max: Px, viewport_height: Px) -> Option<f32> {
    if viewport_height.0 <= 0.0 {
        log::debug!("viewport not measured yet, deferring half-expanded ratio");
        return None;
    }

    let ratio = half.0 / viewport_height.0;
    let ceiling = (max.0 / viewport_height.0).min(1.0) - HALF_EXPANDED_RATIO_EPSILON;
    if ratio > 0.0 && ratio < ceiling {
        return Some(ratio);
    }

    let clamped = ratio.clamp(
        HALF_EXPANDED_RATIO_EPSILON,
        ceiling.max(HALF_EXPANDED_RATIO_EPSILON),
    );
    log::warn!(
        "half-expanded size {}px does not fit between 0 and the expanded size {}px, using ratio {clamped}",
        half.0,
        max.0
    );
    Some(clamped)
}
