//! Assertion helpers for sheet tests.

use truesheet_ui::{Px, SheetTiers};

/// Assert that a value is within an expected range.
pub fn assert_approx_eq(actual: f32, expected: f32, tolerance: f32, msg: &str) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tolerance,
        "{}: expected {} (±{}), got {} (diff: {})",
        msg,
        expected,
        tolerance,
        actual,
        diff
    );
}

/// Assert that every resolved tier lies in `[0, ceiling]` and that a
/// half-expanded ratio, when present, is strictly between 0 and 1.
pub fn assert_tiers_within(tiers: &SheetTiers, ceiling: Px, msg: &str) {
    let in_range = |height: Px| (0.0..=ceiling.0).contains(&height.0);
    assert!(
        in_range(tiers.max_height),
        "{}: max height {:?} outside [0, {:?}]",
        msg,
        tiers.max_height,
        ceiling
    );
    if let Some(peek) = tiers.peek_height {
        assert!(
            in_range(peek),
            "{}: peek height {:?} outside [0, {:?}]",
            msg,
            peek,
            ceiling
        );
    }
    if let Some(ratio) = tiers.half_expanded_ratio {
        assert!(
            ratio > 0.0 && ratio < 1.0,
            "{}: half-expanded ratio {} outside (0, 1)",
            msg,
            ratio
        );
    }
}
