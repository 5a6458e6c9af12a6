//! Declared sheet sizes and their cardinality

use smallvec::{smallvec, SmallVec};
use std::fmt;
use truesheet_ui_graphics::{Dp, Px};

/// The sheet rests at most at collapsed, half-expanded and expanded.
pub const MAX_DECLARED_SIZES: usize = 3;

/// One declared resting size, as supplied by the host.
///
/// Host strings go through [`SheetSize::from`], which never fails: text that
/// is not understood becomes [`SheetSize::Invalid`] and collapses the tier to
/// zero when resolved.
#[derive(Clone, Debug, PartialEq)]
pub enum SheetSize {
    /// Raw device pixels, used verbatim.
    Px(Px),
    /// Density-independent value, from a host number or a numeric string.
    Fixed(Dp),
    /// Exactly the measured content height.
    Auto,
    /// A quarter of the viewport height.
    Small,
    /// Half the viewport height.
    Medium,
    /// The full viewport height.
    Large,
    /// Percentage of the viewport height.
    Percent(f32),
    /// Text that is neither a named tier nor a number.
    Invalid(String),
    /// A host value of a kind the sheet has no mapping for; resolves to half
    /// the viewport height.
    Unsupported,
}

impl SheetSize {
    fn parse(value: &str) -> Self {
        match value {
            "auto" => Self::Auto,
            "small" => Self::Small,
            "medium" => Self::Medium,
            "large" => Self::Large,
            _ if value.starts_with('%') || value.ends_with('%') => {
                match parse_finite(value.trim_matches('%')) {
                    Some(percent) => Self::Percent(percent),
                    None => Self::Invalid(value.to_owned()),
                }
            }
            _ => match parse_finite(value) {
                Some(fixed) => Self::Fixed(Dp(fixed)),
                None => Self::Invalid(value.to_owned()),
            },
        }
    }
}

fn parse_finite(text: &str) -> Option<f32> {
    text.parse::<f32>().ok().filter(|value| value.is_finite())
}

impl From<&str> for SheetSize {
    fn from(value: &str) -> Self {
        Self::parse(value)
    }
}

impl From<String> for SheetSize {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<f32> for SheetSize {
    fn from(value: f32) -> Self {
        Self::Fixed(Dp(value))
    }
}

impl From<Dp> for SheetSize {
    fn from(value: Dp) -> Self {
        Self::Fixed(value)
    }
}

impl From<Px> for SheetSize {
    fn from(value: Px) -> Self {
        Self::Px(value)
    }
}

/// Number of declared sizes; selects the sheet's state-machine topology.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SizeCount {
    One,
    Two,
    Three,
}

impl SizeCount {
    pub fn get(self) -> usize {
        match self {
            SizeCount::One => 1,
            SizeCount::Two => 2,
            SizeCount::Three => 3,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InvalidSizeCount(pub usize);

impl fmt::Display for InvalidSizeCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "sheet supports 1 to {MAX_DECLARED_SIZES} sizes, got {}",
            self.0
        )
    }
}

impl std::error::Error for InvalidSizeCount {}

impl TryFrom<usize> for SizeCount {
    type Error = InvalidSizeCount;

    fn try_from(count: usize) -> Result<Self, Self::Error> {
        match count {
            1 => Ok(SizeCount::One),
            2 => Ok(SizeCount::Two),
            3 => Ok(SizeCount::Three),
            other => Err(InvalidSizeCount(other)),
        }
    }
}

/// The declared sizes, normalized to between one and three entries.
#[derive(Clone, Debug, PartialEq)]
pub struct SheetSizes {
    sizes: SmallVec<[SheetSize; MAX_DECLARED_SIZES]>,
}

impl SheetSizes {
    /// Keeps the first three sizes. Extra entries are dropped with a warning;
    /// an empty declaration falls back to [`SheetSizes::default`].
    pub fn new<I>(sizes: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<SheetSize>,
    {
        let mut declared = sizes.into_iter();
        let sizes: SmallVec<[SheetSize; MAX_DECLARED_SIZES]> = declared
            .by_ref()
            .take(MAX_DECLARED_SIZES)
            .map(Into::into)
            .collect();
        let dropped = declared.count();

        if dropped > 0 {
            log::warn!(
                "TrueSheet only supports a maximum of {MAX_DECLARED_SIZES} sizes; collapsed, \
                 half-expanded and expanded. Ignoring {dropped} extra size(s)."
            );
        }

        if sizes.is_empty() {
            log::warn!("TrueSheet declared without sizes, using the default sizes");
            return Self::default();
        }

        Self { sizes }
    }

    pub fn size_count(&self) -> SizeCount {
        match self.sizes.len() {
            1 => SizeCount::One,
            2 => SizeCount::Two,
            _ => SizeCount::Three,
        }
    }

    pub fn as_slice(&self) -> &[SheetSize] {
        &self.sizes
    }

    pub fn get(&self, index: usize) -> Option<&SheetSize> {
        self.sizes.get(index)
    }
}

impl Default for SheetSizes {
    fn default() -> Self {
        Self {
            sizes: smallvec![SheetSize::Medium, SheetSize::Large],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_named_tiers() {
        assert_eq!(SheetSize::from("auto"), SheetSize::Auto);
        assert_eq!(SheetSize::from("small"), SheetSize::Small);
        assert_eq!(SheetSize::from("medium"), SheetSize::Medium);
        assert_eq!(SheetSize::from("large"), SheetSize::Large);
    }

    #[test]
    fn parses_percentages_with_either_sided_marker() {
        assert_eq!(SheetSize::from("42%"), SheetSize::Percent(42.0));
        assert_eq!(SheetSize::from("%50"), SheetSize::Percent(50.0));
        assert_eq!(
            SheetSize::from("abc%"),
            SheetSize::Invalid("abc%".to_owned())
        );
    }

    #[test]
    fn numeric_strings_are_density_independent() {
        assert_eq!(SheetSize::from("120"), SheetSize::Fixed(Dp(120.0)));
        assert_eq!(SheetSize::from("abc"), SheetSize::Invalid("abc".to_owned()));
        assert_eq!(SheetSize::from("NaN"), SheetSize::Invalid("NaN".to_owned()));
        assert_eq!(SheetSize::from("inf%"), SheetSize::Invalid("inf%".to_owned()));
    }

    #[test]
    fn size_count_rejects_out_of_range() {
        assert_eq!(SizeCount::try_from(2usize), Ok(SizeCount::Two));
        assert_eq!(SizeCount::try_from(0usize), Err(InvalidSizeCount(0)));
        assert_eq!(SizeCount::try_from(4usize), Err(InvalidSizeCount(4)));
        assert_eq!(
            InvalidSizeCount(4).to_string(),
            "sheet supports 1 to 3 sizes, got 4"
        );
    }

    #[test]
    fn extra_sizes_are_dropped() {
        let sizes = SheetSizes::new(["small", "medium", "large", "auto"]);
        assert_eq!(sizes.size_count(), SizeCount::Three);
        assert_eq!(
            sizes.as_slice(),
            &[SheetSize::Small, SheetSize::Medium, SheetSize::Large]
        );
    }

    #[test]
    fn empty_declaration_uses_defaults() {
        let sizes = SheetSizes::new(Vec::<SheetSize>::new());
        assert_eq!(sizes, SheetSizes::default());
        assert_eq!(sizes.size_count(), SizeCount::Two);
        assert_eq!(sizes.as_slice(), &[SheetSize::Medium, SheetSize::Large]);
    }
}
