//! Mapping between the widget's discrete states and declared size indices.
//!
//! The two domains stay separate types: a [`SheetState`] is what the sheet
//! widget reports and accepts, a [`SizeIndex`] points back into the host's
//! declared sizes. [`StateSizeMapper`] is the only bridge between them.

use truesheet_ui_graphics::{Density, Dp, Px};
use truesheet_ui_layout::{SheetTiers, SizeCount};

/// Discrete states of the sheet widget.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SheetState {
    /// Following the user's finger.
    Dragging,
    /// Animating towards a resting state.
    Settling,
    Expanded,
    Collapsed,
    Hidden,
    HalfExpanded,
}

impl SheetState {
    /// Whether the sheet is at rest in this state.
    pub fn is_settled(self) -> bool {
        !matches!(self, SheetState::Dragging | SheetState::Settling)
    }
}

/// Position in the declared size array. Negative values request dismissal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SizeIndex(pub i32);

impl SizeIndex {
    pub const DISMISSED: SizeIndex = SizeIndex(-1);
}

/// What the host observes when the sheet settles on a declared size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SizeInfo {
    pub index: SizeIndex,
    /// Resolved height in density-independent units.
    pub value: Dp,
}

const ONE_SIZE: &[SheetState] = &[SheetState::Expanded];
const TWO_SIZES: &[SheetState] = &[SheetState::Collapsed, SheetState::Expanded];
const THREE_SIZES: &[SheetState] = &[
    SheetState::Collapsed,
    SheetState::HalfExpanded,
    SheetState::Expanded,
];

/// Bijection between declared size indices and the states valid for a size count.
///
/// | count | index 0   | index 1       | index 2  |
/// |-------|-----------|---------------|----------|
/// | 1     | Expanded  |               |          |
/// | 2     | Collapsed | Expanded      |          |
/// | 3     | Collapsed | HalfExpanded  | Expanded |
///
/// Indices outside the row map to [`SheetState::Hidden`]; states outside the
/// row have no [`SizeInfo`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StateSizeMapper {
    count: SizeCount,
}

impl StateSizeMapper {
    pub fn new(count: SizeCount) -> Self {
        Self { count }
    }

    /// States reachable through a declared size, in index order.
    pub fn states(&self) -> &'static [SheetState] {
        match self.count {
            SizeCount::One => ONE_SIZE,
            SizeCount::Two => TWO_SIZES,
            SizeCount::Three => THREE_SIZES,
        }
    }

    pub fn state_for_index(&self, index: SizeIndex) -> SheetState {
        usize::try_from(index.0)
            .ok()
            .and_then(|index| self.states().get(index))
            .copied()
            .unwrap_or(SheetState::Hidden)
    }

    pub fn index_for_state(&self, state: SheetState) -> Option<SizeIndex> {
        self.states()
            .iter()
            .position(|candidate| *candidate == state)
            .and_then(|position| i32::try_from(position).ok())
            .map(SizeIndex)
    }

    pub fn info_for_state(
        &self,
        state: SheetState,
        tiers: &SheetTiers,
        density: Density,
    ) -> Option<SizeInfo> {
        let index = self.index_for_state(state)?;
        let height = match state {
            SheetState::Collapsed => tiers.peek_height.unwrap_or(Px::ZERO),
            SheetState::HalfExpanded => tiers.half_expanded_height().unwrap_or(Px::ZERO),
            SheetState::Expanded => tiers.max_height,
            SheetState::Dragging | SheetState::Settling | SheetState::Hidden => return None,
        };

        Some(SizeInfo {
            index,
            value: height.to_dp(density.sanitized()),
        })
    }
}
