//! In-memory stand-in for the platform sheet widget.

use truesheet_ui::{SheetState, SheetTiers, SheetWidget};

/// Records every boundary write and state request it receives.
///
/// By default a requested state is adopted immediately, as if the widget
/// settled without animating. [`FakeSheetWidget::deferred`] keeps the current
/// state until [`FakeSheetWidget::settle`] is called.
#[derive(Debug, Clone)]
pub struct FakeSheetWidget {
    state: SheetState,
    settle_on_request: bool,
    applied: Vec<SheetTiers>,
    requested: Vec<SheetState>,
}

impl FakeSheetWidget {
    pub fn new() -> Self {
        Self {
            state: SheetState::Hidden,
            settle_on_request: true,
            applied: Vec::new(),
            requested: Vec::new(),
        }
    }

    pub fn deferred() -> Self {
        Self {
            settle_on_request: false,
            ..Self::new()
        }
    }

    pub fn settle(&mut self, state: SheetState) {
        self.state = state;
    }

    pub fn applied(&self) -> &[SheetTiers] {
        &self.applied
    }

    pub fn last_applied(&self) -> Option<&SheetTiers> {
        self.applied.last()
    }

    pub fn requested(&self) -> &[SheetState] {
        &self.requested
    }

    pub fn last_requested(&self) -> Option<SheetState> {
        self.requested.last().copied()
    }
}

impl Default for FakeSheetWidget {
    fn default() -> Self {
        Self::new()
    }
}

impl SheetWidget for FakeSheetWidget {
    fn apply_tiers(&mut self, tiers: &SheetTiers) {
        self.applied.push(*tiers);
    }

    fn state(&self) -> SheetState {
        self.state
    }

    fn request_state(&mut self, state: SheetState) {
        self.requested.push(state);
        if self.settle_on_request {
            self.state = state;
        }
    }
}
