use truesheet_foundation::SheetState;
use truesheet_ui_layout::SheetTiers;

/// The platform sheet widget whose boundary properties and state the
/// behavior drives. Drag physics and animation stay on the widget's side.
pub trait SheetWidget {
    /// Writes every boundary property of one configuration pass at once.
    fn apply_tiers(&mut self, tiers: &SheetTiers);

    /// Current discrete state.
    fn state(&self) -> SheetState;

    /// Asks the widget to move to `state`. The widget reports back through
    /// [`crate::SheetBehavior::on_state_changed`] once it settles.
    fn request_state(&mut self, state: SheetState);
}
