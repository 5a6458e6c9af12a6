//! Sheet behavior: configuration passes, state requests and settle reporting.

use crate::config::SheetConfig;
use crate::event::SheetEvent;
use crate::widget::SheetWidget;
use truesheet_foundation::{
    gesture_arbiter, ContentChild, PointerEvent, SheetState, SizeIndex, SizeInfo,
    StateSizeMapper,
};
use truesheet_ui_graphics::Size;
use truesheet_ui_layout::{ContentHeight, SheetTiers, SizeResolver};

/// Drives a [`SheetWidget`] from host configuration and measurements.
///
/// Viewport and content heights start unmeasured (zero) and are refreshed by
/// [`SheetBehavior::on_layout`]. Every configuration pass recomputes all tiers
/// from scratch and hands them to the widget in a single write.
#[derive(Debug)]
pub struct SheetBehavior<W: SheetWidget> {
    widget: W,
    config: SheetConfig,
    viewport: Size,
    content_height: ContentHeight,
    tiers: SheetTiers,
}

impl<W: SheetWidget> SheetBehavior<W> {
    pub fn new(widget: W, config: SheetConfig) -> Self {
        let content_height = ContentHeight::default();
        let tiers = resolve_tiers(&config, Size::ZERO, content_height);
        let mut behavior = Self {
            widget,
            config,
            viewport: Size::ZERO,
            content_height,
            tiers,
        };
        behavior.widget.apply_tiers(&behavior.tiers);
        behavior
    }

    pub fn config(&self) -> &SheetConfig {
        &self.config
    }

    pub fn tiers(&self) -> &SheetTiers {
        &self.tiers
    }

    pub fn viewport(&self) -> Size {
        self.viewport
    }

    pub fn widget(&self) -> &W {
        &self.widget
    }

    pub fn widget_mut(&mut self) -> &mut W {
        &mut self.widget
    }

    pub fn mapper(&self) -> StateSizeMapper {
        StateSizeMapper::new(self.config.sizes.size_count())
    }

    /// Replaces the configuration and reruns the configuration pass.
    pub fn set_config(&mut self, config: SheetConfig) -> SheetTiers {
        self.config = config;
        self.configure()
    }

    /// Refreshes measurements after a layout pass and reconfigures.
    ///
    /// `content` and `footer` are the measured view heights, `None` when the
    /// view is absent.
    pub fn on_layout(
        &mut self,
        viewport: Size,
        content: Option<f32>,
        footer: Option<f32>,
    ) -> SheetTiers {
        self.viewport = viewport;
        self.content_height = ContentHeight::measure(content, footer);
        self.configure()
    }

    /// Resolves every tier against the current inputs and writes them to the widget.
    pub fn configure(&mut self) -> SheetTiers {
        let tiers = resolve_tiers(&self.config, self.viewport, self.content_height);

        log::debug!(
            "configured {} sheet size(s) for viewport {}x{}: {tiers:?}",
            self.config.sizes.size_count().get(),
            self.viewport.width,
            self.viewport.height
        );

        self.widget.apply_tiers(&tiers);
        self.tiers = tiers;
        tiers
    }

    /// Requests the state declared at `index`.
    ///
    /// Returns [`SheetEvent::Present`] unless the index has no declared size,
    /// in which case the sheet is hidden instead.
    pub fn present(&mut self, index: SizeIndex) -> Option<SheetEvent> {
        let state = self.mapper().state_for_index(index);
        self.widget.request_state(state);

        if state == SheetState::Hidden {
            log::warn!("no sheet size declared at index {}, hiding the sheet", index.0);
            return None;
        }

        Some(SheetEvent::Present { index })
    }

    pub fn dismiss(&mut self) {
        let state = self.mapper().state_for_index(SizeIndex::DISMISSED);
        self.widget.request_state(state);
    }

    /// Size info for the widget's current state, if it rests on a declared size.
    pub fn current_size_info(&self) -> Option<SizeInfo> {
        self.mapper()
            .info_for_state(self.widget.state(), &self.tiers, self.config.density)
    }

    /// Translates a state reported by the widget into a host notification.
    pub fn on_state_changed(&self, state: SheetState) -> Option<SheetEvent> {
        if !state.is_settled() {
            return None;
        }
        if state == SheetState::Hidden {
            return Some(SheetEvent::Dismiss);
        }

        let info = self
            .mapper()
            .info_for_state(state, &self.tiers, self.config.density)?;
        log::debug!("sheet settled at size {} ({}dp)", info.index.0, info.value.0);
        Some(SheetEvent::SizeChange(info))
    }

    /// Whether the sheet should take the touch `event` from its content.
    pub fn should_intercept(&self, event: &PointerEvent, children: &[ContentChild]) -> bool {
        gesture_arbiter::should_intercept(event, self.widget.state(), children)
    }
}

fn resolve_tiers(
    config: &SheetConfig,
    viewport: Size,
    content_height: ContentHeight,
) -> SheetTiers {
    let resolver = SizeResolver::new(viewport, content_height, config.max_height, config.density);
    SheetTiers::configure(&config.sizes, &resolver)
}
