//! End-to-end tests for the sheet behavior against a fake widget.
//!
//! These drive configuration passes, presentation and touch arbitration the
//! way a host would and check what reaches the widget and the host.

use truesheet_testing::prelude::*;
use truesheet_ui::prelude::*;

const PHONE: Size = Size {
    width: 1080.0,
    height: 2000.0,
};

fn behavior(sizes: &[&str]) -> SheetBehavior<FakeSheetWidget> {
    let config = SheetConfig::default().with_sizes(sizes.iter().copied());
    SheetBehavior::new(FakeSheetWidget::new(), config)
}

#[test]
fn construction_applies_unmeasured_tiers() {
    let sheet = behavior(&["medium", "large"]);
    let tiers = sheet.widget().last_applied().expect("initial pass");
    assert_eq!(tiers.max_height, Px::ZERO);
    assert_eq!(tiers.peek_height, Some(Px::ZERO));
    assert_eq!(sheet.widget().applied().len(), 1);
}

#[test]
fn layout_pass_writes_tiers_once() {
    let mut sheet = behavior(&["25%", "medium", "large"]);
    let tiers = sheet.on_layout(PHONE, Some(800.0), None);

    assert_eq!(sheet.widget().applied().len(), 2);
    assert_eq!(sheet.widget().last_applied(), Some(&tiers));
    assert_eq!(tiers.peek_height, Some(Px(500.0)));
    assert_eq!(tiers.half_expanded_ratio, Some(0.5));
    assert_eq!(tiers.max_height, Px(2000.0));
    assert!(!tiers.fit_to_contents);
    assert!(tiers.hideable);
}

#[test]
fn rotation_recomputes_every_tier() {
    let mut sheet = behavior(&["small", "60%", "large"]);
    sheet.on_layout(PHONE, None, None);
    let landscape = sheet.on_layout(Size::new(2000.0, 1000.0), None, None);

    assert_eq!(landscape.peek_height, Some(Px(250.0)));
    assert_eq!(landscape.max_height, Px(1000.0));
    assert_eq!(landscape.viewport_height, Px(1000.0));
    assert_approx_eq(
        landscape.half_expanded_ratio.expect("ratio"),
        0.6,
        1e-6,
        "landscape half-expanded ratio",
    );
}

#[test]
fn auto_size_follows_content_and_footer() {
    let mut sheet = behavior(&["auto"]);
    let tiers = sheet.on_layout(PHONE, Some(640.0), Some(120.0));
    assert_eq!(tiers.max_height, Px(760.0));
    assert!(tiers.skip_collapsed);

    let tiers = sheet.on_layout(PHONE, None, Some(120.0));
    assert_eq!(tiers.max_height, Px(120.0));
}

#[test]
fn max_height_caps_configuration() {
    let mut sheet = behavior(&["medium", "large"]);
    sheet.on_layout(PHONE, None, None);
    let config = sheet.config().clone().with_max_height(Px(900.0));
    let tiers = sheet.set_config(config);

    assert_eq!(tiers.peek_height, Some(Px(900.0)));
    assert_eq!(tiers.max_height, Px(900.0));
    assert_tiers_within(&tiers, Px(900.0), "capped sheet");
}

#[test]
fn extra_sizes_keep_three_tiers() {
    let mut sheet = behavior(&["small", "medium", "large", "auto"]);
    sheet.on_layout(PHONE, Some(100.0), None);
    assert_eq!(sheet.config().sizes.size_count(), SizeCount::Three);
    assert_eq!(sheet.tiers().max_height, Px(2000.0));
}

#[test]
fn present_requests_declared_state() {
    let mut sheet = behavior(&["small", "medium", "large"]);
    sheet.on_layout(PHONE, None, None);

    assert_eq!(
        sheet.present(SizeIndex(1)),
        Some(SheetEvent::Present { index: SizeIndex(1) })
    );
    assert_eq!(
        sheet.widget().last_requested(),
        Some(SheetState::HalfExpanded)
    );
}

#[test]
fn present_out_of_range_hides() {
    let mut sheet = behavior(&["medium", "large"]);
    assert_eq!(sheet.present(SizeIndex(5)), None);
    assert_eq!(sheet.widget().last_requested(), Some(SheetState::Hidden));
}

#[test]
fn dismiss_requests_hidden_and_reports_dismiss() {
    let mut sheet = behavior(&["medium", "large"]);
    sheet.present(SizeIndex(0));
    sheet.dismiss();
    assert_eq!(sheet.widget().last_requested(), Some(SheetState::Hidden));
    assert_eq!(
        sheet.on_state_changed(SheetState::Hidden),
        Some(SheetEvent::Dismiss)
    );
}

#[test]
fn settled_states_report_size_in_dp() {
    let config = SheetConfig::default()
        .with_sizes(["small", "medium", "large"])
        .with_density(Density(2.0));
    let mut sheet = SheetBehavior::new(FakeSheetWidget::new(), config);
    sheet.on_layout(PHONE, None, None);

    let expected = [
        (SheetState::Collapsed, SizeIndex(0), Dp(250.0)),
        (SheetState::HalfExpanded, SizeIndex(1), Dp(500.0)),
        (SheetState::Expanded, SizeIndex(2), Dp(1000.0)),
    ];
    for (state, index, value) in expected {
        assert_eq!(
            sheet.on_state_changed(state),
            Some(SheetEvent::SizeChange(SizeInfo { index, value }))
        );
    }
    assert_eq!(sheet.on_state_changed(SheetState::Dragging), None);
    assert_eq!(sheet.on_state_changed(SheetState::Settling), None);
}

#[test]
fn transient_states_are_not_reported_even_when_unmeasured() {
    let sheet = behavior(&["auto"]);
    for state in [SheetState::Dragging, SheetState::Settling] {
        assert!(!state.is_settled());
        assert_eq!(sheet.on_state_changed(state), None);
    }
    assert_eq!(
        sheet.on_state_changed(SheetState::Hidden),
        Some(SheetEvent::Dismiss)
    );
}

#[test]
fn current_size_info_tracks_widget_state() {
    let mut sheet = SheetBehavior::new(
        FakeSheetWidget::deferred(),
        SheetConfig::default().with_sizes(["medium", "large"]),
    );
    sheet.on_layout(PHONE, None, None);

    sheet.present(SizeIndex(1));
    assert_eq!(sheet.current_size_info(), None);

    sheet.widget_mut().settle(SheetState::Expanded);
    assert_eq!(
        sheet.current_size_info(),
        Some(SizeInfo {
            index: SizeIndex(1),
            value: Dp(2000.0)
        })
    );
}

#[test]
fn scrolled_list_keeps_touches_while_expanded() {
    let mut sheet = behavior(&["medium", "large"]);
    sheet.on_layout(PHONE, None, None);
    sheet.present(SizeIndex(1));

    let children = [
        fixed_child(Point::ZERO, Size::new(1080.0, 200.0)),
        scrollable_child(320.0, Point::new(0.0, 200.0), Size::new(1080.0, 1800.0)),
    ];
    let over_list = PointerEvent::new(PointerEventKind::Down, Point::new(540.0, 900.0));
    let over_header = PointerEvent::new(PointerEventKind::Down, Point::new(540.0, 100.0));

    assert!(!sheet.should_intercept(&over_list, &children));
    assert!(sheet.should_intercept(&over_header, &children));

    sheet.present(SizeIndex(0));
    assert!(sheet.should_intercept(&over_list, &children));
}
