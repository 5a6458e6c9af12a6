use anyhow::Result;
use clap::Parser;
use truesheet_ui::prelude::*;

/// Logs what the engine hands to the platform widget.
#[derive(Debug)]
struct ConsoleWidget {
    state: SheetState,
}

impl SheetWidget for ConsoleWidget {
    fn apply_tiers(&mut self, tiers: &SheetTiers) {
        log::info!(
            "widget <- peek {:?}, half ratio {:?}, max {}px, fit-to-contents {}, skip-collapsed {}",
            tiers.peek_height.map(|peek| peek.0),
            tiers.half_expanded_ratio,
            tiers.max_height.0,
            tiers.fit_to_contents,
            tiers.skip_collapsed
        );
    }

    fn state(&self) -> SheetState {
        self.state
    }

    fn request_state(&mut self, state: SheetState) {
        log::info!("widget <- state {state:?}");
        self.state = state;
    }
}

/// Replays a scripted sheet session and logs the engine's decisions
#[derive(Parser, Debug)]
#[command(name = "sheet-demo", version)]
struct DemoArgs {
    /// Declared sheet sizes, e.g. `auto`, `small`, `42%`, `320`
    #[arg(value_name = "SIZES")]
    sizes: Vec<String>,

    /// Ceiling for every resolved height, in pixels
    #[arg(long, value_name = "PX")]
    max_height: Option<f32>,

    /// Display density used for dp conversion
    #[arg(long, default_value_t = 2.75)]
    density: f32,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let args = DemoArgs::parse();

    let mut config = SheetConfig::default().with_density(Density(args.density));
    if !args.sizes.is_empty() {
        config = config.with_sizes(args.sizes);
    }
    if let Some(max_height) = args.max_height {
        config = config.with_max_height(Px(max_height));
    }

    println!("=== TrueSheet sizing demo ===");
    println!("sizes: {:?}", config.sizes.as_slice());
    println!();

    let widget = ConsoleWidget {
        state: SheetState::Hidden,
    };
    let mut sheet = SheetBehavior::new(widget, config);

    sheet.on_layout(Size::new(1080.0, 2220.0), Some(1320.0), Some(96.0));

    let last = sheet.config().sizes.size_count().get() as i32 - 1;
    for index in 0..=last {
        if let Some(event) = sheet.present(SizeIndex(index)) {
            println!("host <- {event:?}");
        }
        let state = sheet.widget().state();
        if let Some(event) = sheet.on_state_changed(state) {
            println!("host <- {event:?}");
        }
    }

    let children = [ContentChild::scrollable(
        480.0,
        Rect::from_origin_size(Point::new(0.0, 400.0), Size::new(1080.0, 1820.0)),
    )];
    for (label, position) in [
        ("over scrolled list", Point::new(540.0, 1200.0)),
        ("over sheet header", Point::new(540.0, 200.0)),
    ] {
        let down = PointerEvent::new(PointerEventKind::Down, position);
        println!(
            "touch down {label}: sheet intercepts = {}",
            sheet.should_intercept(&down, &children)
        );
    }

    println!("rotating to landscape");
    sheet.on_layout(Size::new(2220.0, 1080.0), Some(1320.0), Some(96.0));
    if let Some(info) = sheet.current_size_info() {
        println!("host <- {:?}", SheetEvent::SizeChange(info));
    }

    sheet.dismiss();
    if let Some(event) = sheet.on_state_changed(sheet.widget().state()) {
        println!("host <- {event:?}");
    }

    Ok(())
}
