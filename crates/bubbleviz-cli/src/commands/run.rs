use bubbleviz_core::TimelineConfig;

pub fn run(size: usize, config: TimelineConfig, seed: Option<u64>) {
    let model = super::make_model(size, seed);
    let mut app = crate::tui::app::App::new(model, config);
    if let Err(e) = app.run() {
        log::error!("TUI error: {e}");
        eprintln!("TUI error: {e}");
        std::process::exit(1);
    }
}
