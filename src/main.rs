use breaklock::app::App;
use breaklock::breaklock::Breaklock;
use breaklock::error::Result;
use breaklock::logging;
use breaklock::settings::Settings;
use crossterm::terminal;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    let (settings, settings_error) = match Settings::load() {
        Ok(settings) => (settings, None),
        Err(e) => (Settings::default(), Some(e)),
    };
    if let Err(e) = logging::init(&settings.log) {
        eprintln!("logging disabled: {e}");
    }
    if let Some(e) = settings_error {
        warn!(error = %e, "falling back to default settings");
    }
    info!(?settings, "starting");

    let (counter_tx, counter_rx) = tokio::sync::mpsc::channel(32);
    let (tx_events, rx_events) = tokio::sync::mpsc::channel(32);
    let breaklock = Breaklock::new(counter_tx, &settings);
    let mut app = App::new(breaklock, settings);

    terminal::enable_raw_mode()?;
    let mut terminal = ratatui::init();
    let app_result = app.run(&mut terminal, tx_events, rx_events, counter_rx).await; // mainloop
    terminal::disable_raw_mode()?;

    ratatui::restore();
    app_result
}
