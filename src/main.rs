use anyhow::Result;
use kanban::{config::GlobalConfig, logging, tui};

fn main() -> Result<()> {
    // A broken config file shouldn't keep the board from starting
    let (config, config_error) = match GlobalConfig::load() {
        Ok(config) => (config, None),
        Err(err) => (GlobalConfig::default(), Some(err)),
    };

    let _log_guard = match GlobalConfig::data_dir().and_then(|dir| logging::init(&dir, &config.log)) {
        Ok(guard) => Some(guard),
        Err(err) => {
            eprintln!("warning: logging disabled: {err:#}");
            None
        }
    };

    if let Some(err) = config_error {
        tracing::warn!("using default config: {err:#}");
    }
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "starting");

    // Initialize and run the app
    let mut app = tui::App::new(&config)?;
    app.run()?;

    Ok(())
}
