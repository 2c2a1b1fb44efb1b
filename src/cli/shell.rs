//! CLI entry point: configuration, session wiring, and the wizard run.

use crate::cli::forms::{run_wizard, FormResult};
use crate::cli::output::{self, OutputPreferences};
use crate::cli::summary;
use crate::config::{Config, ConfigManager};
use crate::core::session::{IntakeSession, LogObserver};
use crate::core::time::SystemClock;
use crate::errors::IntakeError;

/// Runs the interactive intake form end to end.
pub fn run_cli() -> Result<(), IntakeError> {
    let config = load_config();
    output::set_preferences(OutputPreferences {
        quiet_mode: config.quiet_mode,
        screen_reader_mode: config.screen_reader_mode,
    });

    let mut session = IntakeSession::new(SystemClock);
    session.register_observer(Box::new(LogObserver));

    match run_wizard(&mut session)? {
        FormResult::Completed => {
            if let Some(application) = session.submission() {
                summary::render(application);
            }
        }
        FormResult::Cancelled => {
            output::warning("Application cancelled; nothing was submitted.");
        }
    }
    Ok(())
}

/// A broken or missing configuration never blocks the form.
fn load_config() -> Config {
    match ConfigManager::new().and_then(|manager| manager.load()) {
        Ok(config) => config,
        Err(err) => {
            output::warning(format!("Falling back to default configuration: {err}"));
            Config::default()
        }
    }
}
