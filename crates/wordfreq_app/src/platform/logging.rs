//! Platform logging initialization for wordfreq_app.

use super::config::AppConfig;

/// Install the global logger described by `config`.
pub fn initialize(config: &AppConfig) {
    engine_logging::initialize(
        config.log_destination.into(),
        config.log_level.into(),
        &config.log_file,
    );
}
