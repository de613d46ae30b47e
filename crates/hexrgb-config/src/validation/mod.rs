//! Configuration validation.
//!
//! Each section has its own check; this orchestrator runs them all and
//! collects errors into a single `ConfigError`.

mod helpers;
mod server;


use crate::schema::HexRgbConfig;
use hexrgb_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &HexRgbConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    server::validate_server(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
