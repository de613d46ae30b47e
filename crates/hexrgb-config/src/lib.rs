//! hexrgb configuration.
//!
//! TOML-based configuration for the conversion server. All sections use
//! defaults, so partial configs (or no config at all) work out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use hexrgb_config::load_config;
//!
//! let config = load_config().expect("failed to load config");
//! println!("{}", config.server.bind_addr());
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{HexRgbConfig, LogLevel, LoggingConfig, ServerConfig};
pub use toml_loader::{create_default_config, default_config_path, load_from_path, CONFIG_ENV_VAR};

use hexrgb_common::ConfigError;
use std::path::Path;

/// Load and validate config from the platform default path, creating
/// a documented default file if none exists.
pub fn load_config() -> Result<HexRgbConfig, ConfigError> {
    let config = toml_loader::load_default()?;
    validation::validate(&config)?;
    Ok(config)
}

/// Load and validate config from an explicit path. The file must exist.
pub fn load_config_from(path: &Path) -> Result<HexRgbConfig, ConfigError> {
    let config = toml_loader::load_from_path(path)?;
    validation::validate(&config)?;
    Ok(config)
}
