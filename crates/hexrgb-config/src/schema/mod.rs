//! Configuration schema. Every section has serde defaults, so a partial
//! (or empty) file is a valid config.

mod logging;
mod server;

pub use logging::*;
pub use server::*;

use serde::{Deserialize, Serialize};

/// Root configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HexRgbConfig {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = HexRgbConfig::default();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.server.request_timeout_secs, 10);
        assert_eq!(config.server.max_request_bytes, 8192);
        assert!(!config.server.expose_error_details);
        assert_eq!(config.logging.level, LogLevel::Info);
    }

    #[test]
    fn empty_toml_is_default() {
        let config: HexRgbConfig = toml::from_str("").unwrap();
        assert_eq!(config, HexRgbConfig::default());
    }

    #[test]
    fn partial_section_keeps_other_defaults() {
        let config: HexRgbConfig = toml::from_str("[server]\nport = 8080\n").unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.logging.level, LogLevel::Info);
    }

    #[test]
    fn log_level_lowercase() {
        let config: HexRgbConfig = toml::from_str("[logging]\nlevel = \"debug\"\n").unwrap();
        assert_eq!(config.logging.level, LogLevel::Debug);
        assert_eq!(config.logging.directive(), "hexrgb=debug");
    }

    #[test]
    fn unknown_log_level_is_rejected() {
        assert!(toml::from_str::<HexRgbConfig>("[logging]\nlevel = \"loud\"\n").is_err());
    }

    #[test]
    fn bind_addr_formats() {
        let mut server = ServerConfig::default();
        assert_eq!(server.bind_addr(), "127.0.0.1:3000");

        server.host = "::1".into();
        server.port = 8080;
        assert_eq!(server.bind_addr(), "[::1]:8080");

        server.host = "localhost".into();
        assert_eq!(server.bind_addr(), "localhost:8080");
    }

    #[test]
    fn round_trips_through_json() {
        let mut config = HexRgbConfig::default();
        config.server.expose_error_details = true;
        let json = serde_json::to_string(&config).unwrap();
        let parsed: HexRgbConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }
}
