use std::path::PathBuf;

/// Why a hex color string was rejected.
///
/// Variants are ordered by the check that produces them: type, then
/// length, then character set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ConvertError {
    #[error("Hex value must be a string")]
    InvalidType,

    #[error("Hex value must be 3 or 6 characters long after #-sign")]
    InvalidLength,

    #[error("Hex value contains invalid characters.")]
    InvalidCharacters,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

#[derive(Debug, thiserror::Error)]
pub enum HexRgbError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}
