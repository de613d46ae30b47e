pub mod errors;
pub mod types;

pub use errors::{ConfigError, ConvertError, HexRgbError};
pub use types::Rgb;

pub type Result<T> = std::result::Result<T, HexRgbError>;
