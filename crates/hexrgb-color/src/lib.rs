//! Hex color to RGB conversion.
//!
//! Accepts 3-digit shorthand (`f3f`) and 6-digit (`F29F05`) hex colors,
//! with or without a `#`. Validation runs in a fixed order (type, length,
//! character set) and the first failing check decides the error.

mod parse;


use hexrgb_common::{ConvertError, Rgb};
use serde_json::Value;

use parse::{expand, normalize, HEX_DIGITS_RE};

/// Convert a hex color string into an [`Rgb`] triple.
///
/// The first `#` in the string is removed before validation. What remains
/// must be exactly 3 or 6 UTF-16 code units long, all of them hex digits.
///
/// ```
/// use hexrgb_color::hex_to_rgb;
/// use hexrgb_common::Rgb;
///
/// assert_eq!(hex_to_rgb("#041627").unwrap(), Rgb::new(4, 22, 39));
/// assert_eq!(hex_to_rgb("f3f").unwrap(), Rgb::new(255, 51, 255));
/// ```
pub fn hex_to_rgb(hex: &str) -> Result<Rgb, ConvertError> {
    let hex = normalize(hex);

    // Length in UTF-16 code units, so astral characters count as two.
    let len = hex.encode_utf16().count();
    if len != 3 && len != 6 {
        return Err(ConvertError::InvalidLength);
    }

    if !HEX_DIGITS_RE.is_match(&hex) {
        return Err(ConvertError::InvalidCharacters);
    }

    expand(&hex)
}

/// Convert a dynamically-typed value. Anything but a JSON string is
/// rejected with [`ConvertError::InvalidType`] before any other check.
pub fn hex_to_rgb_value(value: &Value) -> Result<Rgb, ConvertError> {
    match value {
        Value::String(s) => hex_to_rgb(s),
        _ => Err(ConvertError::InvalidType),
    }
}

/// Whether `hex` would convert successfully.
pub fn validate_hex(hex: &str) -> bool {
    hex_to_rgb(hex).is_ok()
}
