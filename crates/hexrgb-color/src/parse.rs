//! Internal helpers: `#` removal, digit expansion and byte parsing.

use std::borrow::Cow;
use std::sync::LazyLock;

use hexrgb_common::{ConvertError, Rgb};
use regex::Regex;

/// One or more ASCII hex digits, nothing else.
pub(crate) static HEX_DIGITS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9A-Fa-f]+$").unwrap());

/// Remove the first `#`, wherever it sits. Later ones are kept.
pub(super) fn normalize(hex: &str) -> Cow<'_, str> {
    match hex.find('#') {
        Some(_) => Cow::Owned(hex.replacen('#', "", 1)),
        None => Cow::Borrowed(hex),
    }
}

/// Turn 3 or 6 already-validated ASCII hex digits into channels.
pub(super) fn expand(hex: &str) -> Result<Rgb, ConvertError> {
    match hex.len() {
        3 => {
            // #RGB -> #RRGGBB
            let r = byte(&hex[0..1].repeat(2))?;
            let g = byte(&hex[1..2].repeat(2))?;
            let b = byte(&hex[2..3].repeat(2))?;
            Ok(Rgb::new(r, g, b))
        }
        6 => {
            let r = byte(&hex[0..2])?;
            let g = byte(&hex[2..4])?;
            let b = byte(&hex[4..6])?;
            Ok(Rgb::new(r, g, b))
        }
        _ => Err(ConvertError::InvalidLength),
    }
}

fn byte(pair: &str) -> Result<u8, ConvertError> {
    u8::from_str_radix(pair, 16).map_err(|_| ConvertError::InvalidCharacters)
}
