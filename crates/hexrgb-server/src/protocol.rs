//! JSON bodies the server sends. Successful conversions serialize
//! [`hexrgb_common::Rgb`] directly.

use serde::Serialize;

pub const HEALTH_BODY: &str = "Hello!";
// The trailing space is part of the wire message.
pub const MSG_HEX_MISSING: &str = "hex parameter missing ";
pub const MSG_INVALID_HEX: &str = "invalid hex format";
pub const MSG_NOT_FOUND: &str = "not found";
pub const MSG_METHOD_NOT_ALLOWED: &str = "method not allowed";
pub const MSG_BAD_REQUEST: &str = "bad request";

/// `{"error": "<message>"}`
#[derive(Debug, Serialize)]
pub struct ErrorBody<'a> {
    pub error: &'a str,
}

impl<'a> ErrorBody<'a> {
    pub fn new(error: &'a str) -> Self {
        Self { error }
    }
}
