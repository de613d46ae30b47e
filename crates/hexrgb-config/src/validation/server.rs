use crate::schema::HexRgbConfig;

use super::helpers::validate_range;

/// Validate the `[server]` section.
pub(crate) fn validate_server(errors: &mut Vec<String>, config: &HexRgbConfig) {
    let server = &config.server;

    if server.host.trim().is_empty() {
        errors.push("server.host must not be empty".into());
    }
    validate_range(errors, "server.port", u64::from(server.port), 1, 65535);
    validate_range(
        errors,
        "server.request_timeout_secs",
        server.request_timeout_secs,
        1,
        300,
    );
    validate_range(
        errors,
        "server.max_request_bytes",
        server.max_request_bytes as u64,
        1024,
        65536,
    );
}
