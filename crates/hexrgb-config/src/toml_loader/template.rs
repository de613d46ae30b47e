//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> &'static str {
    r##"# hexrgb configuration
# Only override what you want to change -- missing fields use defaults.

[server]
# host = "127.0.0.1"
# port = 3000                  # 1-65535
# request_timeout_secs = 10    # 1-300
# max_request_bytes = 8192     # 1024-65536
# Report "Hex value contains invalid characters." etc. instead of
# the generic "invalid hex format".
# expose_error_details = false

[logging]
# level = "info"               # trace, debug, info, warn, error
"##
}
