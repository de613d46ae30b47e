//! Request routing.

use hexrgb_color::hex_to_rgb_value;
use hexrgb_config::ServerConfig;
use serde_json::Value;

use crate::http::{Request, Response};
use crate::protocol::{
    ErrorBody, HEALTH_BODY, MSG_HEX_MISSING, MSG_INVALID_HEX, MSG_METHOD_NOT_ALLOWED,
    MSG_NOT_FOUND,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Route {
    Health,
    HexToRgb,
}

/// Match a path the way Express does by default: case-insensitive, with
/// one optional trailing slash.
fn match_path(path: &str) -> Option<Route> {
    let path = match path.strip_suffix('/') {
        Some(trimmed) if !trimmed.is_empty() => trimmed,
        _ => path,
    };
    if path == "/" {
        Some(Route::Health)
    } else if path.eq_ignore_ascii_case("/hexToRgb") {
        Some(Route::HexToRgb)
    } else {
        None
    }
}

/// Dispatch a request to its handler. HEAD is answered like GET, minus the body.
pub fn route(request: &Request, config: &ServerConfig) -> Response {
    let Some(target) = match_path(&request.path) else {
        return Response::json(404, &ErrorBody::new(MSG_NOT_FOUND));
    };

    let head = match request.method.as_str() {
        "GET" => false,
        "HEAD" => true,
        _ => return Response::json(405, &ErrorBody::new(MSG_METHOD_NOT_ALLOWED)),
    };

    let response = match target {
        Route::HexToRgb => hex_to_rgb(request, config),
        Route::Health => Response::text(200, HEALTH_BODY),
    };
    if head {
        response.without_body()
    } else {
        response
    }
}

/// `GET /hexToRgb?hex=<value>`
fn hex_to_rgb(request: &Request, config: &ServerConfig) -> Response {
    let hex = match request.query.get("hex") {
        None => return Response::json(400, &ErrorBody::new(MSG_HEX_MISSING)),
        Some(Value::String(s)) if s.is_empty() => {
            return Response::json(400, &ErrorBody::new(MSG_HEX_MISSING));
        }
        Some(value) => value,
    };

    match hex_to_rgb_value(&hex) {
        Ok(rgb) => {
            tracing::debug!(input = %hex, rgb = %rgb.to_hex(), "converted");
            Response::json(200, &rgb)
        }
        Err(e) => {
            tracing::debug!(input = %hex, error = ?e, "rejected hex value");
            let message = if config.expose_error_details {
                e.to_string()
            } else {
                MSG_INVALID_HEX.to_string()
            };
            Response::json(400, &ErrorBody::new(&message))
        }
    }
}
