//! hexrgb-server: HTTP front end for hex to RGB conversion.
//!
//! Routes:
//! - `GET /` health check, answers `Hello!`
//! - `GET /hexToRgb?hex=<value>` answers `{"r":..,"g":..,"b":..}` or a
//!   400 with `{"error": ..}`

mod connection;
mod http;
mod protocol;
mod query;
mod routes;
mod server;

pub use server::Server;
