//! HTTP surface of the static host.
//!
//! - `runtime_config`: `GET /config.json`, read by the dashboard at start-up.
//! - `assets`: the compiled dashboard, with `index.html` as the fallback for
//!   client-side routes.

pub mod assets;
pub mod runtime_config;
