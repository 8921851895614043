//! Types and client logic shared by the Wezawire dashboard and its host.
//!
//! Nothing in here touches the browser, so all of it is tested natively.

pub mod document;
pub mod events;
pub mod listing;
pub mod model;
pub mod templates;
pub mod validation;
