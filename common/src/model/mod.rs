//! Wire DTOs exchanged with the Wezawire REST API.
//!
//! Every entity is owned by the server. The dashboard keeps short-lived copies
//! of these values in view state and never derives server-computed fields
//! (points, KSH totals) on its own.

pub mod auth;
pub mod client;
pub mod dashboard;
pub mod journalist;
pub mod page;
pub mod press_release;
pub mod published_link;
pub mod template;
pub mod withdrawal;

use serde::{Deserialize, Deserializer};

/// Decodes `null` the same way as a missing field.
///
/// The API returns `null` for blank optional columns; the forms treat those as
/// empty strings, so the DTOs keep plain `String`s.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Countries offered by the client, generation and distribution forms.
pub const COUNTRIES: [&str; 9] = [
    "Kenya",
    "Nigeria",
    "Zambia",
    "Ghana",
    "South Africa",
    "Burundi",
    "Rwanda",
    "Uganda",
    "Tanzania",
];
