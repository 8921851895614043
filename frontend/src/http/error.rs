//! Failure taxonomy of every API call.
//!
//! Transport failures, a 401, client-side validation failures (4xx with a
//! message) and server errors (5xx) are kept apart so that the UI can show a
//! specific toast for the first three and a generic one for the last.

use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("Your session has expired, please sign in again")]
    Unauthorized,
    #[error("{message}")]
    Validation { status: u16, message: String },
    #[error("Server error ({status}), please try again later")]
    Server { status: u16 },
    #[error("Unexpected response: {0}")]
    Decode(String),
    #[error("Could not encode the request: {0}")]
    Encode(String),
    /// The caller aborted the request. Never shown to the user.
    #[error("Request cancelled")]
    Aborted,
}

impl ApiError {
    /// Whether the failure deserves a toast. Aborts are silent and a 401 is
    /// already answered by the redirect to the login page.
    pub fn is_reportable(&self) -> bool {
        !matches!(self, ApiError::Aborted | ApiError::Unauthorized)
    }
}

impl From<gloo_net::Error> for ApiError {
    fn from(error: gloo_net::Error) -> Self {
        match error {
            gloo_net::Error::JsError(error) if error.name == "AbortError" => ApiError::Aborted,
            gloo_net::Error::JsError(error) => ApiError::Network(error.message),
            gloo_net::Error::SerdeError(error) => ApiError::Decode(error.to_string()),
            other => ApiError::Network(other.to_string()),
        }
    }
}

/// Maps a non-2xx status and its body onto the taxonomy.
pub fn classify(status: u16, body: &str) -> ApiError {
    match status {
        401 => ApiError::Unauthorized,
        400..=499 => ApiError::Validation {
            status,
            message: error_message(body).unwrap_or_else(|| format!("Request failed ({status})")),
        },
        _ => ApiError::Server { status },
    }
}

const MESSAGE_KEYS: [&str; 3] = ["detail", "message", "error"];
const MAX_RAW_BODY: usize = 200;

/// Human readable message of an error body.
///
/// Looks at `detail`, `message` and `error` first, then at the first field
/// error of a validation map (`{"email": ["Enter a valid email."]}`), and
/// finally at the raw body when it is short plain text.
pub fn error_message(body: &str) -> Option<String> {
    let body = body.trim();
    if body.is_empty() {
        return None;
    }
    match serde_json::from_str::<Value>(body) {
        Ok(Value::Object(fields)) => {
            for key in MESSAGE_KEYS {
                if let Some(message) = fields.get(key).and_then(first_text) {
                    return Some(message);
                }
            }
            fields
                .iter()
                .find_map(|(field, value)| first_text(value).map(|message| format!("{field}: {message}")))
        }
        Ok(value) => first_text(&value),
        Err(_) if body.len() <= MAX_RAW_BODY && !body.starts_with('<') => Some(body.to_string()),
        Err(_) => None,
    }
}

fn first_text(value: &Value) -> Option<String> {
    match value {
        Value::String(text) if !text.trim().is_empty() => Some(text.trim().to_string()),
        Value::Array(values) => values.iter().find_map(first_text),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unauthorized_is_its_own_variant() {
        assert_eq!(classify(401, r#"{"detail": "Token expired"}"#), ApiError::Unauthorized);
    }

    #[test]
    fn client_errors_carry_the_server_message() {
        let error = classify(400, r#"{"detail": "Insufficient points"}"#);
        assert_eq!(
            error,
            ApiError::Validation {
                status: 400,
                message: "Insufficient points".into()
            }
        );
        assert_eq!(error.to_string(), "Insufficient points");
    }

    #[test]
    fn server_errors_hide_the_body() {
        let error = classify(502, "<html>Bad gateway</html>");
        assert_eq!(error, ApiError::Server { status: 502 });
        assert!(error.is_reportable());
    }

    #[test]
    fn message_falls_back_to_field_errors() {
        let body = r#"{"email": ["Enter a valid email address."]}"#;
        assert_eq!(
            error_message(body).as_deref(),
            Some("email: Enter a valid email address.")
        );
    }

    #[test]
    fn message_prefers_known_keys() {
        let body = r#"{"name": ["ignored"], "error": "Upload failed"}"#;
        assert_eq!(error_message(body).as_deref(), Some("Upload failed"));
    }

    #[test]
    fn raw_bodies_are_used_only_when_short_text() {
        assert_eq!(error_message("Not allowed").as_deref(), Some("Not allowed"));
        assert_eq!(error_message("<h1>Forbidden</h1>"), None);
        assert_eq!(error_message("   "), None);
        assert_eq!(
            classify(404, ""),
            ApiError::Validation {
                status: 404,
                message: "Request failed (404)".into()
            }
        );
    }

    #[test]
    fn aborts_and_redirects_are_silent() {
        assert!(!ApiError::Aborted.is_reportable());
        assert!(!ApiError::Unauthorized.is_reportable());
        assert!(ApiError::Network("offline".into()).is_reportable());
    }
}
