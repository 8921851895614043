use serde::{Deserialize, Serialize};

use super::null_as_default;
use crate::listing::Identified;

/// A recipient of press releases who earns points for publishing them.
///
/// `total_points` and `points_in_ksh` are computed by the server and only
/// ever displayed.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Journalist {
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub phone: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub country: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub media_house: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_points: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub points_in_ksh: f64,
}

impl Journalist {
    /// Label used in recipient pickers: the name, or the email when unnamed.
    pub fn display_name(&self) -> &str {
        if self.name.trim().is_empty() {
            &self.email
        } else {
            &self.name
        }
    }
}

impl Identified for Journalist {
    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct JournalistPayload {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub country: String,
    pub title: String,
    pub media_house: String,
}

impl JournalistPayload {
    pub fn missing_field(&self) -> Option<&'static str> {
        if self.email.trim().is_empty() {
            Some("email")
        } else {
            None
        }
    }
}

impl From<&Journalist> for JournalistPayload {
    fn from(journalist: &Journalist) -> Self {
        Self {
            name: journalist.name.clone(),
            email: journalist.email.clone(),
            phone: journalist.phone.clone(),
            country: journalist.country.clone(),
            title: journalist.title.clone(),
            media_house: journalist.media_house.clone(),
        }
    }
}

/// Result of `POST upload/`. Rows are imported independently, so a partial
/// failure still reports what was created and updated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UploadSummary {
    #[serde(default)]
    pub created: u64,
    #[serde(default)]
    pub updated: u64,
    #[serde(default)]
    pub failed: u64,
}

impl UploadSummary {
    pub fn has_failures(&self) -> bool {
        self.failed > 0
    }
}

/// Spreadsheet extensions accepted by the bulk import.
pub const UPLOAD_EXTENSIONS: [&str; 2] = [".xlsx", ".xls"];

/// Whether `file_name` looks like an Excel workbook the import understands.
pub fn is_spreadsheet(file_name: &str) -> bool {
    let lower = file_name.to_ascii_lowercase();
    UPLOAD_EXTENSIONS.iter().any(|ext| lower.ends_with(ext))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aggregates_default_to_zero() {
        let json = r#"{"id": "j1", "email": "a@b.c", "total_points": null}"#;
        let journalist: Journalist = serde_json::from_str(json).unwrap();
        assert_eq!(journalist.total_points, 0);
        assert_eq!(journalist.points_in_ksh, 0.0);
        assert_eq!(journalist.display_name(), "a@b.c");
    }

    #[test]
    fn only_excel_files_are_uploaded() {
        assert!(is_spreadsheet("journalists.xlsx"));
        assert!(is_spreadsheet("OLD.XLS"));
        assert!(!is_spreadsheet("journalists.csv"));
    }

    #[test]
    fn partial_upload_reports_failures() {
        let summary: UploadSummary =
            serde_json::from_str(r#"{"created": 4, "updated": 2, "failed": 1}"#).unwrap();
        assert!(summary.has_failures());
        assert_eq!(summary.created + summary.updated, 6);
    }
}
