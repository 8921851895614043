use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::null_as_default;
use crate::listing::Identified;

/// Review state of a submitted link. `Approved` and `Rejected` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

impl LinkStatus {
    pub const ALL: [LinkStatus; 3] = [LinkStatus::Pending, LinkStatus::Approved, LinkStatus::Rejected];

    pub fn as_str(&self) -> &'static str {
        match self {
            LinkStatus::Pending => "pending",
            LinkStatus::Approved => "approved",
            LinkStatus::Rejected => "rejected",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            LinkStatus::Pending => "Pending",
            LinkStatus::Approved => "Approved",
            LinkStatus::Rejected => "Rejected",
        }
    }

    pub fn is_terminal(&self) -> bool {
        !matches!(self, LinkStatus::Pending)
    }
}

/// A journalist's proof that a press release was published.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PublishedLink {
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub journalist: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub journalist_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub press_release: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub press_release_title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub url: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default)]
    pub publication_date: Option<NaiveDate>,
    #[serde(default)]
    pub status: LinkStatus,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub reviewed_by: Option<i64>,
    #[serde(default)]
    pub reviewer_name: Option<String>,
    #[serde(default)]
    pub reviewed_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Identified for PublishedLink {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Body of `POST published-links/`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NewPublishedLink {
    pub press_release: String,
    pub url: String,
    pub title: String,
    pub publication_date: Option<NaiveDate>,
}

impl NewPublishedLink {
    /// Blank form for `press_release`, dated `today`.
    pub fn for_release(press_release: impl Into<String>, today: NaiveDate) -> Self {
        Self {
            press_release: press_release.into(),
            publication_date: Some(today),
            ..Default::default()
        }
    }
}

impl From<&PublishedLink> for NewPublishedLink {
    /// Edit draft of an already submitted link.
    fn from(link: &PublishedLink) -> Self {
        Self {
            press_release: link.press_release.clone(),
            url: link.url.clone(),
            title: link.title.clone(),
            publication_date: link.publication_date,
        }
    }
}

/// Body of `POST published-links/{id}/reject/`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RejectLink {
    pub notes: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_review_fields() {
        let json = r#"{
            "id": "abc",
            "journalist": "j1",
            "journalist_name": "Wanjiru",
            "press_release": "pr1",
            "press_release_title": "Launch",
            "url": "https://news.example/launch",
            "title": "Launch story",
            "publication_date": "2024-05-02",
            "status": "rejected",
            "notes": "broken link",
            "reviewed_by": 7,
            "reviewer_name": null,
            "reviewed_at": "2024-05-03T08:30:00Z",
            "created_at": "2024-05-02T12:00:00Z"
        }"#;
        let link: PublishedLink = serde_json::from_str(json).unwrap();
        assert_eq!(link.status, LinkStatus::Rejected);
        assert!(link.status.is_terminal());
        assert_eq!(link.notes.as_deref(), Some("broken link"));
        assert_eq!(link.publication_date, NaiveDate::from_ymd_opt(2024, 5, 2));
    }

    #[test]
    fn reject_body_carries_notes_only() {
        let body = serde_json::to_value(RejectLink {
            notes: "broken link".into(),
        })
        .unwrap();
        assert_eq!(body, serde_json::json!({"notes": "broken link"}));
    }

    #[test]
    fn new_link_serializes_date_as_iso_day() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let link = NewPublishedLink::for_release("pr1", today);
        let body = serde_json::to_value(link).unwrap();
        assert_eq!(body["publication_date"], "2024-06-01");
        assert_eq!(body["press_release"], "pr1");
    }

    #[test]
    fn edit_draft_keeps_the_submitted_fields() {
        let link = PublishedLink {
            id: "abc".into(),
            press_release: "pr1".into(),
            url: "https://nation.africa/solar".into(),
            title: "Solar farm opens".into(),
            publication_date: NaiveDate::from_ymd_opt(2024, 6, 1),
            status: LinkStatus::Rejected,
            ..Default::default()
        };
        let draft = NewPublishedLink::from(&link);
        assert_eq!(draft.press_release, "pr1");
        assert_eq!(draft.url, link.url);
        assert_eq!(draft.publication_date, link.publication_date);
    }
}
