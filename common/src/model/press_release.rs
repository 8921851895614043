use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::journalist::Journalist;
use super::null_as_default;
use crate::document::{Node, from_markdown, markdown_from_html};
use crate::listing::Identified;

/// The full press release as returned by `press-releases/{id}/`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PressRelease {
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    /// HTML serialization of the document, kept for the email renderer.
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    /// Raw HTML body. Seeded from a template and otherwise written by the server.
    #[serde(default, deserialize_with = "null_as_default")]
    pub content: String,
    #[serde(default)]
    pub json_content: Option<Node>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub client: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub partner: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub country: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub is_published: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub shared_with: Vec<Journalist>,
    #[serde(default)]
    pub additional_data: Option<Value>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub author_name: String,
}

impl PressRelease {
    /// Title shown in lists, falling back to a neutral label for fresh drafts.
    pub fn display_title(&self) -> &str {
        if self.title.trim().is_empty() {
            "Untitled press release"
        } else {
            &self.title
        }
    }
}

impl PressRelease {
    /// The editable tree: the stored `json_content`, or the HTML `content`
    /// converted when the release has never been saved from the editor.
    pub fn document(&self) -> Node {
        match &self.json_content {
            Some(document) if !document.content.is_empty() => document.clone(),
            _ if !self.content.trim().is_empty() => from_markdown(&markdown_from_html(&self.content)),
            _ => Node::doc(Vec::new()),
        }
    }
}

impl Identified for PressRelease {
    fn id(&self) -> &str {
        &self.id
    }
}

/// The reduced shape embedded in dashboards and stats.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PressReleaseSummary {
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub client: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub country: String,
    #[serde(default)]
    pub is_published: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub author_name: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Identified for PressReleaseSummary {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Body of `POST press-releases/`.
///
/// The sidebar creates an empty draft (`{}`); the template picker seeds the
/// content and records which template it came from.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NewPressRelease {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(
        rename = "templateId",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub template_id: Option<String>,
}

/// Autosave body sent on every editor change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentUpdate {
    pub json_content: Node,
    pub description: String,
    pub title: String,
}

impl ContentUpdate {
    /// Derives the HTML and title from the tree, so the three fields never
    /// disagree.
    pub fn from_document(document: Node) -> Self {
        Self {
            description: document.to_html(),
            title: document.title(),
            json_content: document,
        }
    }
}

/// A partner named in an AI generation request.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Partner {
    pub name: String,
}

/// Body of `POST generate-press-release/`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GenerateRequest {
    pub prompt: String,
    pub id: String,
    pub client: String,
    pub country: String,
    pub partners: Vec<Partner>,
}

impl GenerateRequest {
    /// Text parts of the multipart body, with partners flattened into the
    /// bracketed keys the API expects.
    pub fn form_fields(&self) -> Vec<(String, String)> {
        let mut fields = vec![
            ("prompt".to_string(), self.prompt.clone()),
            ("id".to_string(), self.id.clone()),
            ("client".to_string(), self.client.clone()),
            ("country".to_string(), self.country.clone()),
        ];
        for (index, partner) in self.partners.iter().enumerate() {
            fields.push((format!("partners[{index}][name]"), partner.name.clone()));
        }
        fields
    }

    /// Multipart key for the logo of partner `index`.
    pub fn partner_image_key(index: usize) -> String {
        format!("partners[{index}][image]")
    }

    pub fn missing_field(&self) -> Option<&'static str> {
        if self.prompt.trim().is_empty() {
            Some("prompt")
        } else if self.client.trim().is_empty() {
            Some("client")
        } else if self.country.trim().is_empty() {
            Some("country")
        } else {
            None
        }
    }
}

/// Body of `POST distribute-press-release/`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Distribution {
    pub id: String,
    /// Recipient email addresses.
    pub journalists: Vec<String>,
    pub countries: Vec<String>,
    pub message: String,
}

impl Distribution {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    pub fn toggle_journalist(&mut self, email: &str) {
        toggle(&mut self.journalists, email);
    }

    pub fn toggle_country(&mut self, country: &str) {
        toggle(&mut self.countries, country);
    }

    pub fn has_recipients(&self) -> bool {
        !self.journalists.is_empty() || !self.countries.is_empty()
    }

    /// Clears every selection but keeps the target press release.
    pub fn reset(&mut self) {
        *self = Self::new(std::mem::take(&mut self.id));
    }
}

fn toggle(values: &mut Vec<String>, value: &str) {
    if let Some(position) = values.iter().position(|v| v == value) {
        values.remove(position);
    } else {
        values.push(value.to_string());
    }
}

/// Body of `POST preview-press-release/` and `POST download-press-release/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderRequest {
    pub id: String,
}

/// Response of the preview and download actions: a path under the API base.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RenderedFile {
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_draft_serializes_as_empty_object() {
        let body = serde_json::to_value(NewPressRelease::default()).unwrap();
        assert_eq!(body, serde_json::json!({}));
    }

    #[test]
    fn template_id_uses_camel_case_key() {
        let body = NewPressRelease {
            content: Some("<h1>[Title]</h1>".into()),
            template_id: Some("2".into()),
        };
        let value = serde_json::to_value(body).unwrap();
        assert_eq!(value["templateId"], "2");
        assert_eq!(value["content"], "<h1>[Title]</h1>");
    }

    #[test]
    fn decodes_release_with_nulls_and_timestamps() {
        let json = r#"{
            "id": "pr1",
            "title": null,
            "content": "<p>x</p>",
            "json_content": null,
            "created_at": "2024-05-01T10:00:00Z",
            "shared_with": null,
            "is_published": true
        }"#;
        let release: PressRelease = serde_json::from_str(json).unwrap();
        assert_eq!(release.title, "");
        assert!(release.json_content.is_none());
        assert!(release.shared_with.is_empty());
        assert!(release.created_at.is_some());
        assert_eq!(release.display_title(), "Untitled press release");
    }

    #[test]
    fn template_seeded_release_opens_as_a_tree() {
        let release = PressRelease {
            id: "pr1".into(),
            content: "<h1>[Company Name] Announces</h1><p>Body</p>".into(),
            ..Default::default()
        };
        let document = release.document();
        assert_eq!(document.title(), "[Company Name] Announces");

        let saved = PressRelease {
            json_content: Some(Node::doc(vec![Node::heading(1, vec![Node::text("Saved")])])),
            ..release
        };
        assert_eq!(saved.document().title(), "Saved");
        assert!(PressRelease::default().document().content.is_empty());
    }

    #[test]
    fn partners_are_flattened_with_indices() {
        let request = GenerateRequest {
            prompt: "launch".into(),
            id: "pr1".into(),
            client: "c1".into(),
            country: "Kenya".into(),
            partners: vec![
                Partner { name: "Acme".into() },
                Partner { name: "Globex".into() },
            ],
        };
        let fields = request.form_fields();
        assert!(fields.contains(&("partners[0][name]".to_string(), "Acme".to_string())));
        assert!(fields.contains(&("partners[1][name]".to_string(), "Globex".to_string())));
        assert_eq!(GenerateRequest::partner_image_key(1), "partners[1][image]");
        assert_eq!(request.missing_field(), None);
    }

    #[test]
    fn distribution_toggles_and_resets() {
        let mut distribution = Distribution::new("pr1");
        distribution.toggle_journalist("a@x.co");
        distribution.toggle_country("Kenya");
        distribution.toggle_journalist("a@x.co");
        assert!(distribution.journalists.is_empty());
        assert!(distribution.has_recipients());

        distribution.message = "hello".into();
        distribution.reset();
        assert_eq!(distribution, Distribution::new("pr1"));
    }
}
