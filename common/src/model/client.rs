use serde::{Deserialize, Serialize};

use super::null_as_default;
use crate::listing::Identified;

/// A company on whose behalf press releases are written.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Client {
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
    pub website: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub about: String,
    /// URL of the uploaded logo, if any.
    #[serde(default)]
    pub logo: Option<String>,
}

impl Identified for Client {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Body of the create and update calls.
///
/// The edit form always submits every field, so the same payload is used for
/// `POST clients/` and `PATCH clients/{id}/`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ClientPayload {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub country: String,
    pub website: String,
    pub description: String,
    pub about: String,
}

impl ClientPayload {
    /// Text parts of the multipart body used when a logo file is attached.
    pub fn form_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("name", self.name.clone()),
            ("email", self.email.clone()),
            ("phone", self.phone.clone()),
            ("country", self.country.clone()),
            ("website", self.website.clone()),
            ("description", self.description.clone()),
            ("about", self.about.clone()),
        ]
    }

    /// Returns the name of the first missing required field.
    pub fn missing_field(&self) -> Option<&'static str> {
        if self.name.trim().is_empty() {
            Some("name")
        } else if self.email.trim().is_empty() {
            Some("email")
        } else {
            None
        }
    }
}

impl From<&Client> for ClientPayload {
    fn from(client: &Client) -> Self {
        Self {
            name: client.name.clone(),
            email: client.email.clone(),
            phone: client.phone.clone(),
            country: client.country.clone(),
            website: client.website.clone(),
            description: client.description.clone(),
            about: client.about.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_columns_decode_as_empty_strings() {
        let json = r#"{"id": "c1", "name": "Acme", "email": "hi@acme.co", "phone": null, "logo": null}"#;
        let client: Client = serde_json::from_str(json).unwrap();
        assert_eq!(client.phone, "");
        assert_eq!(client.website, "");
        assert_eq!(client.logo, None);
    }

    #[test]
    fn edit_payload_starts_from_the_row() {
        let client = Client {
            id: "c1".into(),
            name: "Acme".into(),
            email: "hi@acme.co".into(),
            country: "Kenya".into(),
            ..Default::default()
        };
        let payload = ClientPayload::from(&client);
        assert_eq!(payload.name, "Acme");
        assert_eq!(payload.country, "Kenya");
        assert_eq!(payload.missing_field(), None);
    }

    #[test]
    fn name_and_email_are_required() {
        let mut payload = ClientPayload::default();
        assert_eq!(payload.missing_field(), Some("name"));
        payload.name = "Acme".into();
        assert_eq!(payload.missing_field(), Some("email"));
    }

    #[test]
    fn multipart_fields_cover_every_text_column() {
        let fields = ClientPayload::default().form_fields();
        let names: Vec<_> = fields.iter().map(|(name, _)| *name).collect();
        assert_eq!(
            names,
            ["name", "email", "phone", "country", "website", "description", "about"]
        );
    }
}
