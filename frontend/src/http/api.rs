//! One function per server operation.
//!
//! Paths are relative to the API base URL. Whether a call is JSON or multipart
//! is fixed by the function name, never decided at runtime.

use common::model::auth::{AuthResponse, LoginRequest, RegisterRequest, User};
use common::model::client::{Client, ClientPayload};
use common::model::dashboard::{AdminDashboard, JournalistDashboard, PressReleaseStats};
use common::model::journalist::{Journalist, JournalistPayload, UploadSummary};
use common::model::page::{ListQuery, Page};
use common::model::press_release::{
    ContentUpdate, Distribution, GenerateRequest, NewPressRelease, PressRelease, RenderRequest, RenderedFile,
};
use common::model::published_link::{NewPublishedLink, PublishedLink, RejectLink};
use common::model::withdrawal::{NewWithdrawal, ProcessWithdrawal, WithdrawalRequest};
use serde::de::DeserializeOwned;
use serde_json::Value;
use web_sys::{AbortSignal, File, FormData};

use super::client::HttpClient;
use super::error::ApiError;

async fn list<T: DeserializeOwned>(
    client: &HttpClient,
    path: &str,
    query: &ListQuery,
    signal: Option<&AbortSignal>,
) -> Result<Page<T>, ApiError> {
    client.get(path, &query.params(), signal).await
}

fn form(fields: impl IntoIterator<Item = (String, String)>) -> Result<FormData, ApiError> {
    let data = FormData::new().map_err(|_| ApiError::Encode("FormData is unavailable".into()))?;
    for (name, value) in fields {
        data.append_with_str(&name, &value)
            .map_err(|_| ApiError::Encode(format!("cannot append {name}")))?;
    }
    Ok(data)
}

fn attach(data: &FormData, name: &str, file: &File) -> Result<(), ApiError> {
    data.append_with_blob_and_filename(name, file, &file.name())
        .map_err(|_| ApiError::Encode(format!("cannot attach {name}")))
}

// Auth

pub async fn register(client: &HttpClient, request: &RegisterRequest) -> Result<AuthResponse, ApiError> {
    client.post_json("accounts/auth/register/", request).await
}

pub async fn login(client: &HttpClient, request: &LoginRequest) -> Result<AuthResponse, ApiError> {
    client.post_json("accounts/auth/login/", request).await
}

pub async fn me(client: &HttpClient) -> Result<User, ApiError> {
    client.get("accounts/auth/me/", &[], None).await
}

// Journalists

pub async fn list_journalists(
    client: &HttpClient,
    query: &ListQuery,
    signal: Option<&AbortSignal>,
) -> Result<Page<Journalist>, ApiError> {
    list(client, "journalists/", query, signal).await
}

pub async fn create_journalist(client: &HttpClient, payload: &JournalistPayload) -> Result<Journalist, ApiError> {
    client.post_json("journalists/", payload).await
}

pub async fn update_journalist(
    client: &HttpClient,
    id: &str,
    payload: &JournalistPayload,
) -> Result<Journalist, ApiError> {
    client.patch_json(&format!("journalists/{id}/"), payload).await
}

pub async fn delete_journalist(client: &HttpClient, id: &str) -> Result<(), ApiError> {
    client.delete(&format!("journalists/{id}/")).await
}

/// Bulk import from a spreadsheet. The server parses the file.
pub async fn upload_journalists(client: &HttpClient, file: &File) -> Result<UploadSummary, ApiError> {
    let data = form([])?;
    attach(&data, "file", file)?;
    client.post_form("upload/", data).await
}

// Clients

pub async fn list_clients(
    client: &HttpClient,
    query: &ListQuery,
    signal: Option<&AbortSignal>,
) -> Result<Page<Client>, ApiError> {
    list(client, "clients/", query, signal).await
}

pub async fn create_client_with_content(client: &HttpClient, payload: &ClientPayload) -> Result<Client, ApiError> {
    client.post_json("clients/", payload).await
}

pub async fn create_client_with_attachment(
    client: &HttpClient,
    payload: &ClientPayload,
    logo: &File,
) -> Result<Client, ApiError> {
    let data = client_form(payload, logo)?;
    client.post_form("clients/", data).await
}

pub async fn update_client_with_content(
    client: &HttpClient,
    id: &str,
    payload: &ClientPayload,
) -> Result<Client, ApiError> {
    client.patch_json(&format!("clients/{id}/"), payload).await
}

pub async fn update_client_with_attachment(
    client: &HttpClient,
    id: &str,
    payload: &ClientPayload,
    logo: &File,
) -> Result<Client, ApiError> {
    let data = client_form(payload, logo)?;
    client.patch_form(&format!("clients/{id}/"), data).await
}

fn client_form(payload: &ClientPayload, logo: &File) -> Result<FormData, ApiError> {
    let data = form(
        payload
            .form_fields()
            .into_iter()
            .map(|(name, value)| (name.to_string(), value)),
    )?;
    attach(&data, "logo", logo)?;
    Ok(data)
}

pub async fn delete_client(client: &HttpClient, id: &str) -> Result<(), ApiError> {
    client.delete(&format!("clients/{id}/")).await
}

// Press releases

pub async fn create_press_release(client: &HttpClient, draft: &NewPressRelease) -> Result<PressRelease, ApiError> {
    client.post_json("press-releases/", draft).await
}

pub async fn list_press_releases(
    client: &HttpClient,
    query: &ListQuery,
    signal: Option<&AbortSignal>,
) -> Result<Page<PressRelease>, ApiError> {
    list(client, "press-releases/", query, signal).await
}

pub async fn get_press_release(client: &HttpClient, id: &str) -> Result<PressRelease, ApiError> {
    client.get(&format!("press-releases/{id}/"), &[], None).await
}

pub async fn update_press_release(
    client: &HttpClient,
    id: &str,
    update: &ContentUpdate,
) -> Result<PressRelease, ApiError> {
    client.patch_json(&format!("press-releases/{id}/"), update).await
}

pub async fn delete_press_release(client: &HttpClient, id: &str) -> Result<(), ApiError> {
    client.delete(&format!("press-releases/{id}/")).await
}

/// AI generation without attachments.
pub async fn generate_press_release(client: &HttpClient, request: &GenerateRequest) -> Result<PressRelease, ApiError> {
    client.post_json("generate-press-release/", request).await
}

/// AI generation with a supporting document and/or partner logos. `logos`
/// is indexed like `request.partners`.
pub async fn generate_press_release_with_attachments(
    client: &HttpClient,
    request: &GenerateRequest,
    file: Option<&File>,
    logos: &[Option<File>],
) -> Result<PressRelease, ApiError> {
    let data = form(request.form_fields())?;
    if let Some(file) = file {
        attach(&data, "file", file)?;
    }
    for (index, logo) in logos.iter().enumerate() {
        if let Some(logo) = logo {
            attach(&data, &GenerateRequest::partner_image_key(index), logo)?;
        }
    }
    client.post_form("generate-press-release/", data).await
}

pub async fn preview_press_release(client: &HttpClient, id: &str) -> Result<RenderedFile, ApiError> {
    client
        .post_json("preview-press-release/", &RenderRequest { id: id.to_string() })
        .await
}

pub async fn download_press_release(client: &HttpClient, id: &str) -> Result<RenderedFile, ApiError> {
    client
        .post_json("download-press-release/", &RenderRequest { id: id.to_string() })
        .await
}

pub async fn distribute_press_release(client: &HttpClient, distribution: &Distribution) -> Result<(), ApiError> {
    client.post_action("distribute-press-release/", distribution).await
}

// Published links

pub async fn list_published_links(
    client: &HttpClient,
    query: &ListQuery,
    signal: Option<&AbortSignal>,
) -> Result<Page<PublishedLink>, ApiError> {
    list(client, "published-links/", query, signal).await
}

pub async fn create_published_link(client: &HttpClient, link: &NewPublishedLink) -> Result<PublishedLink, ApiError> {
    client.post_json("published-links/", link).await
}

pub async fn update_published_link(
    client: &HttpClient,
    id: &str,
    link: &NewPublishedLink,
) -> Result<PublishedLink, ApiError> {
    client.patch_json(&format!("published-links/{id}/"), link).await
}

pub async fn delete_published_link(client: &HttpClient, id: &str) -> Result<(), ApiError> {
    client.delete(&format!("published-links/{id}/")).await
}

pub async fn approve_link(client: &HttpClient, id: &str) -> Result<(), ApiError> {
    client
        .post_action(&format!("published-links/{id}/approve/"), &Value::Object(Default::default()))
        .await
}

pub async fn reject_link(client: &HttpClient, id: &str, body: &RejectLink) -> Result<(), ApiError> {
    client
        .post_action(&format!("published-links/{id}/reject/"), body)
        .await
}

// Withdrawals

pub async fn list_withdrawals(
    client: &HttpClient,
    query: &ListQuery,
    signal: Option<&AbortSignal>,
) -> Result<Page<WithdrawalRequest>, ApiError> {
    list(client, "withdrawal-requests/", query, signal).await
}

pub async fn create_withdrawal(client: &HttpClient, request: &NewWithdrawal) -> Result<WithdrawalRequest, ApiError> {
    client.post_json("withdrawal-requests/", request).await
}

pub async fn process_withdrawal(client: &HttpClient, id: &str, body: &ProcessWithdrawal) -> Result<(), ApiError> {
    client
        .post_action(&format!("withdrawal-requests/{id}/process/"), body)
        .await
}

// Dashboards

pub async fn journalist_dashboard(client: &HttpClient) -> Result<JournalistDashboard, ApiError> {
    client.get("journalist/dashboard/", &[], None).await
}

pub async fn admin_dashboard(client: &HttpClient) -> Result<AdminDashboard, ApiError> {
    client.get("admins/dashboard/", &[], None).await
}

pub async fn press_release_stats(client: &HttpClient, id: &str) -> Result<PressReleaseStats, ApiError> {
    client.get(&format!("press-release/{id}/stats/"), &[], None).await
}
