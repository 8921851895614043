//! Thin wrapper over `gloo_net` shared by every API call.
//!
//! The client joins resource paths onto the configured base URL, always sends
//! the session cookies and funnels every response through [`HttpClient::check`],
//! the single place where a 401 turns into a redirect to the login page.

use std::rc::Rc;

use gloo_net::http::{Request, RequestBuilder, Response};
use web_sys::RequestCredentials;
use serde::de::DeserializeOwned;
use serde::Serialize;
use web_sys::{AbortSignal, FormData};
use yew::Callback;

use super::error::{classify, ApiError};

#[derive(Clone)]
pub struct HttpClient {
    base_url: Rc<str>,
    on_unauthorized: Callback<()>,
}

impl PartialEq for HttpClient {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.base_url, &other.base_url) && self.on_unauthorized == other.on_unauthorized
    }
}

impl HttpClient {
    pub fn new(base_url: &str, on_unauthorized: Callback<()>) -> Self {
        Self {
            base_url: Rc::from(base_url),
            on_unauthorized,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL of `path` under the API base.
    pub fn url(&self, path: &str) -> String {
        join_url(&self.base_url, path)
    }

    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
        signal: Option<&AbortSignal>,
    ) -> Result<T, ApiError> {
        let request = self
            .builder(Request::get(&self.url(path)))
            .query(query.iter().map(|(key, value)| (*key, value.as_str())))
            .abort_signal(signal)
            .build()?;
        decode(self.execute(request).await?).await
    }

    pub async fn post_json<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T, ApiError> {
        let request = encode(self.builder(Request::post(&self.url(path))), body)?;
        decode(self.execute(request).await?).await
    }

    pub async fn patch_json<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T, ApiError> {
        let request = encode(self.builder(Request::patch(&self.url(path))), body)?;
        decode(self.execute(request).await?).await
    }

    /// POST whose response body is irrelevant to the caller.
    pub async fn post_action<B: Serialize>(&self, path: &str, body: &B) -> Result<(), ApiError> {
        let request = encode(self.builder(Request::post(&self.url(path))), body)?;
        self.execute(request).await.map(drop)
    }

    /// Multipart POST. The browser sets the boundary header itself.
    pub async fn post_form<T: DeserializeOwned>(&self, path: &str, form: FormData) -> Result<T, ApiError> {
        let request = self.builder(Request::post(&self.url(path))).body(form)?;
        decode(self.execute(request).await?).await
    }

    pub async fn patch_form<T: DeserializeOwned>(&self, path: &str, form: FormData) -> Result<T, ApiError> {
        let request = self.builder(Request::patch(&self.url(path))).body(form)?;
        decode(self.execute(request).await?).await
    }

    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let request = self.builder(Request::delete(&self.url(path))).build()?;
        self.execute(request).await.map(drop)
    }

    fn builder(&self, builder: RequestBuilder) -> RequestBuilder {
        builder.credentials(RequestCredentials::Include)
    }

    async fn execute(&self, request: Request) -> Result<Response, ApiError> {
        let method = request.method();
        let url = request.url();
        let response = request.send().await.map_err(|error| {
            let error = ApiError::from(error);
            if error == ApiError::Aborted {
                log::debug!("{method} {url} aborted");
            } else {
                log::warn!("{method} {url} failed: {error}");
            }
            error
        })?;
        self.check(response).await
    }

    /// The response interceptor.
    async fn check(&self, response: Response) -> Result<Response, ApiError> {
        let status = response.status();
        if (200..300).contains(&status) {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        let error = classify(status, &body);
        log::warn!("{} answered {status}: {error}", response.url());
        if error == ApiError::Unauthorized {
            self.on_unauthorized.emit(());
        }
        Err(error)
    }
}

fn encode<B: Serialize>(builder: RequestBuilder, body: &B) -> Result<Request, ApiError> {
    builder
        .json(body)
        .map_err(|error| ApiError::Encode(error.to_string()))
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    response
        .json::<T>()
        .await
        .map_err(|error| ApiError::Decode(error.to_string()))
}

/// Joins `path` onto `base` with exactly one `/` between them. Absolute URLs
/// are returned untouched.
pub fn join_url(base: &str, path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") {
        return path.to_string();
    }
    let base = base.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    if path.is_empty() {
        format!("{base}/")
    } else {
        format!("{base}/{path}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_with_a_single_slash() {
        assert_eq!(
            join_url("http://localhost:8000/api/", "/clients/"),
            "http://localhost:8000/api/clients/"
        );
        assert_eq!(join_url("/api", "clients/42/"), "/api/clients/42/");
        assert_eq!(join_url("/api//", "//journalists/"), "/api/journalists/");
    }

    #[test]
    fn keeps_absolute_paths() {
        assert_eq!(
            join_url("/api/", "https://cdn.example.com/release.pdf"),
            "https://cdn.example.com/release.pdf"
        );
    }

    #[test]
    fn empty_path_points_at_the_base() {
        assert_eq!(join_url("/api", ""), "/api/");
    }
}
