//! Embedded dashboard build.
//!
//! `build.rs` copies `frontend/dist` into `static/dist`, which is compiled
//! into the binary. Any path that is not a file gets `index.html`, so deep
//! links such as `/editor/42` load the app and its router takes over.

use actix_web::{HttpRequest, HttpResponse};
use include_dir::{include_dir, Dir};
use mime_guess::from_path;

static STATIC_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/static/dist");

const INDEX: &str = "index.html";

pub async fn serve_embedded(req: HttpRequest) -> HttpResponse {
    embedded_response(&STATIC_DIR, req.path())
}

/// Response for `path` out of `dir`.
pub fn embedded_response(dir: &Dir<'_>, path: &str) -> HttpResponse {
    let path = path.trim_start_matches('/');
    let file_path = if path.is_empty() { INDEX } else { path };

    match dir.get_file(file_path) {
        Some(file) => {
            let mime = from_path(file_path).first_or_octet_stream();
            HttpResponse::Ok()
                .content_type(mime.as_ref())
                .body(file.contents().to_vec())
        }
        None => match dir.get_file(INDEX) {
            Some(index) => {
                log::debug!("no asset at /{file_path}, serving the app shell");
                HttpResponse::Ok()
                    .content_type("text/html; charset=utf-8")
                    .body(index.contents().to_vec())
            }
            None => {
                log::warn!("dashboard build missing, run `trunk build` in frontend/");
                HttpResponse::NotFound().body("Not Found")
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;
    use actix_web::http::{header, StatusCode};

    static FIXTURE: Dir = include_dir!("$CARGO_MANIFEST_DIR/tests/fixtures/dist");
    static EMPTY: Dir = Dir::new("", &[]);

    async fn body_text(resp: HttpResponse) -> String {
        let bytes = to_bytes(resp.into_body()).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[actix_web::test]
    async fn serves_files_with_their_mime_type() {
        let resp = embedded_response(&FIXTURE, "/assets/app.js");
        assert_eq!(resp.status(), StatusCode::OK);
        let content_type = resp.headers().get(header::CONTENT_TYPE).unwrap().to_str().unwrap();
        assert!(content_type.contains("javascript"));
        assert!(body_text(resp).await.contains("wezawire"));
    }

    #[actix_web::test]
    async fn client_routes_fall_back_to_the_app_shell() {
        for path in ["/", "/editor/42", "/admin-dashboard"] {
            let resp = embedded_response(&FIXTURE, path);
            assert_eq!(resp.status(), StatusCode::OK, "{path}");
            assert!(body_text(resp).await.contains("<title>Wezawire</title>"));
        }
    }

    #[actix_web::test]
    async fn missing_build_is_a_not_found() {
        let resp = embedded_response(&EMPTY, "/editor/42");
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
