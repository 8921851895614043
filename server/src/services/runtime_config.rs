//! # Runtime Configuration Endpoint
//!
//! The dashboard is compiled once and pointed at an API at start-up: before
//! mounting, it fetches `/config.json` from the host that served it. The
//! values come from the [`ServerConfig`] the host was started with.

use actix_web::web::{get, resource, Data};
use actix_web::{HttpResponse, Resource, Responder};
use serde::Serialize;

use crate::config::ServerConfig;

const PATH: &str = "/config.json";

/// Body of `GET /config.json`.
#[derive(Debug, Serialize)]
pub struct RuntimeConfig<'a> {
    pub api_url: &'a str,
    pub log_level: &'a str,
}

pub async fn process(config: Data<ServerConfig>) -> impl Responder {
    HttpResponse::Ok()
        .insert_header(("Cache-Control", "no-store"))
        .json(RuntimeConfig {
            api_url: &config.api_url,
            log_level: &config.log_level,
        })
}

pub fn configure_routes() -> Resource {
    resource(PATH).route(get().to(process))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::{test, App};
    use serde_json::Value;

    #[actix_web::test]
    async fn serves_the_api_url_and_log_level() {
        let config = ServerConfig {
            api_url: "https://api.wezawire.com/api/".into(),
            log_level: "debug".into(),
            ..ServerConfig::default()
        };
        let app = test::init_service(App::new().app_data(Data::new(config)).service(configure_routes())).await;

        let req = test::TestRequest::get().uri("/config.json").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(resp.headers().get("Cache-Control").unwrap(), "no-store");

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["api_url"], "https://api.wezawire.com/api/");
        assert_eq!(body["log_level"], "debug");
    }
}
