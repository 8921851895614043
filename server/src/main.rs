mod config;
mod services;

use std::thread;
use std::time::Duration;

use actix_web::{web, App, HttpServer};
use env_logger::Env;
use log::{error, info};

use crate::config::ServerConfig;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let _ = dotenvy::dotenv();
    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            env_logger::init_from_env(Env::default().default_filter_or("info"));
            error!("invalid configuration: {err}");
            return Err(std::io::Error::new(std::io::ErrorKind::InvalidInput, err));
        }
    };
    env_logger::init_from_env(Env::default().default_filter_or(config.log_level.as_str()));

    let url = config.url();
    if config.open_browser {
        let url = url.clone();
        thread::spawn(move || {
            thread::sleep(Duration::from_millis(500));
            if let Err(err) = webbrowser::open(&url) {
                log::warn!("cannot open a browser at {url}: {err}");
            }
        });
    }

    info!("Dashboard running at {url}, API at {}", config.api_url);

    let bind = (config.host.clone(), config.port);
    let config = web::Data::new(config);
    HttpServer::new(move || {
        App::new()
            .app_data(config.clone())
            .service(services::runtime_config::configure_routes())
            .default_service(web::route().to(services::assets::serve_embedded))
    })
    .bind(bind)?
    .run()
    .await
}
