use crate::app::App;

mod app;
mod auth_store;
mod components;
mod config;
mod http;
mod logging;
mod pages;
mod resources;
mod routes;

fn main() {
    logging::init("info");
    yew::Renderer::<App>::new().render();
}
