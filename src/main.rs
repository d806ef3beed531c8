//! Projects Dashboard Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod context;
mod error;
mod models;
mod store;

use app::App;
use config::{Config, DEFAULT_BACKEND_URL};
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    // Only fails if a logger is already installed
    let _ = console_logger::init();

    let config = Config::from_env().unwrap_or_else(|e| {
        log::error!("{}; falling back to {}", e, DEFAULT_BACKEND_URL);
        Config::default()
    });
    log::info!("Using backend at {}", config.backend_url);

    mount_to_body(move || view! { <App config=config /> });
}
