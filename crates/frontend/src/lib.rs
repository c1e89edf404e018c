pub mod app;
pub mod dashboards;
pub mod domain;
pub mod layout;
pub mod routes;
pub mod shared;
pub mod state;
pub mod system;
pub mod usecases;

use leptos::prelude::*;
use shared::config::{load_config, AppConfig};
use wasm_bindgen::prelude::wasm_bindgen;

#[wasm_bindgen]
pub fn hydrate() {
    // initializes logging using the `log` crate
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    let config = match load_config() {
        Ok(config) => config,
        Err(e) => {
            log::error!("invalid embedded config, using defaults: {}", e);
            AppConfig::default()
        }
    };

    leptos::mount::mount_to_body(move || view! { <app::App config=config /> });
}

#[wasm_bindgen(start)]
pub fn start() {
    hydrate();
}
