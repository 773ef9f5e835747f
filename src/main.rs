//! Teams HQ Frontend Entry Point

mod app;
mod commands;
mod components;
mod context;
mod markdown;
mod store;

use app::App;
use leptos::prelude::*;

use showcase_core::AppConfig;

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::from_build_env();
    if let Err(e) = console_logger::init_logger("TeamsHQ", config.log_level) {
        web_sys::console::error_1(&format!("logger init failed: {}", e).into());
    }

    mount_to_body(move || view! { <App config=config.clone() /> });
}
