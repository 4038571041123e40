//! Stash Admin Panel Frontend Entry Point

mod models;
mod i18n;
mod config;
mod preferences;
mod forms;
mod view_model;
mod commands;
mod store;
mod context;
mod components;
mod app;

use app::App;
use config::PanelConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::new(PanelConfig::default().log_level));
    mount_to_body(App);
}
