//! Grocery List Frontend Entry Point

mod models;
mod error;
mod config;
mod entries;
mod export;
mod notice;
mod view_state;
mod logging;
mod commands;
mod context;
mod store;
mod components;
mod app;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    logging::init(log::LevelFilter::Info);
    mount_to_body(App);
}
