#![allow(warnings)]
//! Feature Admin Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod context;
mod dom;
mod error;
mod listing;
mod modal_state;
mod models;
mod notify;
mod pages;
mod session;
mod slug;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info };
    let _ = console_log::init_with_level(level);
    mount_to_body(App);
}
