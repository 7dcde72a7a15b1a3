//! Overlay Shell Entry Point

mod amount;
mod app;
mod banking;
mod cart;
mod checkout;
mod commands;
mod components;
mod context;
mod dropdown;
mod menu;
mod models;
mod notify;
mod panels;
mod protocol;
mod settings;
mod storage;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
