//! Greig's Ledgers ポートフォリオ (Leptos + WASM)

mod app;
mod components;
mod head;
mod logging;
mod observer;
mod scheduler;

use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    logging::init(if cfg!(debug_assertions) {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    });
    leptos::mount::mount_to_body(app::App);
}
