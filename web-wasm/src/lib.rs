//! Accident Detection Web App (Leptos + WASM)

mod app;
mod components;
mod api;
mod notice;
mod preview;
mod supervisor;

use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn main() {
    supervisor::install();
    leptos::mount::mount_to_body(app::App);
}
