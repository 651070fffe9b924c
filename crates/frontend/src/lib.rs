//! KindMap - Yew WASM Frontend
//!
//! Community-assistance app: a map of nearby help requests, an alerts list,
//! a form for posting requests and the user's karma profile.

mod app;
mod components;
mod map;
mod pages;

pub use app::App;

use wasm_bindgen::prelude::*;

/// WASM entry point.
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "starting kindmap");

    yew::Renderer::<App>::new().render();
}
