#![recursion_limit = "512"]

pub mod app;
pub mod components;
pub mod contact;
pub mod content;
pub mod modal;
pub mod seo;

#[cfg(feature = "ssr")]
pub mod config;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}
