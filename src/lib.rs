#![allow(unused_crate_dependencies)]
#![recursion_limit = "256"]

pub mod app;
pub mod format;
pub mod structs;

use cfg_if::cfg_if;

pub use app::{App, shell};

cfg_if! {
    if #[cfg(feature = "ssr")] {
        pub mod provider;
    }
}

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}
