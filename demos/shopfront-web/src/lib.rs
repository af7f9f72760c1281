//! Shopfront storefront page.
//!
//! A single page with:
//! - Product grid fed by the `get_products` server function
//! - Details overlay for one product
//! - Cart panel with quantity controls and a running total
//!
//! All page state lives in one [`Storefront`](shopfront_commerce::Storefront)
//! held in a signal; components only call its transitions.

mod app;

#[cfg(feature = "ssr")]
mod server;

pub use app::{get_products, App, GetProducts};

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use app::App;
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}
