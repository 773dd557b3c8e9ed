//! UnitView
//!
//! Client-side rendered (CSR) Dioxus application compiled to WebAssembly.
//! The landing page links to the dashboard and about views; all routing
//! happens in the browser.

mod app;
mod components;
mod monitoring;
mod pages;

fn main() {
    monitoring::init();
    crate::log_event!("UnitView frontend starting");

    dioxus::launch(app::App);
}
