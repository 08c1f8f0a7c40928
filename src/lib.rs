//! Shelf webapp - click counter for the Shelf asset pages.
//!
//! Browser-side behavior compiled to WebAssembly: count clicks on the
//! counter element, animate it with a short scale pop, and report page
//! diagnostics to the console.

mod app;
mod config;
mod constants;
mod counter;
mod message;

pub use app::ShelfApp;
pub use config::{AppConfig, ConfigError};
pub use counter::ClickCounter;
pub use message::{DisplayUpdate, Message};

// Browser glue
#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod schedule;

// WASM entry point
#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(target_arch = "wasm32")]
pub use wasm::*;

#[cfg(all(test, target_arch = "wasm32"))]
wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);
