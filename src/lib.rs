//! Searchable user directory rendered client-side with Leptos.
//!
//! Everything outside the view layer (fetch lifecycle, filtering, render model,
//! configuration) builds on any target so it can be tested natively; the
//! components and routes only exist on `wasm32`.

#[path = "lib/mod.rs"]
pub mod app_lib;
pub mod features;

#[cfg(target_arch = "wasm32")]
pub mod app;
#[cfg(target_arch = "wasm32")]
mod components;
#[cfg(target_arch = "wasm32")]
mod routes;
