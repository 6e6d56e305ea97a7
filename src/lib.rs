// Public API exports
pub mod config;
pub mod domain;
pub mod shared;

// Dioxus components
pub mod app;

// Browser-only bindings (NOT compiled for native targets)
#[cfg(target_arch = "wasm32")]
pub mod infrastructure;
