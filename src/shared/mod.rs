pub mod errors;
pub mod constants;
pub mod logging;

// Dioxus hooks (no-op outside the browser)
pub mod hooks;
