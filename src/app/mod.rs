pub mod layouts;
pub mod pages;

pub use pages::home::App;

/// Start the app in the browser
#[cfg(target_arch = "wasm32")]
pub fn run() {
    // dioxus::launch installs the tracing subscriber for the browser console
    dioxus::launch(App);
}

/// The navbar only exists in a browser page, nothing to render natively
#[cfg(not(target_arch = "wasm32"))]
pub fn run() {
    tracing::info!("Navbar scroll marker runs in the browser only, build it for wasm32 (dx serve)");
}
