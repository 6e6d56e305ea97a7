//! Navbar scroll marker - entry point
//!
//! Launches the Dioxus app in the browser; the navbar picks up its scroll watcher on mount.

#[cfg(target_arch = "wasm32")]
fn main() {
    navbar_scroll_marker::app::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    tracing::info!("Starting navbar scroll marker...");
    navbar_scroll_marker::app::run();
}
