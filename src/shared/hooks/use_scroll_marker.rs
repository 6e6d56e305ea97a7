use crate::config::WatcherConfig;

/// Keeps the scroll marker on the configured navbar for the lifetime of the calling component.
/// The listener is attached after the first render, once the navbar is in the DOM,
/// and removed when the component unmounts.
#[cfg(target_arch = "wasm32")]
pub fn use_scroll_marker(config: WatcherConfig) {
    use std::cell::RefCell;
    use std::rc::Rc;

    use dioxus::prelude::*;

    use crate::infrastructure::ScrollSubscription;

    let subscription = use_hook(|| Rc::new(RefCell::new(None::<ScrollSubscription>)));

    let slot = subscription.clone();
    use_effect(move || {
        let mut slot = slot.borrow_mut();
        if slot.is_some() {
            return;
        }
        match ScrollSubscription::attach(config.clone()) {
            Ok(attached) => *slot = Some(attached),
            Err(e) => tracing::error!("Failed to attach scroll watcher: {}", e),
        }
    });

    use_drop(move || {
        subscription.borrow_mut().take();
    });
}

#[cfg(not(target_arch = "wasm32"))]
pub fn use_scroll_marker(_config: WatcherConfig) {
    // No scroll events outside the browser
}
