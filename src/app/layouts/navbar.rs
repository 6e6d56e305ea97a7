use dioxus::prelude::*;

use crate::config::WatcherConfig;
use crate::shared::constants::DEFAULT_NAVBAR_SELECTOR;
use crate::shared::hooks::use_scroll_marker;

/// Navigation bar pinned to the top of the viewport.
/// Gets the `scrolled` class once the page leaves the top; the stylesheet decides what that looks like.
#[component]
pub fn FixedNavbar(children: Element) -> Element {
    use_scroll_marker(WatcherConfig::default());

    // The watcher finds the element through its selector, keep the class in sync
    let class = DEFAULT_NAVBAR_SELECTOR.trim_start_matches('.');

    rsx! {
        nav {
            class: "{class}",
            style: "
                position: fixed;
                top: 0;
                left: 0;
                width: 100%;
                min-height: 60px;
                display: flex;
                align-items: center;
                justify-content: space-between;
                padding: 0 24px;
                box-sizing: border-box;
                z-index: 100;
            ",
            {children}
        }
    }
}
