//! web-sys implementations of the watcher seams and the scroll subscription.

use std::rc::Rc;

use gloo_events::EventListener;
use wasm_bindgen::JsValue;
use web_sys::{Document, Element, Event, Window};

use crate::config::WatcherConfig;
use crate::domain::services::{MarkerTarget, ScrollSource, ScrollWatcher};
use crate::shared::constants::SCROLL_EVENT;
use crate::shared::errors::{Result, WatchError};
use crate::shared::logging;

pub type DomScrollWatcher = ScrollWatcher<WindowScrollSource, DomElement>;

fn js_error(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

/// Reads `window.scrollY`
pub struct WindowScrollSource {
    window: Window,
}

impl WindowScrollSource {
    pub fn new(window: Window) -> Self {
        Self { window }
    }
}

impl ScrollSource for WindowScrollSource {
    fn vertical_offset(&self) -> Result<f64> {
        self.window
            .scroll_y()
            .map_err(|e| WatchError::ScrollOffset(js_error(&e)))
    }
}

/// Navbar element, marker carried in its `classList`
pub struct DomElement {
    element: Element,
}

impl DomElement {
    pub fn new(element: Element) -> Self {
        Self { element }
    }

    /// `querySelector` lookup. `Ok(None)` when nothing matches,
    /// `Err` when the selector itself is rejected by the browser.
    pub fn locate(document: &Document, selector: &str) -> Result<Option<Self>> {
        document
            .query_selector(selector)
            .map(|found| found.map(Self::new))
            .map_err(|e| WatchError::InvalidConfig(format!("selector '{}': {}", selector, js_error(&e))))
    }
}

impl MarkerTarget for DomElement {
    fn set_marker(&self, marker: &str, present: bool) -> Result<()> {
        let class_list = self.element.class_list();
        let result = if present {
            class_list.add_1(marker)
        } else {
            class_list.remove_1(marker)
        };
        result.map_err(|e| WatchError::MarkerUpdate(js_error(&e)))
    }
}

/// Live registration of a watcher on the document's scroll event.
/// Dropping it removes the listener.
pub struct ScrollSubscription {
    watcher: Rc<DomScrollWatcher>,
    listener: Option<EventListener>,
}

impl ScrollSubscription {
    pub fn attach(config: WatcherConfig) -> Result<Self> {
        let window = web_sys::window()
            .ok_or_else(|| WatchError::EnvironmentUnavailable("no window".to_string()))?;
        let document = window
            .document()
            .ok_or_else(|| WatchError::EnvironmentUnavailable("no document".to_string()))?;

        let target = DomElement::locate(&document, &config.selector)?;
        logging::log_attach(&config.selector, target.is_some());

        let check_on_attach = config.check_on_attach;
        let watcher = Rc::new(ScrollWatcher::new(
            config,
            WindowScrollSource::new(window),
            target,
        )?);

        let handler_watcher = Rc::clone(&watcher);
        // gloo registers passive listeners by default, which is what scroll wants
        let listener = EventListener::new(&document, SCROLL_EVENT, move |_event: &Event| {
            run_check(&handler_watcher);
        });

        if check_on_attach {
            run_check(&watcher);
        }

        Ok(Self {
            watcher,
            listener: Some(listener),
        })
    }

    /// Explicit teardown, same as dropping the subscription
    pub fn unsubscribe(self) {
        drop(self);
    }
}

impl Drop for ScrollSubscription {
    fn drop(&mut self) {
        if self.listener.take().is_some() {
            logging::log_teardown(&self.watcher.config().selector);
        }
    }
}

// Errors never leave the event handler
fn run_check(watcher: &DomScrollWatcher) {
    if let Err(e) = watcher.check() {
        logging::log_check_error(&watcher.config().selector, &e.to_string());
    }
}
