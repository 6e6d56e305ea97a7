use std::cell::Cell;

use crate::config::WatcherConfig;
use crate::domain::models::MarkerState;
use crate::shared::errors::Result;
use crate::shared::logging;

/// Where the current vertical scroll offset comes from
pub trait ScrollSource {
    fn vertical_offset(&self) -> Result<f64>;
}

/// Element whose class set carries the marker
pub trait MarkerTarget {
    /// Add (`present == true`) or remove the marker. Must be idempotent.
    fn set_marker(&self, marker: &str, present: bool) -> Result<()>;
}

/// Result of one check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckOutcome {
    Applied(MarkerState),
    /// The navbar element is not on the page
    Skipped,
}

/// Keeps the marker on the navbar in sync with the scroll offset.
///
/// The element handle is handed in at construction; `None` means the page has
/// no matching element and every check is a logged no-op.
pub struct ScrollWatcher<S, T> {
    config: WatcherConfig,
    source: S,
    target: Option<T>,
    last_state: Cell<Option<MarkerState>>,
    missing_reported: Cell<bool>,
}

impl<S: ScrollSource, T: MarkerTarget> ScrollWatcher<S, T> {
    pub fn new(config: WatcherConfig, source: S, target: Option<T>) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            source,
            target,
            last_state: Cell::new(None),
            missing_reported: Cell::new(false),
        })
    }

    /// Read the offset and update the marker. Called once per scroll notification.
    pub fn check(&self) -> Result<CheckOutcome> {
        if self.target.is_none() {
            return Ok(self.skip());
        }
        let offset = self.source.vertical_offset()?;
        self.apply(offset)
    }

    /// Update the marker for an already known offset
    pub fn apply(&self, offset: f64) -> Result<CheckOutcome> {
        let Some(target) = self.target.as_ref() else {
            return Ok(self.skip());
        };

        let state = self.config.threshold.state_for(offset);
        target.set_marker(&self.config.marker, state.is_present())?;

        let previous = self.last_state.replace(Some(state));
        if is_crossing(previous, state) {
            logging::log_transition(&self.config.marker, offset, state);
        }
        Ok(CheckOutcome::Applied(state))
    }

    /// Last state written to the target, if any check went through
    pub fn last_state(&self) -> Option<MarkerState> {
        self.last_state.get()
    }

    pub fn has_target(&self) -> bool {
        self.target.is_some()
    }

    pub fn config(&self) -> &WatcherConfig {
        &self.config
    }

    fn skip(&self) -> CheckOutcome {
        let first_miss = !self.missing_reported.replace(true);
        logging::log_target_missing(&self.config.selector, first_miss);
        CheckOutcome::Skipped
    }
}

/// A threshold crossing needs a known previous state; the first check only establishes it.
fn is_crossing(previous: Option<MarkerState>, next: MarkerState) -> bool {
    matches!(previous, Some(previous) if previous != next)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::ScrollThreshold;
    use crate::shared::errors::WatchError;
    use std::cell::RefCell;
    use std::collections::BTreeSet;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct FakeScroll {
        offset: Rc<Cell<f64>>,
        fail: Rc<Cell<bool>>,
    }

    impl FakeScroll {
        fn scroll_to(&self, offset: f64) {
            self.offset.set(offset);
        }
    }

    impl ScrollSource for FakeScroll {
        fn vertical_offset(&self) -> Result<f64> {
            if self.fail.get() {
                return Err(WatchError::ScrollOffset("window detached".to_string()));
            }
            Ok(self.offset.get())
        }
    }

    #[derive(Clone, Default)]
    struct FakeElement {
        classes: Rc<RefCell<BTreeSet<String>>>,
        mutations: Rc<Cell<usize>>,
    }

    impl FakeElement {
        fn with_classes(classes: &[&str]) -> Self {
            let element = FakeElement::default();
            element
                .classes
                .borrow_mut()
                .extend(classes.iter().map(|c| c.to_string()));
            element
        }

        fn has_marker(&self, marker: &str) -> bool {
            self.classes.borrow().contains(marker)
        }
    }

    impl MarkerTarget for FakeElement {
        fn set_marker(&self, marker: &str, present: bool) -> Result<()> {
            self.mutations.set(self.mutations.get() + 1);
            let mut classes = self.classes.borrow_mut();
            if present {
                classes.insert(marker.to_string());
            } else {
                classes.remove(marker);
            }
            Ok(())
        }
    }

    fn make_watcher() -> (ScrollWatcher<FakeScroll, FakeElement>, FakeScroll, FakeElement) {
        let scroll = FakeScroll::default();
        let element = FakeElement::default();
        let watcher =
            ScrollWatcher::new(WatcherConfig::default(), scroll.clone(), Some(element.clone()))
                .unwrap();
        (watcher, scroll, element)
    }

    #[test]
    fn test_top_of_page_has_no_marker() {
        let (watcher, scroll, element) = make_watcher();

        scroll.scroll_to(0.0);
        let outcome = watcher.check().unwrap();

        assert_eq!(outcome, CheckOutcome::Applied(MarkerState::Absent));
        assert!(!element.has_marker("scrolled"));
    }

    #[test]
    fn test_past_threshold_adds_marker() {
        let (watcher, scroll, element) = make_watcher();

        scroll.scroll_to(51.0);
        let outcome = watcher.check().unwrap();

        assert_eq!(outcome, CheckOutcome::Applied(MarkerState::Present));
        assert!(element.has_marker("scrolled"));
    }

    #[test]
    fn test_exact_threshold_removes_marker() {
        let (watcher, scroll, element) = make_watcher();

        scroll.scroll_to(200.0);
        watcher.check().unwrap();
        assert!(element.has_marker("scrolled"));

        scroll.scroll_to(50.0);
        watcher.check().unwrap();
        assert!(!element.has_marker("scrolled"));
    }

    #[test]
    fn test_last_offset_wins() {
        let (watcher, scroll, element) = make_watcher();

        for offset in [0.0, 100.0, 30.0] {
            scroll.scroll_to(offset);
            watcher.check().unwrap();
        }

        assert!(!element.has_marker("scrolled"));
        assert_eq!(watcher.last_state(), Some(MarkerState::Absent));
    }

    #[test]
    fn test_repeated_check_is_idempotent() {
        let (watcher, scroll, element) = make_watcher();

        scroll.scroll_to(75.0);
        watcher.check().unwrap();
        let after_first = element.classes.borrow().clone();
        watcher.check().unwrap();

        assert_eq!(*element.classes.borrow(), after_first);
        // One add/remove call per notification, even when nothing changes
        assert_eq!(element.mutations.get(), 2);
    }

    #[test]
    fn test_other_classes_are_preserved() {
        let scroll = FakeScroll::default();
        let element = FakeElement::with_classes(&["fixed-navbar", "navbar-dark"]);
        let watcher =
            ScrollWatcher::new(WatcherConfig::default(), scroll.clone(), Some(element.clone()))
                .unwrap();

        scroll.scroll_to(300.0);
        watcher.check().unwrap();
        scroll.scroll_to(0.0);
        watcher.check().unwrap();

        let classes = element.classes.borrow();
        assert!(classes.contains("fixed-navbar"));
        assert!(classes.contains("navbar-dark"));
        assert!(!classes.contains("scrolled"));
    }

    #[test]
    fn test_missing_target_is_skipped() {
        let scroll = FakeScroll::default();
        let watcher: ScrollWatcher<FakeScroll, FakeElement> =
            ScrollWatcher::new(WatcherConfig::default(), scroll.clone(), None).unwrap();

        scroll.scroll_to(500.0);
        assert_eq!(watcher.check().unwrap(), CheckOutcome::Skipped);
        assert_eq!(watcher.check().unwrap(), CheckOutcome::Skipped);
        assert_eq!(watcher.apply(10.0).unwrap(), CheckOutcome::Skipped);
        assert!(!watcher.has_target());
        assert_eq!(watcher.last_state(), None);
    }

    #[test]
    fn test_missing_target_does_not_read_offset() {
        let scroll = FakeScroll::default();
        scroll.fail.set(true);
        let watcher: ScrollWatcher<FakeScroll, FakeElement> =
            ScrollWatcher::new(WatcherConfig::default(), scroll, None).unwrap();

        assert_eq!(watcher.check().unwrap(), CheckOutcome::Skipped);
    }

    #[test]
    fn test_offset_failure_leaves_target_untouched() {
        let (watcher, scroll, element) = make_watcher();
        scroll.fail.set(true);

        let result = watcher.check();

        assert!(matches!(result, Err(WatchError::ScrollOffset(_))));
        assert_eq!(element.mutations.get(), 0);
    }

    #[test]
    fn test_custom_marker_and_threshold() {
        let scroll = FakeScroll::default();
        let element = FakeElement::default();
        let config = WatcherConfig {
            marker: "is-stuck".to_string(),
            threshold: ScrollThreshold(120.0),
            ..Default::default()
        };
        let watcher = ScrollWatcher::new(config, scroll.clone(), Some(element.clone())).unwrap();

        scroll.scroll_to(100.0);
        watcher.check().unwrap();
        assert!(!element.has_marker("is-stuck"));

        scroll.scroll_to(121.0);
        watcher.check().unwrap();
        assert!(element.has_marker("is-stuck"));
        assert!(!element.has_marker("scrolled"));
    }

    #[test]
    fn test_is_crossing() {
        // First check at the top of the page is not a change
        assert!(!is_crossing(None, MarkerState::Absent));
        assert!(!is_crossing(None, MarkerState::Present));
        assert!(!is_crossing(Some(MarkerState::Absent), MarkerState::Absent));
        assert!(is_crossing(Some(MarkerState::Absent), MarkerState::Present));
        assert!(is_crossing(Some(MarkerState::Present), MarkerState::Absent));
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let config = WatcherConfig {
            marker: "two words".to_string(),
            ..Default::default()
        };
        let result = ScrollWatcher::new(config, FakeScroll::default(), Some(FakeElement::default()));

        assert!(matches!(result, Err(WatchError::InvalidConfig(_))));
    }
}
