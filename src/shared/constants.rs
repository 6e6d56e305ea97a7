/// Selector of the navigation bar the marker is applied to
pub const DEFAULT_NAVBAR_SELECTOR: &str = ".fixed-navbar";

/// Class added to the navbar once the page is scrolled
pub const DEFAULT_MARKER_CLASS: &str = "scrolled";

/// Offset in CSS pixels the page must exceed (strictly) before the marker is shown
pub const DEFAULT_SCROLL_THRESHOLD: f64 = 50.0;

/// DOM event the watcher listens to
pub const SCROLL_EVENT: &str = "scroll";
