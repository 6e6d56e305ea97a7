//! Structured logging for the navbar scroll marker
//!
//! Keeps field names consistent between the watcher and the browser binding.
//! Uses tracing with structured fields; the subscriber is installed by the launcher.

use crate::domain::models::MarkerState;

/// Operations that emit logs
#[derive(Debug, Clone, Copy)]
pub enum LogOperation {
    Attach,
    Check,
    Transition,
    Teardown,
}

impl LogOperation {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogOperation::Attach => "attach",
            LogOperation::Check => "check",
            LogOperation::Transition => "transition",
            LogOperation::Teardown => "teardown",
        }
    }
}

/// Log a successful listener registration
pub fn log_attach(selector: &str, target_found: bool) {
    if target_found {
        tracing::info!(
            operation = LogOperation::Attach.as_str(),
            selector = selector,
            "Scroll watcher attached"
        );
    } else {
        tracing::warn!(
            operation = LogOperation::Attach.as_str(),
            selector = selector,
            "Scroll watcher attached without a target element - checks will be skipped"
        );
    }
}

/// Log a missing target on a check.
/// The first miss is a warning, later ones only show up at trace level.
pub fn log_target_missing(selector: &str, first_miss: bool) {
    if first_miss {
        tracing::warn!(
            operation = LogOperation::Check.as_str(),
            selector = selector,
            "Navbar element not found, skipping marker update"
        );
    } else {
        tracing::trace!(
            operation = LogOperation::Check.as_str(),
            selector = selector,
            "Navbar element still missing"
        );
    }
}

/// Log a marker state change (threshold crossing)
pub fn log_transition(marker: &str, offset: f64, state: MarkerState) {
    tracing::debug!(
        operation = LogOperation::Transition.as_str(),
        marker = marker,
        offset = offset,
        state = state.as_str(),
        "Scroll marker changed"
    );
}

/// Log a failed check. The handler keeps running after this.
pub fn log_check_error(selector: &str, error: &str) {
    tracing::warn!(
        operation = LogOperation::Check.as_str(),
        selector = selector,
        error = error,
        "Scroll check failed"
    );
}

/// Log listener removal
pub fn log_teardown(selector: &str) {
    tracing::debug!(
        operation = LogOperation::Teardown.as_str(),
        selector = selector,
        "Scroll watcher detached"
    );
}
