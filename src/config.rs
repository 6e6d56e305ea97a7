//! Watcher configuration
//!
//! Defaults match the stock page markup (`.fixed-navbar`, `scrolled`, 50px).
//! A JSON document can override any subset of the fields.

use serde::{Deserialize, Serialize};

use crate::domain::models::ScrollThreshold;
use crate::shared::constants::{DEFAULT_MARKER_CLASS, DEFAULT_NAVBAR_SELECTOR};
use crate::shared::errors::{Result, WatchError};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WatcherConfig {
    /// CSS selector of the navbar element
    pub selector: String,
    /// Class toggled on the navbar
    pub marker: String,
    pub threshold: ScrollThreshold,
    /// Run one check right after attaching, before any scroll event arrives
    pub check_on_attach: bool,
}

impl Default for WatcherConfig {
    fn default() -> Self {
        Self {
            selector: DEFAULT_NAVBAR_SELECTOR.to_string(),
            marker: DEFAULT_MARKER_CLASS.to_string(),
            threshold: ScrollThreshold::default(),
            check_on_attach: true,
        }
    }
}

impl WatcherConfig {
    /// Parse a JSON override and validate the result
    pub fn from_json(raw: &str) -> Result<Self> {
        let config: WatcherConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.selector.trim().is_empty() {
            return Err(WatchError::InvalidConfig("selector must not be empty".to_string()));
        }
        // DOMTokenList.add rejects empty tokens and tokens containing whitespace
        if self.marker.is_empty() {
            return Err(WatchError::InvalidConfig("marker must not be empty".to_string()));
        }
        if self.marker.chars().any(|c| c.is_ascii_whitespace()) {
            return Err(WatchError::InvalidConfig(format!(
                "marker '{}' must be a single class name",
                self.marker
            )));
        }
        if !self.threshold.0.is_finite() {
            return Err(WatchError::InvalidConfig(format!(
                "threshold must be finite, got {}",
                self.threshold.0
            )));
        }
        Ok(())
    }
}
