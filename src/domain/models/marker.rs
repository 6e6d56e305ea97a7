use serde::{Deserialize, Serialize};

use crate::shared::constants::DEFAULT_SCROLL_THRESHOLD;

/// Whether the presentation marker is on the navbar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkerState {
    Present,
    Absent,
}

impl MarkerState {
    pub fn as_str(&self) -> &'static str {
        match self {
            MarkerState::Present => "present",
            MarkerState::Absent => "absent",
        }
    }

    pub fn is_present(&self) -> bool {
        matches!(self, MarkerState::Present)
    }
}

/// Vertical offset, in CSS pixels, that has to be exceeded for the marker to show.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScrollThreshold(pub f64);

impl ScrollThreshold {
    /// Strict comparison: an offset equal to the threshold does not count.
    /// NaN never exceeds anything.
    pub fn is_exceeded_by(&self, offset: f64) -> bool {
        offset > self.0
    }

    pub fn state_for(&self, offset: f64) -> MarkerState {
        if self.is_exceeded_by(offset) {
            MarkerState::Present
        } else {
            MarkerState::Absent
        }
    }
}

impl Default for ScrollThreshold {
    fn default() -> Self {
        ScrollThreshold(DEFAULT_SCROLL_THRESHOLD)
    }
}
