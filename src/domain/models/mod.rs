// Domain models
// Pure Rust, no framework dependencies

pub mod marker;

pub use marker::{MarkerState, ScrollThreshold};
