// Business logic services
// Framework-agnostic, 100% testable

pub mod scroll_watcher;
pub use scroll_watcher::*;
