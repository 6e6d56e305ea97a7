// Custom Dioxus hooks
pub mod use_scroll_marker;

pub use use_scroll_marker::use_scroll_marker;
