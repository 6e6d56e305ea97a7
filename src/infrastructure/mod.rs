// Browser bindings (WASM only - web-sys handles are not Send and need a window)
pub mod dom;

pub use dom::{DomElement, ScrollSubscription, WindowScrollSource};
