pub mod navbar;

pub use navbar::FixedNavbar;
