use dioxus::prelude::*;

use crate::app::layouts::FixedNavbar;

#[component]
pub fn App() -> Element {
    rsx! {
        FixedNavbar {
            div {
                style: "font-size: 1.25rem; font-weight: 600; white-space: nowrap;",
                "Home"
            }
            div {
                style: "display: flex; gap: 16px;",
                a { href: "#services", "Services" }
                a { href: "#contact", "Contact" }
            }
        }
        main {
            style: "padding-top: 80px; min-height: 200vh;",
            section { id: "services",
                h2 { "Services" }
            }
            section { id: "contact",
                style: "margin-top: 100vh;",
                h2 { "Contact" }
            }
        }
    }
}
