//! Navigation header with the mobile hamburger menu.

use dioxus::prelude::*;

use crate::context::use_nav_menu;

const LINKS: [(&str, &str); 3] = [
    ("#packages", "Packages"),
    ("#how-it-works", "How It Works"),
    ("#contact", "Contact"),
];

#[component]
pub fn NavHeader() -> Element {
    let mut menu = use_nav_menu();
    let open = menu.read().is_open();

    rsx! {
        nav { class: "navbar",
            div { class: "nav-container",
                a { class: "nav-logo", href: "#", "\u{26A1} Flash USDT" }

                ul { class: if open { "nav-menu active" } else { "nav-menu" },
                    for (href, label) in LINKS {
                        li { key: "{href}",
                            a {
                                class: "nav-link",
                                href: "{href}",
                                onclick: move |_| menu.write().follow_link(),
                                "{label}"
                            }
                        }
                    }
                }

                button {
                    class: if open { "hamburger active" } else { "hamburger" },
                    r#type: "button",
                    "aria-label": "Toggle navigation",
                    onclick: move |_| menu.write().toggle(),
                    span {}
                    span {}
                    span {}
                }
            }
        }
    }
}
