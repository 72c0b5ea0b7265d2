//! Home page - the package catalog and order flow.
//!
//! The root element is the page's scroll container. It carries the
//! keyboard handler (Escape closes the order dialog), the scroll lock while
//! the dialog is open and the driver that expires inline errors and
//! success overlays.

use dioxus::prelude::*;
use flashorder_core::OrderFlow;

use crate::components::{
    Hero, NavHeader, NotificationLayer, OrderModal, PackageGrid, ToastLayer,
};
use crate::context::use_order_flow;

/// Steps shown in the "How it works" section
const STEPS: [(&str, &str); 3] = [
    ("Choose a package", "Pick the amount that fits your needs."),
    ("Enter your details", "Provide your ETH wallet address and email."),
    ("Receive your USDT", "Funds arrive right after the order is processed."),
];

/// Route a key press on the page into the flow. Returns whether it was used.
fn route_key(flow: &mut OrderFlow, key: &Key) -> bool {
    match key {
        Key::Escape => flow.handle_key("Escape"),
        _ => false,
    }
}

/// Home page component.
#[component]
pub fn Home() -> Element {
    let mut flow = use_order_flow();
    let scroll_locked = flow.read().is_scroll_locked();

    // Reruns whenever the flow changes, so a new deadline replaces the wait.
    use_resource(move || async move {
        let Some(deadline) = flow.read().next_deadline() else {
            return;
        };
        tokio::time::sleep_until(deadline).await;
        flow.write().expire_due(tokio::time::Instant::now());
    });

    let on_key = move |e: KeyboardEvent| {
        if !flow.read().is_open() {
            return;
        }
        if route_key(&mut flow.write(), &e.key()) {
            e.prevent_default();
        }
    };

    rsx! {
        div {
            class: if scroll_locked { "page scroll-locked" } else { "page" },
            tabindex: "0",
            onkeydown: on_key,

            NavHeader {}
            Hero {}

            section { id: "packages", class: "packages-section",
                header { class: "section-header animate-in",
                    h2 { "Choose Your Package" }
                    p { "Instant USDT delivery to your ETH wallet" }
                }
                PackageGrid {}
            }

            section { id: "how-it-works", class: "steps-section",
                header { class: "section-header animate-in",
                    h2 { "How It Works" }
                }
                div { class: "steps-grid",
                    for (number, (title, body)) in (1..).zip(STEPS.iter()) {
                        div { key: "{number}", class: "step-card animate-in",
                            span { class: "step-number", "{number}" }
                            h3 { "{title}" }
                            p { "{body}" }
                        }
                    }
                }
            }

            footer { id: "contact", class: "footer",
                p { "Questions? Reach us through the contact handle in your order confirmation." }
            }

            OrderModal {}
            NotificationLayer {}
            ToastLayer {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flashorder_core::FlowConfig;

    #[test]
    fn escape_closes_open_dialog() {
        let mut flow = OrderFlow::new(FlowConfig::default());
        assert!(flow.open("premium"));

        assert!(!route_key(&mut flow, &Key::Enter));
        assert!(!route_key(&mut flow, &Key::Character("e".into())));
        assert!(flow.is_open());

        assert!(route_key(&mut flow, &Key::Escape));
        assert!(!flow.is_open());
        assert!(!flow.is_scroll_locked());
        assert!(!route_key(&mut flow, &Key::Escape));
    }
}
