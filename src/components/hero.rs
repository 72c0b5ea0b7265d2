//! Hero banner with the typewriter title.

use dioxus::prelude::*;
use flashorder_core::effects::Typewriter;

const TITLE: &str = "Flash USDT";

#[component]
pub fn Hero() -> Element {
    let mut title = use_signal(|| Typewriter::new(TITLE));

    use_future(move || async move {
        tokio::time::sleep(Typewriter::START_DELAY).await;
        loop {
            tokio::time::sleep(Typewriter::STEP).await;
            if !title.write().step() {
                break;
            }
        }
    });

    let visible = title.read().visible().to_string();

    rsx! {
        header { class: "hero",
            div { class: "hero-content",
                h1 { class: "hero-title",
                    "Get "
                    span { class: "gradient-text", "{visible}" }
                    span { class: "caret", "|" }
                }
                p { class: "hero-subtitle",
                    "Fast, secure USDT packages delivered straight to your wallet."
                }
                a { class: "btn-primary hero-cta", href: "#packages", "View Packages" }
            }
            div { class: "floating-card",
                span { class: "currency", "USDT" }
                span { class: "floating-amount", "Instant" }
            }
        }
    }
}
