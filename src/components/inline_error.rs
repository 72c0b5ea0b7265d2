//! Inline validation error under the order dialog header.
//!
//! Expiry is scheduled by the flow itself; the page's timer driver removes
//! the error once its deadline passes.

use dioxus::prelude::*;
use flashorder_core::InlineError;

#[component]
pub fn InlineErrorBanner(error: InlineError) -> Element {
    rsx! {
        div { class: "error-message", role: "alert",
            span { class: "error-icon", "\u{26A0}" }
            span { "{error.message}" }
        }
    }
}
