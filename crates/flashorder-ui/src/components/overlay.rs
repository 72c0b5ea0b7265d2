//! Overlay Component
//!
//! Full-viewport backdrop layered above the page. Clicks on the backdrop
//! itself are reported; clicks inside the content card are not.

use dioxus::prelude::*;

use crate::components::button::with_extra_class;

#[derive(Clone, PartialEq, Props)]
pub struct OverlayProps {
    /// Content card
    pub children: Element,
    /// Called when the backdrop (not the card) is clicked
    #[props(default)]
    pub on_backdrop: Option<EventHandler<()>>,
    /// Extra classes for the backdrop element
    #[props(default)]
    pub class: Option<String>,
}

/// Backdrop plus content wrapper
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Overlay {
///         class: "modal".to_string(),
///         on_backdrop: move |_| flow.write().close(CloseTrigger::Overlay),
///         div { class: "modal-content", "..." }
///     }
/// }
/// ```
#[component]
pub fn Overlay(props: OverlayProps) -> Element {
    let full_class = with_extra_class("overlay", props.class.as_deref());

    rsx! {
        div {
            class: "{full_class}",
            onclick: move |_| {
                if let Some(handler) = &props.on_backdrop {
                    handler.call(());
                }
            },
            div {
                class: "overlay-body",
                onclick: move |e| e.stop_propagation(),
                {props.children}
            }
        }
    }
}
