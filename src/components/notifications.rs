//! Order outcome overlays.
//!
//! Every notification in the flow's stack gets its own overlay. Success
//! overlays are expired by the page's timer driver; error overlays stay
//! until the user closes them.

use dioxus::prelude::*;
use flashorder_core::{Notification, NotificationKind};
use flashorder_ui::{Button, ButtonVariant, Overlay};

use crate::context::use_order_flow;

#[component]
pub fn NotificationLayer() -> Element {
    let flow = use_order_flow();
    let items: Vec<Notification> = flow.read().notifications().iter().cloned().collect();

    rsx! {
        for notification in items {
            NotificationCard { key: "{notification.id}", notification }
        }
    }
}

#[component]
pub fn NotificationCard(notification: Notification) -> Element {
    let mut flow = use_order_flow();
    let id = notification.id;

    let (icon, variant) = match notification.kind {
        NotificationKind::Success => ("\u{2714}", ButtonVariant::Primary),
        NotificationKind::Error => ("\u{2716}", ButtonVariant::Secondary),
    };
    let card_class = notification.kind.class();
    let icon_class = match notification.kind {
        NotificationKind::Success => "success-icon",
        NotificationKind::Error => "error-icon",
    };

    rsx! {
        Overlay { class: "notification-overlay".to_string(),
            div { class: "{card_class}",
                div { class: "{icon_class}", "{icon}" }
                h3 { "{notification.title}" }
                p { "{notification.message}" }
                if let Some(detail) = &notification.detail {
                    p { "{detail}" }
                }
                Button {
                    variant,
                    onclick: move |_| {
                        flow.write().dismiss_notification(id);
                    },
                    "{notification.dismiss_label}"
                }
            }
        }
    }
}
