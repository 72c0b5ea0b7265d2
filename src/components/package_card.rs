//! Package cards.
//!
//! One card per catalog package. "Select Package" opens the order dialog
//! for that package's identifier.

use dioxus::prelude::*;
use flashorder_core::Package;
use flashorder_ui::{Button, ButtonVariant};

use crate::components::{copy_to_clipboard, AmountCounter};
use crate::context::{use_order_flow, use_toasts};

/// Grid of every package in the catalog
#[component]
pub fn PackageGrid() -> Element {
    let flow = use_order_flow();
    let packages: Vec<Package> = flow.read().catalog().iter().cloned().collect();

    rsx! {
        div { class: "packages-grid",
            for package in packages {
                PackageCard { key: "{package.id}", package }
            }
        }
    }
}

/// A single package tier
#[component]
pub fn PackageCard(package: Package) -> Element {
    let mut flow = use_order_flow();
    let mut toasts = use_toasts();

    let id = package.id;
    let summary = package.summary().to_string();
    let card_class = if package.is_featured() {
        "package-card popular animate-in"
    } else {
        "package-card animate-in"
    };

    rsx! {
        div { class: "{card_class}",
            if package.is_featured() {
                div { class: "popular-badge", "Most Popular" }
            }
            if let Some(discount) = package.discount {
                div { class: "discount-badge", "{discount}" }
            }

            h3 { class: "package-name", "{package.name}" }

            div { class: "package-amount",
                span { class: "currency", "{package.currency}" }
                AmountCounter { amount: package.amount }
            }

            div { class: "package-price",
                span { class: "price", "{package.price}" }
                if let Some(original) = package.original_price {
                    span { class: "original-price", "{original}" }
                }
            }

            ul { class: "package-features",
                for feature in package.features.iter() {
                    li { key: "{feature}", "\u{2713} {feature}" }
                }
            }

            div { class: "package-actions",
                Button {
                    class: "select-package".to_string(),
                    onclick: move |_| {
                        flow.write().open(id.as_str());
                    },
                    "Select Package"
                }
                Button {
                    variant: ButtonVariant::Ghost,
                    onclick: move |_| {
                        let result = copy_to_clipboard(&summary);
                        toasts.write().push_copy_result(&result);
                    },
                    "Copy details"
                }
            }
        }
    }
}
