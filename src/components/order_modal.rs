//! Order Modal Component
//!
//! Dialog for the selected package: summary, order form, inline error and
//! the submit control. All state lives in the page's [`OrderFlow`]; this
//! component renders it and forwards events.

use dioxus::prelude::*;
use flashorder_core::order::{FIELD_CONTACT, FIELD_EMAIL, FIELD_WALLET};
use flashorder_core::{
    CloseTrigger, FlowError, OrderFlow, OrderReceipt, PackageSummary, SubmissionError,
    SubmitOutcome,
};
use flashorder_ui::{Button, ButtonVariant, CloseButton, Input, Overlay, SubmitButton};

use crate::components::InlineErrorBanner;
use crate::context::{use_order_flow, use_submitter};

/// A submission running in a spawned task.
///
/// If the task is dropped before the submitter answers, the submit control
/// is restored on drop.
struct PendingSubmission {
    flow: Signal<OrderFlow>,
    finished: bool,
}

impl PendingSubmission {
    fn new(flow: Signal<OrderFlow>) -> Self {
        Self {
            flow,
            finished: false,
        }
    }

    fn finish(mut self, result: Result<OrderReceipt, SubmissionError>) -> SubmitOutcome {
        self.finished = true;
        let mut flow = self.flow;
        let outcome = flow.write().finish_submission(result);
        outcome
    }
}

impl Drop for PendingSubmission {
    fn drop(&mut self) {
        if self.finished {
            return;
        }
        if let Ok(mut flow) = self.flow.try_write() {
            flow.abort_submission();
        }
    }
}

/// Order dialog
///
/// Renders nothing while the flow's dialog is closed.
#[component]
pub fn OrderModal() -> Element {
    let mut flow = use_order_flow();
    let submitter = use_submitter();

    let on_submit = move |e: FormEvent| {
        e.prevent_default();

        let prepared = flow.write().prepare_submission();
        let order = match prepared {
            Ok(order) => order,
            Err(err) => {
                // validation failures are already shown inline
                if !matches!(err, FlowError::Invalid(_)) {
                    tracing::debug!(%err, "Submit ignored");
                }
                return;
            }
        };

        let submitter = submitter.clone();
        spawn(async move {
            let pending = PendingSubmission::new(flow);
            let result = submitter.submit(&order).await;
            match pending.finish(result) {
                SubmitOutcome::Confirmed { receipt, .. } => {
                    tracing::info!(package = %receipt.package, at = %receipt.submitted_at, "Order receipt")
                }
                SubmitOutcome::Failed { error, .. } => {
                    tracing::warn!(%error, "Order not processed")
                }
            }
        });
    };

    let state = flow.read();
    if !state.is_open() {
        return rsx! {};
    }
    let Some(summary) = state.summary() else {
        return rsx! {};
    };
    let form = state.form().clone();
    let inline_error = state.inline_error().cloned();
    let control = state.submit_control();
    drop(state);

    rsx! {
        Overlay {
            class: "modal".to_string(),
            on_backdrop: move |_| flow.write().close(CloseTrigger::Overlay),

            div { class: "modal-content",
                div { class: "modal-header",
                    h3 { "Complete Your Order" }
                    CloseButton { onclick: move |_| flow.write().close(CloseTrigger::CloseButton) }
                }

                if let Some(error) = inline_error {
                    InlineErrorBanner { key: "{error.serial}", error }
                }

                PackageSummaryView { summary }

                form { class: "order-form", novalidate: true, onsubmit: on_submit,
                    Input {
                        name: FIELD_WALLET.to_string(),
                        value: form.wallet_address,
                        oninput: move |v: String| flow.write().set_field(FIELD_WALLET, v),
                        label: "ETH Wallet Address".to_string(),
                        placeholder: "0x...".to_string(),
                        required: true,
                        autofocus: true,
                    }
                    Input {
                        name: FIELD_EMAIL.to_string(),
                        value: form.email,
                        oninput: move |v: String| flow.write().set_field(FIELD_EMAIL, v),
                        label: "Email Address".to_string(),
                        placeholder: "you@example.com".to_string(),
                        required: true,
                    }
                    Input {
                        name: FIELD_CONTACT.to_string(),
                        value: form.contact,
                        oninput: move |v: String| flow.write().set_field(FIELD_CONTACT, v),
                        label: "Telegram".to_string(),
                        hint: "optional".to_string(),
                        placeholder: "@username".to_string(),
                    }

                    div { class: "form-actions",
                        Button {
                            variant: ButtonVariant::Secondary,
                            class: "cancel-btn".to_string(),
                            onclick: move |_| flow.write().close(CloseTrigger::CancelButton),
                            "Cancel"
                        }
                        SubmitButton { control }
                    }
                }
            }
        }
    }
}

#[component]
fn PackageSummaryView(summary: PackageSummary) -> Element {
    rsx! {
        div { class: "package-summary",
            h4 { "{summary.name}" }
            div { class: "package-amount",
                span { class: "currency", "{summary.currency}" }
                span { class: "amount", "{summary.amount}" }
            }
            div { class: "package-price",
                span { class: "price", "{summary.price}" }
                if let Some(original) = &summary.original_price {
                    span { class: "original-price", "{original}" }
                }
                if let Some(discount) = &summary.discount {
                    span { class: "discount", "{discount}" }
                }
            }
        }
    }
}
