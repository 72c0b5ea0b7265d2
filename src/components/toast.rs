//! Clipboard toasts.

use dioxus::prelude::*;
use flashorder_core::effects::Toast;
use flashorder_core::FlowConfig;

use crate::context::use_toasts;

/// Write `text` to the system clipboard
pub fn copy_to_clipboard(text: &str) -> Result<(), arboard::Error> {
    let mut clipboard = arboard::Clipboard::new()?;
    clipboard.set_text(text.to_string())?;
    tracing::debug!("Copied {} bytes to clipboard", text.len());
    Ok(())
}

/// Bottom-right stack of live toasts
#[component]
pub fn ToastLayer() -> Element {
    let toasts = use_toasts();
    let items: Vec<Toast> = toasts.read().iter().cloned().collect();

    rsx! {
        div { class: "toast-stack",
            for toast in items {
                ToastItem { key: "{toast.id}", toast }
            }
        }
    }
}

#[component]
fn ToastItem(toast: Toast) -> Element {
    let mut toasts = use_toasts();
    let lifetime = use_context::<FlowConfig>().toast_duration();
    let id = toast.id;

    use_future(move || async move {
        tokio::time::sleep(lifetime).await;
        toasts.write().remove(id);
    });

    rsx! {
        div { class: "toast", "{toast.message}" }
    }
}
