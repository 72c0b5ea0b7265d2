//! Input Field Components
//!
//! Labelled text inputs for the order form. The `name` attribute is the
//! contract between the markup and the order flow (`walletAddress`,
//! `email`, `telegram`), so it doubles as the element id.

use dioxus::prelude::*;

use crate::components::button::with_extra_class;

/// Properties for the Input component
#[derive(Clone, PartialEq, Props)]
pub struct InputProps {
    /// Form field name, also used as the element id
    pub name: String,
    /// Current input value
    pub value: String,
    /// Handler called when input changes
    pub oninput: EventHandler<String>,
    /// Placeholder text
    #[props(default)]
    pub placeholder: Option<String>,
    /// Input label text
    #[props(default)]
    pub label: Option<String>,
    /// Hint shown after the label (e.g. "optional")
    #[props(default)]
    pub hint: Option<String>,
    /// Input type (text, email, ...)
    #[props(default = "text".to_string())]
    pub input_type: String,
    /// Whether the input is required
    #[props(default = false)]
    pub required: bool,
    /// Whether the input is disabled
    #[props(default = false)]
    pub disabled: bool,
    /// Take keyboard focus when mounted
    #[props(default = false)]
    pub autofocus: bool,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

/// Labelled text input
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Input {
///         name: "email".to_string(),
///         value: flow.read().form().email.clone(),
///         oninput: move |v| flow.write().set_field("email", v),
///         label: "Email Address".to_string(),
///         required: true,
///         autofocus: true,
///     }
/// }
/// ```
#[component]
pub fn Input(props: InputProps) -> Element {
    let input_class = with_extra_class("input-field", props.class.as_deref());
    let autofocus = props.autofocus;

    rsx! {
        div { class: "form-group",
            if let Some(label) = &props.label {
                label {
                    class: "input-label",
                    r#for: "{props.name}",
                    "{label}"
                    if let Some(hint) = &props.hint {
                        span { class: "input-hint", " ({hint})" }
                    }
                }
            }
            input {
                id: "{props.name}",
                name: "{props.name}",
                class: "{input_class}",
                r#type: "{props.input_type}",
                value: "{props.value}",
                placeholder: props.placeholder.as_deref().unwrap_or(""),
                required: props.required,
                disabled: props.disabled,
                autocomplete: "off",
                onmounted: move |e: MountedEvent| async move {
                    if autofocus {
                        let _ = e.set_focus(true).await;
                    }
                },
                oninput: move |e| props.oninput.call(e.value()),
            }
        }
    }
}
