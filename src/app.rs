use std::sync::Arc;

use dioxus::prelude::*;
use flashorder_core::effects::{NavMenu, ToastStack};
use flashorder_core::{FlowConfig, OrderFlow, SimulatedSubmitter};

use crate::context::SharedSubmitter;
use crate::pages::Home;
use crate::theme::GLOBAL_STYLES;

/// Root application component.
///
/// Builds the order flow state from the launch config and provides it,
/// the submitter, the toast stack and the nav menu to the page.
#[component]
pub fn App() -> Element {
    let config = use_context::<FlowConfig>();

    let flow: Signal<OrderFlow> = use_signal(|| OrderFlow::new(config.clone()));
    let toasts: Signal<ToastStack> = use_signal(ToastStack::default);
    let nav_menu: Signal<NavMenu> = use_signal(NavMenu::default);
    let submitter: SharedSubmitter =
        use_hook(|| Arc::new(SimulatedSubmitter::from_config(&config)) as SharedSubmitter);

    use_context_provider(|| flow);
    use_context_provider(|| toasts);
    use_context_provider(|| nav_menu);
    use_context_provider(|| submitter);

    use_hook(|| tracing::info!("Flash Order page loaded"));

    rsx! {
        style { {GLOBAL_STYLES} }
        Home {}
    }
}
