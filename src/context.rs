//! Context providers for the order page.
//!
//! `App` builds the page state once and shares it with every component
//! through Dioxus context, so no component reaches for globals.
//!
//! ## Usage
//!
//! ```ignore
//! // In child components
//! let mut flow = use_order_flow();
//! flow.write().open("mega");
//! ```

use std::sync::Arc;

use dioxus::prelude::*;
use flashorder_core::effects::{NavMenu, ToastStack};
use flashorder_core::{OrderFlow, OrderSubmitter};

/// Shared order backend.
///
/// Held behind a trait object so a real payment backend can replace the
/// simulated one without touching the components.
pub type SharedSubmitter = Arc<dyn OrderSubmitter>;

/// Hook to access the order flow controller state
pub fn use_order_flow() -> Signal<OrderFlow> {
    use_context::<Signal<OrderFlow>>()
}

/// Hook to access the order backend
pub fn use_submitter() -> SharedSubmitter {
    use_context::<SharedSubmitter>()
}

/// Hook to access the clipboard toast stack
pub fn use_toasts() -> Signal<ToastStack> {
    use_context::<Signal<ToastStack>>()
}

/// Hook to access the mobile navigation menu state
pub fn use_nav_menu() -> Signal<NavMenu> {
    use_context::<Signal<NavMenu>>()
}
