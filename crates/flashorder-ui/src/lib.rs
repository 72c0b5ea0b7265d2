//! Flash Order UI Components
//!
//! Dioxus primitives shared by the order page: buttons, labelled form
//! inputs and the full-screen overlay shell used by the order modal and
//! the outcome notifications.
//!
//! ## Palette
//!
//! - **Accent (#00d4aa)**: prices, links, primary actions
//! - **Amber (#f7b733)**: discounts and the featured package
//! - **Danger (#dc3545)**: validation and order failures
//! - **Success (#28a745)**: order confirmations

pub mod components;

pub use components::*;
