//! Flash Order Core Library
//!
//! Renderer-independent state and logic behind the package order page.
//!
//! ## Overview
//!
//! The page lists purchasable USDT packages. Selecting one opens a modal
//! with an order form; submitting the form validates the wallet address and
//! email, hands the order to an [`OrderSubmitter`], and reports the outcome
//! through an overlay notification.
//!
//! All of that lives in [`OrderFlow`], which owns the modal state, the form
//! fields, the submit control and the notification stack. The Dioxus page in
//! the root crate only renders it and forwards events.
//!
//! ## Quick Start
//!
//! ```ignore
//! use flashorder_core::{FlowConfig, OrderFlow, SimulatedSubmitter};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = FlowConfig::default();
//!     let submitter = SimulatedSubmitter::from_config(&config);
//!     let mut flow = OrderFlow::new(config);
//!
//!     flow.open("mega");
//!     flow.form_mut().wallet_address = "0x1234567890123456789012345678901234567890".into();
//!     flow.form_mut().email = "user@example.com".into();
//!
//!     let outcome = flow.submit_with(&submitter).await?;
//!     println!("{:?}", outcome);
//!     Ok(())
//! }
//! ```

pub mod catalog;
pub mod config;
pub mod effects;
pub mod error;
pub mod flow;
pub mod notification;
pub mod order;
pub mod submission;
pub mod validation;

// Re-exports
pub use catalog::{Catalog, Package, PackageId, PackageSummary};
pub use config::FlowConfig;
pub use error::{
    CatalogError, ConfigError, FlowError, OrderError, OrderResult, SubmissionError,
    ValidationError,
};
pub use flow::{CloseTrigger, InlineError, OrderFlow, SubmitControl, SubmitGuard, SubmitOutcome};
pub use notification::{Notification, NotificationId, NotificationKind, NotificationStack};
pub use order::{OrderForm, OrderSubmission};
pub use submission::{OrderReceipt, OrderSubmitter, SimulatedSubmitter};
pub use validation::validate;
