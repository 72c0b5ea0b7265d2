//! UI Components for the order page.

mod amount_counter;
mod hero;
mod inline_error;
mod nav_header;
mod notifications;
mod order_modal;
mod package_card;
mod toast;

pub use amount_counter::AmountCounter;
pub use hero::Hero;
pub use inline_error::InlineErrorBanner;
pub use nav_header::NavHeader;
pub use notifications::{NotificationCard, NotificationLayer};
pub use order_modal::OrderModal;
pub use package_card::{PackageCard, PackageGrid};
pub use toast::{copy_to_clipboard, ToastLayer};
