//! Order form fields and the submission built from them

use serde::{Deserialize, Serialize};

use crate::catalog::PackageId;
use crate::error::ValidationError;
use crate::validation;

/// Markup name of the wallet address input
pub const FIELD_WALLET: &str = "walletAddress";
/// Markup name of the email input
pub const FIELD_EMAIL: &str = "email";
/// Markup name of the optional contact handle input
pub const FIELD_CONTACT: &str = "telegram";

/// Raw values bound to the order form inputs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderForm {
    pub wallet_address: String,
    pub email: String,
    pub contact: String,
}

impl OrderForm {
    /// Set a field by its markup name. Unknown names are ignored.
    pub fn set_field(&mut self, name: &str, value: impl Into<String>) {
        match name {
            FIELD_WALLET => self.wallet_address = value.into(),
            FIELD_EMAIL => self.email = value.into(),
            FIELD_CONTACT => self.contact = value.into(),
            other => tracing::debug!(field = other, "Ignoring unknown form field"),
        }
    }

    /// Clear every field
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        self.wallet_address.is_empty() && self.email.is_empty() && self.contact.is_empty()
    }

    /// Trim, validate and pair the fields with the selected package
    pub fn to_submission(&self, package: PackageId) -> Result<OrderSubmission, ValidationError> {
        let wallet_address = self.wallet_address.trim();
        let email = self.email.trim();
        validation::validate(wallet_address, email)?;

        let contact = self.contact.trim();
        Ok(OrderSubmission {
            package,
            wallet_address: wallet_address.to_string(),
            email: email.to_string(),
            contact: (!contact.is_empty()).then(|| contact.to_string()),
        })
    }
}

/// User-entered order data paired with the chosen package
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderSubmission {
    pub package: PackageId,
    pub wallet_address: String,
    pub email: String,
    pub contact: Option<String>,
}
