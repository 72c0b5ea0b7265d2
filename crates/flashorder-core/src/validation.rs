//! Order form validation
//!
//! Two required fields are checked synchronously before an order is handed
//! to the submitter. Validation short-circuits: the first failing rule is
//! the only one reported.

use regex::Regex;
use std::sync::LazyLock;

use crate::error::ValidationError;

/// `0x` followed by exactly 40 hex digits
static WALLET_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^0x[a-fA-F0-9]{40}$").expect("Wallet address regex pattern is valid")
});

/// Permissive `local@domain.tld` shape: no whitespace or `@` in any part,
/// at least one dot after the `@`
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Email regex pattern is valid")
});

/// Check a wallet address
pub fn validate_wallet(wallet: &str) -> Result<(), ValidationError> {
    if wallet.is_empty() {
        return Err(ValidationError::MissingWallet);
    }
    if !WALLET_PATTERN.is_match(wallet) {
        return Err(ValidationError::InvalidWallet);
    }
    Ok(())
}

/// Check an email address
pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    if email.is_empty() {
        return Err(ValidationError::MissingEmail);
    }
    if !EMAIL_PATTERN.is_match(email) {
        return Err(ValidationError::InvalidEmail);
    }
    Ok(())
}

/// Validate the required order fields, wallet first.
///
/// Inputs are expected to be trimmed already.
pub fn validate(wallet: &str, email: &str) -> Result<(), ValidationError> {
    validate_wallet(wallet)?;
    validate_email(email)
}

#[cfg(test)]
mod tests {
    use super::*;

    const WALLET: &str = "0x1234567890123456789012345678901234567890";

    #[test]
    fn test_reference_input_passes() {
        assert_eq!(validate(WALLET, "user@example.com"), Ok(()));
    }

    #[test]
    fn test_wallet_rules() {
        assert_eq!(validate_wallet(""), Err(ValidationError::MissingWallet));
        // missing prefix
        assert_eq!(
            validate_wallet("1234567890123456789012345678901234567890"),
            Err(ValidationError::InvalidWallet)
        );
        // 39 digits
        assert_eq!(
            validate_wallet("0x123456789012345678901234567890123456789"),
            Err(ValidationError::InvalidWallet)
        );
        // 41 digits
        assert_eq!(
            validate_wallet("0x12345678901234567890123456789012345678901"),
            Err(ValidationError::InvalidWallet)
        );
        // non-hex
        assert_eq!(
            validate_wallet("0xg234567890123456789012345678901234567890"),
            Err(ValidationError::InvalidWallet)
        );
        // uppercase prefix is not accepted
        assert_eq!(
            validate_wallet("0X1234567890123456789012345678901234567890"),
            Err(ValidationError::InvalidWallet)
        );
        assert_eq!(
            validate_wallet("0xABCDEFabcdef0123456789ABCDEFabcdef012345"),
            Ok(())
        );
    }

    #[test]
    fn test_email_rules() {
        assert_eq!(validate_email(""), Err(ValidationError::MissingEmail));
        assert_eq!(validate_email("userexample.com"), Err(ValidationError::InvalidEmail));
        assert_eq!(validate_email("user@example"), Err(ValidationError::InvalidEmail));
        assert_eq!(validate_email("us er@example.com"), Err(ValidationError::InvalidEmail));
        assert_eq!(validate_email("a@b@c.com"), Err(ValidationError::InvalidEmail));
        assert_eq!(validate_email("a@b.c"), Ok(()));
        assert_eq!(validate_email("first.last+tag@sub.example.org"), Ok(()));
    }

    #[test]
    fn test_short_circuits_on_wallet() {
        // both invalid: only the wallet error is reported
        assert_eq!(validate("", ""), Err(ValidationError::MissingWallet));
        assert_eq!(validate("0x1", "nope"), Err(ValidationError::InvalidWallet));
        assert_eq!(validate(WALLET, ""), Err(ValidationError::MissingEmail));
    }
}
