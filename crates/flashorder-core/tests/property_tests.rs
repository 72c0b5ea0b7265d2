//! Property-based tests for order validation and page effects
//!
//! Uses proptest to check the validator against its documented patterns.

use std::time::Duration;

use flashorder_core::effects::{format_thousands, parse_amount, CounterAnimation, Typewriter};
use flashorder_core::validation::{validate, validate_email, validate_wallet};
use flashorder_core::ValidationError;
use proptest::prelude::*;

const VALID_EMAIL: &str = "user@example.com";

// ============================================================================
// Strategy Generators
// ============================================================================

/// Well-formed wallet addresses
fn wallet_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("0x[a-fA-F0-9]{40}").expect("valid regex")
}

/// Hex strings of the wrong length behind a correct prefix
fn wrong_length_wallet_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        prop::string::string_regex("0x[a-fA-F0-9]{0,39}").expect("valid regex"),
        prop::string::string_regex("0x[a-fA-F0-9]{41,60}").expect("valid regex"),
    ]
}

/// Emails that satisfy the permissive `local@domain.tld` shape
fn email_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z0-9._+-]{1,20}@[a-z0-9-]{1,20}\\.[a-z]{2,6}")
        .expect("valid regex")
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    #[test]
    fn well_formed_wallets_pass(wallet in wallet_strategy()) {
        prop_assert_eq!(validate(&wallet, VALID_EMAIL), Ok(()));
    }

    #[test]
    fn wrong_length_wallets_fail(wallet in wrong_length_wallet_strategy()) {
        prop_assert_eq!(validate_wallet(&wallet), Err(ValidationError::InvalidWallet));
    }

    /// Dropping the `0x` prefix always fails, whatever follows
    #[test]
    fn unprefixed_wallets_fail(digits in "[a-fA-F0-9]{42}") {
        prop_assume!(!digits.starts_with("0x"));
        prop_assert_eq!(validate_wallet(&digits), Err(ValidationError::InvalidWallet));
    }

    /// One non-hex character anywhere in the body fails the wallet check
    #[test]
    fn non_hex_wallets_fail(wallet in wallet_strategy(), pos in 2usize..42, bad in "[g-zG-Z_ ]") {
        let mut chars: Vec<char> = wallet.chars().collect();
        chars[pos] = bad.chars().next().unwrap();
        let wallet: String = chars.into_iter().collect();
        prop_assert_eq!(validate_wallet(&wallet), Err(ValidationError::InvalidWallet));
    }

    #[test]
    fn well_formed_emails_pass(email in email_strategy()) {
        prop_assert_eq!(validate_email(&email), Ok(()));
    }

    #[test]
    fn emails_without_at_fail(local in "[a-z0-9.]{1,20}", domain in "[a-z]{1,10}\\.[a-z]{2,4}") {
        let email = format!("{}{}", local, domain);
        prop_assert_eq!(validate_email(&email), Err(ValidationError::InvalidEmail));
    }

    #[test]
    fn emails_with_whitespace_fail(email in email_strategy(), pos in 0usize..10) {
        let at = pos.min(email.len() - 1);
        let mut broken = email.clone();
        broken.insert(at, ' ');
        prop_assert_eq!(validate_email(&broken), Err(ValidationError::InvalidEmail));
    }

    #[test]
    fn emails_without_domain_dot_fail(local in "[a-z0-9]{1,20}", domain in "[a-z0-9-]{1,20}") {
        let email = format!("{}@{}", local, domain);
        prop_assert_eq!(validate_email(&email), Err(ValidationError::InvalidEmail));
    }

    /// Wallet errors take precedence over any email problem
    #[test]
    fn wallet_error_short_circuits(email in ".{0,30}") {
        prop_assert_eq!(validate("", &email), Err(ValidationError::MissingWallet));
    }

    #[test]
    fn thousands_format_parses_back(value in 0u64..10_000_000_000) {
        prop_assert_eq!(parse_amount(&format_thousands(value)), Some(value));
    }

    #[test]
    fn counter_ends_on_target(target in 0u64..1_000_000, millis in 16u64..5000) {
        let mut counter = CounterAnimation::new(target, Duration::from_millis(millis));
        let mut last = counter.value();
        for _ in 0..10_000 {
            if counter.is_done() {
                break;
            }
            counter.tick();
            prop_assert!(counter.value() >= last);
            last = counter.value();
        }
        prop_assert!(counter.is_done());
        prop_assert_eq!(counter.value(), target);
    }

    #[test]
    fn typewriter_shows_prefixes(text in ".{0,40}") {
        let mut tw = Typewriter::new(text.clone());
        loop {
            prop_assert!(text.starts_with(tw.visible()));
            if !tw.step() {
                break;
            }
        }
        prop_assert_eq!(tw.visible(), text.as_str());
    }
}
