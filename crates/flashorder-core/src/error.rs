//! Error types for Flash Order

use thiserror::Error;

/// Lookup failures against the package catalog
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// Identifier is not one of the catalog packages
    #[error("Package not found: {0}")]
    PackageNotFound(String),
}

/// Order form validation failures.
///
/// The display strings are shown to the user verbatim as the inline error.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please enter your ETH wallet address")]
    MissingWallet,

    #[error("Please enter a valid ETH wallet address starting with 0x")]
    InvalidWallet,

    #[error("Please enter your email address")]
    MissingEmail,

    #[error("Please enter a valid email address")]
    InvalidEmail,
}

/// Failures reported by an order submitter
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmissionError {
    /// The payment backend declined or failed to process the order
    #[error("{0}")]
    Rejected(String),
}

/// Order flow controller errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FlowError {
    /// Submit was requested without an open dialog and a selected package
    #[error("No package selected")]
    NoSelection,

    /// A submission is already in flight
    #[error("An order is already being processed")]
    AlreadySubmitting,

    /// Form failed validation
    #[error(transparent)]
    Invalid(#[from] ValidationError),
}

/// Configuration loading errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config file: {0}")]
    Parse(#[from] serde_json::Error),

    /// A value is outside its allowed range
    #[error("Invalid config value: {0}")]
    Value(String),
}

/// Top-level error type for Flash Order operations
#[derive(Error, Debug)]
pub enum OrderError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Submission(#[from] SubmissionError),

    #[error(transparent)]
    Flow(#[from] FlowError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Result type alias using OrderError
pub type OrderResult<T> = Result<T, OrderError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CatalogError::PackageNotFound("gold".to_string());
        assert_eq!(format!("{}", err), "Package not found: gold");
        assert_eq!(
            ValidationError::InvalidWallet.to_string(),
            "Please enter a valid ETH wallet address starting with 0x"
        );
    }

    #[test]
    fn test_flow_error_is_transparent_for_validation() {
        let err: FlowError = ValidationError::MissingEmail.into();
        assert_eq!(err.to_string(), "Please enter your email address");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: OrderError = ConfigError::from(io_err).into();
        assert!(matches!(err, OrderError::Config(ConfigError::Io(_))));
    }
}
