//! # Payment Error Types
//!
//! Typed error handling for the orderpay workflow.
//! All payment operations return `Result<T, PaymentError>`.

use thiserror::Error;

/// Core error type for all payment operations
#[derive(Debug, Error)]
pub enum PaymentError {
    /// The processor's authorizor has not cleared the transaction
    #[error("Not authorized: {processor} payment requires a completed authorization")]
    NotAuthorized { processor: String },

    /// Configuration errors (unknown processor, unknown authorizor)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl PaymentError {
    /// Returns true if the payment was rejected by the authorization gate
    pub fn is_authorization_failure(&self) -> bool {
        matches!(self, PaymentError::NotAuthorized { .. })
    }
}

impl From<toml::de::Error> for PaymentError {
    fn from(err: toml::de::Error) -> Self {
        PaymentError::Serialization(err.to_string())
    }
}

/// Result type alias for payment operations
pub type PaymentResult<T> = Result<T, PaymentError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_authorization_failure() {
        let err = PaymentError::NotAuthorized {
            processor: "paypal".into(),
        };
        assert!(err.is_authorization_failure());
        assert!(!PaymentError::Configuration("bad".into()).is_authorization_failure());
    }

    #[test]
    fn test_error_messages() {
        let err = PaymentError::NotAuthorized {
            processor: "debit".into(),
        };
        assert_eq!(
            err.to_string(),
            "Not authorized: debit payment requires a completed authorization"
        );
        assert_eq!(
            PaymentError::Configuration("unknown processor: cash".into()).to_string(),
            "Configuration error: unknown processor: cash"
        );
    }
}
