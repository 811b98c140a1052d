//! # Authorizors
//!
//! An [`Authorizor`] answers one question: has this transaction been
//! cleared? Each variant has its own verification action, driven by the
//! caller, and the payment processors only ever read the answer.
//!
//! Authorizors are shared between the caller and the processors as
//! [`SharedAuthorizor`], so verification can happen after a processor has
//! been wired up.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{debug, info};

/// Capability for authorization checks.
pub trait Authorizor: Send + Sync {
    /// Whether the transaction has been cleared. Has no side effects.
    fn is_authorized(&self) -> bool;

    /// Short name of the verification method (for logging).
    fn method(&self) -> &'static str;
}

/// Type alias for a shared authorizor (dynamic dispatch)
pub type SharedAuthorizor = Arc<dyn Authorizor>;

/// Authorization by SMS code.
///
/// Any code is accepted; the code is only logged.
#[derive(Debug, Default)]
pub struct SmsAuth {
    authorized: AtomicBool,
}

impl SmsAuth {
    pub fn new() -> Self {
        Self::default()
    }

    /// Verify an SMS code. Once verified, stays verified.
    pub fn verify_code(&self, code: &str) {
        debug!(code = %code, "Verifying SMS code");
        self.authorized.store(true, Ordering::SeqCst);
        info!(method = self.method(), "Authorization granted");
    }
}

impl Authorizor for SmsAuth {
    fn is_authorized(&self) -> bool {
        self.authorized.load(Ordering::SeqCst)
    }

    fn method(&self) -> &'static str {
        "sms"
    }
}

/// Authorization by a simulated "I am not a robot" check.
#[derive(Debug, Default)]
pub struct NotARobot {
    authorized: AtomicBool,
}

impl NotARobot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Confirm the caller is human. Once confirmed, stays confirmed.
    pub fn confirm_not_robot(&self) {
        self.authorized.store(true, Ordering::SeqCst);
        info!(method = self.method(), "Not a robot confirmed");
    }
}

impl Authorizor for NotARobot {
    fn is_authorized(&self) -> bool {
        self.authorized.load(Ordering::SeqCst)
    }

    fn method(&self) -> &'static str {
        "not_a_robot"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sms_auth() {
        let auth = SmsAuth::new();
        assert!(!auth.is_authorized());

        auth.verify_code("465839");
        assert!(auth.is_authorized());
        assert!(auth.is_authorized());
    }

    #[test]
    fn test_sms_auth_accepts_any_code() {
        let auth = SmsAuth::new();
        auth.verify_code("");
        assert!(auth.is_authorized());
    }

    #[test]
    fn test_not_a_robot() {
        let auth = NotARobot::new();
        assert!(!auth.is_authorized());

        auth.confirm_not_robot();
        auth.confirm_not_robot();
        assert!(auth.is_authorized());
    }

    #[test]
    fn test_shared_handle_sees_verification() {
        let auth = Arc::new(NotARobot::new());
        let shared: SharedAuthorizor = auth.clone();

        assert!(!shared.is_authorized());
        auth.confirm_not_robot();
        assert!(shared.is_authorized());
        assert_eq!(shared.method(), "not_a_robot");
    }
}
