//! # Payment Processors
//!
//! Strategy trait for charging an order, and its three implementations.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                 PaymentProcessor (trait)                    │
//! │  ├── pay()                                                  │
//! │  ├── processor_name()                                       │
//! │  └── requires_authorization()                               │
//! └─────────────────────────────────────────────────────────────┘
//!                            ▲
//!          ┌─────────────────┼─────────────────┐
//!          │                 │                 │
//!  ┌───────┴───────┐ ┌───────┴───────┐ ┌───────┴───────┐
//!  │DebitProcessor │ │CreditProcessor│ │PaypalProcessor│
//!  │ + Authorizor  │ │               │ │ + Authorizor  │
//!  └───────────────┘ └───────────────┘ └───────────────┘
//! ```
//!
//! Debit and PayPal are gated by an injected [`SharedAuthorizor`]; credit is
//! not. A rejected payment leaves the order untouched.

use crate::auth::SharedAuthorizor;
use crate::error::{PaymentError, PaymentResult};
use crate::order::{Order, OrderStatus};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{info, instrument, warn};

/// Core trait for payment processor implementations.
pub trait PaymentProcessor: Send + Sync {
    /// Charge the order and mark it paid.
    ///
    /// # Errors
    /// [`PaymentError::NotAuthorized`] if the processor is gated by an
    /// authorizor that has not cleared the transaction. The order is not
    /// modified in that case.
    fn pay(&self, order: &mut Order) -> PaymentResult<()>;

    /// Get the processor name (for logging and selection).
    fn processor_name(&self) -> &'static str;

    /// Whether `pay` is gated by an authorizor.
    fn requires_authorization(&self) -> bool {
        false
    }
}

/// Type alias for a boxed payment processor (dynamic dispatch)
pub type BoxedPaymentProcessor = Arc<dyn PaymentProcessor>;

/// Fail with `NotAuthorized` unless the authorizor has cleared the payment
fn ensure_authorized(authorizor: &SharedAuthorizor, processor: &str) -> PaymentResult<()> {
    if authorizor.is_authorized() {
        return Ok(());
    }
    warn!(
        processor,
        method = authorizor.method(),
        "Payment rejected: not authorized"
    );
    Err(PaymentError::NotAuthorized {
        processor: processor.to_string(),
    })
}

fn settle(order: &mut Order, processor: &str) {
    if order.mark_paid() == OrderStatus::Paid {
        warn!(processor, order_id = %order.id, "Order was already paid");
    }
    info!(processor, order_id = %order.id, total = order.total_price(), "Order paid");
}

/// Hide all but the last character of a secret
fn mask(secret: &str) -> String {
    let count = secret.chars().count();
    secret
        .chars()
        .enumerate()
        .map(|(i, c)| if i + 1 < count { '*' } else { c })
        .collect()
}

/// Debit card payment, gated by an authorizor.
pub struct DebitProcessor {
    security_code: String,
    authorizor: SharedAuthorizor,
}

impl DebitProcessor {
    pub fn new(security_code: impl Into<String>, authorizor: SharedAuthorizor) -> Self {
        Self {
            security_code: security_code.into(),
            authorizor,
        }
    }
}

impl PaymentProcessor for DebitProcessor {
    #[instrument(skip(self, order), fields(order_id = %order.id))]
    fn pay(&self, order: &mut Order) -> PaymentResult<()> {
        ensure_authorized(&self.authorizor, self.processor_name())?;
        info!("Processing debit payment");
        info!(security_code = %mask(&self.security_code), "Verifying security code");
        settle(order, self.processor_name());
        Ok(())
    }

    fn processor_name(&self) -> &'static str {
        "debit"
    }

    fn requires_authorization(&self) -> bool {
        true
    }
}

/// Credit card payment. Never gated.
pub struct CreditProcessor {
    security_code: String,
}

impl CreditProcessor {
    pub fn new(security_code: impl Into<String>) -> Self {
        Self {
            security_code: security_code.into(),
        }
    }
}

impl PaymentProcessor for CreditProcessor {
    #[instrument(skip(self, order), fields(order_id = %order.id))]
    fn pay(&self, order: &mut Order) -> PaymentResult<()> {
        info!("Processing credit payment");
        info!(security_code = %mask(&self.security_code), "Verifying security code");
        settle(order, self.processor_name());
        Ok(())
    }

    fn processor_name(&self) -> &'static str {
        "credit"
    }
}

/// PayPal payment, gated by an authorizor.
pub struct PaypalProcessor {
    email_address: String,
    authorizor: SharedAuthorizor,
}

impl PaypalProcessor {
    pub fn new(email_address: impl Into<String>, authorizor: SharedAuthorizor) -> Self {
        Self {
            email_address: email_address.into(),
            authorizor,
        }
    }

    pub fn email_address(&self) -> &str {
        &self.email_address
    }
}

impl PaymentProcessor for PaypalProcessor {
    #[instrument(skip(self, order), fields(order_id = %order.id))]
    fn pay(&self, order: &mut Order) -> PaymentResult<()> {
        ensure_authorized(&self.authorizor, self.processor_name())?;
        info!("Processing paypal payment");
        info!(email = %self.email_address, "Verifying email");
        settle(order, self.processor_name());
        Ok(())
    }

    fn processor_name(&self) -> &'static str {
        "paypal"
    }

    fn requires_authorization(&self) -> bool {
        true
    }
}

/// Processor selector for choosing a variant by name
#[derive(Clone)]
pub struct ProcessorSelector {
    processors: HashMap<String, BoxedPaymentProcessor>,
    default_processor: String,
}

impl ProcessorSelector {
    /// Create a new selector with a default processor name
    pub fn new(default_processor: impl Into<String>) -> Self {
        Self {
            processors: HashMap::new(),
            default_processor: default_processor.into(),
        }
    }

    /// Register a processor under its `processor_name()`
    pub fn register(&mut self, processor: BoxedPaymentProcessor) {
        let name = processor.processor_name().to_string();
        self.processors.insert(name, processor);
    }

    /// Register with builder pattern
    pub fn with_processor(mut self, processor: BoxedPaymentProcessor) -> Self {
        self.register(processor);
        self
    }

    /// Get the default processor
    pub fn default_processor(&self) -> Option<&BoxedPaymentProcessor> {
        self.processors.get(&self.default_processor)
    }

    /// Get a processor by name
    pub fn get(&self, name: &str) -> Option<&BoxedPaymentProcessor> {
        self.processors.get(name)
    }

    /// Get processor or fall back to default
    pub fn get_or_default(&self, name: Option<&str>) -> Option<&BoxedPaymentProcessor> {
        match name {
            Some(n) => self.get(n).or_else(|| self.default_processor()),
            None => self.default_processor(),
        }
    }

    /// List all registered processor names, sorted
    pub fn processors(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.processors.keys().map(|s| s.as_str()).collect();
        names.sort_unstable();
        names
    }
}
