//! # Demo Driver
//!
//! Runs the illustrative sequence: build an order, wire an authorizor into
//! the processors, try to pay before authorizing, authorize, then pay.

use crate::config::{AuthorizorKind, DemoConfig};
use anyhow::Context;
use orderpay_core::{
    CreditProcessor, DebitProcessor, NotARobot, Order, PaymentProcessor, PaypalProcessor,
    ProcessorSelector, SharedAuthorizor, SmsAuth,
};
use serde::Serialize;
use std::sync::Arc;
use tracing::{info, instrument};

/// The authorizor the caller drives, kept concrete so its verification
/// action stays reachable after the processors hold a shared handle.
enum DemoAuthorizor {
    Sms(Arc<SmsAuth>),
    NotARobot(Arc<NotARobot>),
}

impl DemoAuthorizor {
    fn new(kind: AuthorizorKind) -> Self {
        match kind {
            AuthorizorKind::Sms => DemoAuthorizor::Sms(Arc::new(SmsAuth::new())),
            AuthorizorKind::NotARobot => DemoAuthorizor::NotARobot(Arc::new(NotARobot::new())),
        }
    }

    fn shared(&self) -> SharedAuthorizor {
        match self {
            DemoAuthorizor::Sms(auth) => auth.clone() as SharedAuthorizor,
            DemoAuthorizor::NotARobot(auth) => auth.clone() as SharedAuthorizor,
        }
    }

    fn verify(&self, config: &DemoConfig) {
        match self {
            DemoAuthorizor::Sms(auth) => auth.verify_code(&config.sms_code),
            DemoAuthorizor::NotARobot(auth) => auth.confirm_not_robot(),
        }
    }
}

/// Result of a demo run
#[derive(Debug, Clone, Serialize)]
pub struct DemoOutcome {
    /// Processor that paid the order
    pub processor: String,
    /// Order total
    pub total: f64,
    /// Whether the first, pre-authorization attempt was rejected
    pub rejected_before_authorization: bool,
    /// The order after payment
    pub order: Order,
}

/// Register all three processors, the gated ones sharing `authorizor`
pub fn build_selector(config: &DemoConfig, authorizor: SharedAuthorizor) -> ProcessorSelector {
    ProcessorSelector::new(config.processor.as_str())
        .with_processor(Arc::new(DebitProcessor::new(
            config.security_code.clone(),
            authorizor.clone(),
        )))
        .with_processor(Arc::new(CreditProcessor::new(config.security_code.clone())))
        .with_processor(Arc::new(PaypalProcessor::new(config.email.clone(), authorizor)))
}

/// Run the demo sequence
#[instrument(skip(config), fields(processor = config.processor.as_str()))]
pub fn run(config: &DemoConfig) -> anyhow::Result<DemoOutcome> {
    let mut order = config.load_order()?;
    let total = order.total_price();
    info!(order_id = %order.id, items = order.items().len(), total, "Order created");

    let authorizor = DemoAuthorizor::new(config.authorizor);
    let selector = build_selector(config, authorizor.shared());
    let processor = selector
        .get_or_default(Some(config.processor.as_str()))
        .with_context(|| format!("processor {} not registered", config.processor.as_str()))?;

    let rejected_before_authorization = match processor.pay(&mut order) {
        Err(e) if e.is_authorization_failure() => {
            info!(status = %order.status(), "Payment refused until authorized");
            true
        }
        Err(e) => return Err(e.into()),
        Ok(()) => false,
    };

    authorizor.verify(config);
    processor
        .pay(&mut order)
        .with_context(|| format!("{} payment failed", processor.processor_name()))?;

    Ok(DemoOutcome {
        processor: processor.processor_name().to_string(),
        total,
        rejected_before_authorization,
        order,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ProcessorKind;
    use orderpay_core::OrderStatus;

    #[test]
    fn test_default_run() {
        let outcome = run(&DemoConfig::default()).unwrap();

        assert_eq!(outcome.processor, "paypal");
        assert_eq!(outcome.total, 220.0);
        assert!(outcome.rejected_before_authorization);
        assert_eq!(outcome.order.status(), OrderStatus::Paid);
    }

    #[test]
    fn test_debit_with_sms() {
        let config = DemoConfig {
            processor: ProcessorKind::Debit,
            authorizor: AuthorizorKind::Sms,
            ..DemoConfig::default()
        };
        let outcome = run(&config).unwrap();

        assert_eq!(outcome.processor, "debit");
        assert!(outcome.rejected_before_authorization);
        assert!(outcome.order.is_paid());
    }

    #[test]
    fn test_credit_pays_first_time() {
        let config = DemoConfig {
            processor: ProcessorKind::Credit,
            ..DemoConfig::default()
        };
        let outcome = run(&config).unwrap();

        assert_eq!(outcome.processor, "credit");
        assert!(!outcome.rejected_before_authorization);
        assert!(outcome.order.is_paid());
    }

    #[test]
    fn test_selector_shares_authorizor() {
        let config = DemoConfig::default();
        let authorizor = DemoAuthorizor::new(AuthorizorKind::Sms);
        let selector = build_selector(&config, authorizor.shared());

        assert_eq!(selector.processors(), vec!["credit", "debit", "paypal"]);

        let mut order = crate::config::default_order();
        let debit = selector.get_or_default(Some("debit")).unwrap();
        assert_eq!(debit.processor_name(), "debit");
        assert!(debit.pay(&mut order).is_err());

        authorizor.verify(&config);
        debit.pay(&mut order).unwrap();
        assert!(order.is_paid());
    }

    #[test]
    fn test_outcome_serializes() {
        let outcome = run(&DemoConfig::default()).unwrap();
        let json = serde_json::to_value(&outcome).unwrap();

        assert_eq!(json["total"], 220.0);
        assert_eq!(json["order"]["status"], "paid");
    }
}
