//! # orderpay-core
//!
//! Core types and traits for the orderpay workflow.
//!
//! This crate provides:
//! - `Order` and `LineItem` for building an order and its total
//! - `Authorizor` with `SmsAuth` and `NotARobot` verification
//! - `PaymentProcessor` with debit, credit and PayPal processors
//! - `ProcessorSelector` for picking a processor by name
//! - `PaymentError` for typed error handling
//!
//! ## Example
//!
//! ```rust
//! use orderpay_core::{NotARobot, Order, PaymentProcessor, PaypalProcessor};
//! use std::sync::Arc;
//!
//! let mut order = Order::new();
//! order.add_item("Keyboard", 1, 50.0);
//! order.add_item("SSD", 1, 150.0);
//! order.add_item("USB Cable", 2, 10.0);
//! assert_eq!(order.total_price(), 220.0);
//!
//! let authorizor = Arc::new(NotARobot::new());
//! let paypal = PaypalProcessor::new("test@email.com", authorizor.clone());
//!
//! assert!(paypal.pay(&mut order).is_err());
//!
//! authorizor.confirm_not_robot();
//! paypal.pay(&mut order).unwrap();
//! assert!(order.is_paid());
//! ```

pub mod auth;
pub mod error;
pub mod order;
pub mod processor;

// Re-exports for convenience
pub use auth::{Authorizor, NotARobot, SharedAuthorizor, SmsAuth};
pub use error::{PaymentError, PaymentResult};
pub use order::{LineItem, Order, OrderStatus};
pub use processor::{
    BoxedPaymentProcessor, CreditProcessor, DebitProcessor, PaymentProcessor, PaypalProcessor,
    ProcessorSelector,
};
