//! # orderpay-demo
//!
//! Illustrative run of the orderpay workflow.
//!
//! This crate provides:
//! - `DemoConfig`, loaded from `ORDERPAY_*` environment variables
//! - `run`, which builds an order, wires an authorizor into the processors
//!   and pays the order once authorized
//!
//! ## Environment
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `ORDERPAY_PROCESSOR` | `paypal` | `debit`, `credit` or `paypal` |
//! | `ORDERPAY_AUTHORIZOR` | `robot` | `sms` or `robot` |
//! | `ORDERPAY_EMAIL` | `test@email.com` | PayPal account |
//! | `ORDERPAY_SECURITY_CODE` | `123` | Card security code |
//! | `ORDERPAY_SMS_CODE` | `465839` | Code sent to the SMS authorizor |
//! | `ORDERPAY_ORDER_FILE` | unset | TOML item list |

pub mod config;
pub mod driver;

pub use config::{AuthorizorKind, DemoConfig, ProcessorKind};
pub use driver::{build_selector, run, DemoOutcome};
