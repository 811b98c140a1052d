//! # Demo Configuration
//!
//! Settings for the illustrative run, loaded from environment variables
//! (and a `.env` file if present).

use orderpay_core::{Order, PaymentError, PaymentResult};
use std::path::PathBuf;

/// Which payment processor pays the order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessorKind {
    Debit,
    Credit,
    Paypal,
}

impl ProcessorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProcessorKind::Debit => "debit",
            ProcessorKind::Credit => "credit",
            ProcessorKind::Paypal => "paypal",
        }
    }
}

impl std::str::FromStr for ProcessorKind {
    type Err = PaymentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "debit" => Ok(ProcessorKind::Debit),
            "credit" => Ok(ProcessorKind::Credit),
            "paypal" => Ok(ProcessorKind::Paypal),
            other => Err(PaymentError::Configuration(format!(
                "unknown processor: {other} (expected debit, credit or paypal)"
            ))),
        }
    }
}

/// Which authorizor gates the debit and PayPal processors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthorizorKind {
    Sms,
    NotARobot,
}

impl std::str::FromStr for AuthorizorKind {
    type Err = PaymentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sms" => Ok(AuthorizorKind::Sms),
            "robot" | "not_a_robot" => Ok(AuthorizorKind::NotARobot),
            other => Err(PaymentError::Configuration(format!(
                "unknown authorizor: {other} (expected sms or robot)"
            ))),
        }
    }
}

/// Demo configuration
#[derive(Debug, Clone)]
pub struct DemoConfig {
    /// Processor used for the payment
    pub processor: ProcessorKind,
    /// Authorizor wired into gated processors
    pub authorizor: AuthorizorKind,
    /// PayPal account email
    pub email: String,
    /// Card security code for debit and credit
    pub security_code: String,
    /// Code submitted to the SMS authorizor
    pub sms_code: String,
    /// Optional TOML item list replacing the default items
    pub order_file: Option<PathBuf>,
}

impl DemoConfig {
    /// Load from environment variables.
    ///
    /// Recognised variables:
    /// - `ORDERPAY_PROCESSOR` (`debit`, `credit`, `paypal`)
    /// - `ORDERPAY_AUTHORIZOR` (`sms`, `robot`)
    /// - `ORDERPAY_EMAIL`
    /// - `ORDERPAY_SECURITY_CODE`
    /// - `ORDERPAY_SMS_CODE`
    /// - `ORDERPAY_ORDER_FILE`
    pub fn from_env() -> PaymentResult<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup, falling back to defaults
    pub fn from_lookup<F>(lookup: F) -> PaymentResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let processor = match lookup("ORDERPAY_PROCESSOR") {
            Some(value) => value.parse()?,
            None => defaults.processor,
        };
        let authorizor = match lookup("ORDERPAY_AUTHORIZOR") {
            Some(value) => value.parse()?,
            None => defaults.authorizor,
        };

        Ok(Self {
            processor,
            authorizor,
            email: lookup("ORDERPAY_EMAIL").unwrap_or(defaults.email),
            security_code: lookup("ORDERPAY_SECURITY_CODE").unwrap_or(defaults.security_code),
            sms_code: lookup("ORDERPAY_SMS_CODE").unwrap_or(defaults.sms_code),
            order_file: lookup("ORDERPAY_ORDER_FILE").map(PathBuf::from),
        })
    }

    /// Build the order to pay: the configured item file, or the default items
    pub fn load_order(&self) -> anyhow::Result<Order> {
        match &self.order_file {
            Some(path) => {
                let content = std::fs::read_to_string(path)
                    .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", path.display(), e))?;
                let order = Order::from_toml(&content)
                    .map_err(|e| anyhow::anyhow!("Failed to parse {}: {}", path.display(), e))?;
                tracing::info!("Loaded {} items from {}", order.items().len(), path.display());
                Ok(order)
            }
            None => Ok(default_order()),
        }
    }
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            processor: ProcessorKind::Paypal,
            authorizor: AuthorizorKind::NotARobot,
            email: "test@email.com".to_string(),
            security_code: "123".to_string(),
            sms_code: "465839".to_string(),
            order_file: None,
        }
    }
}

/// Keyboard, SSD and two USB cables
pub fn default_order() -> Order {
    let mut order = Order::new();
    order.add_item("Keyboard", 1, 50.0);
    order.add_item("SSD", 1, 150.0);
    order.add_item("USB Cable", 2, 10.0);
    order
}
