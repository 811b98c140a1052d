//! # orderpay
//!
//! Builds an order, pays it with the configured processor and prints the
//! result.
//!
//! ## Usage
//!
//! ```bash
//! # Optional overrides
//! export ORDERPAY_PROCESSOR=debit
//! export ORDERPAY_AUTHORIZOR=sms
//!
//! # Run the demo
//! orderpay
//! ```

use orderpay_demo::{run, DemoConfig};
use tracing::{info, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(
            EnvFilter::builder()
                .with_default_directive(Level::INFO.into())
                .from_env_lossy(),
        )
        .init();

    let config = DemoConfig::from_env()?;
    info!(
        "Processor: {}, authorizor: {:?}",
        config.processor.as_str(),
        config.authorizor
    );

    let outcome = run(&config)?;

    println!("{}", outcome.total);
    println!("{}", serde_json::to_string_pretty(&outcome.order)?);

    Ok(())
}
