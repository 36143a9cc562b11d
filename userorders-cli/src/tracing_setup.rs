//! Tracing setup for the userorders CLI
//!
//! Usage:
//!   userorders --debug serve ...            # Debug logging to console
//!   RUST_LOG=userorders_server=debug ...    # Fine-grained log control
//!
//! Request/response lines come from tower-http's `TraceLayer`; raise
//! `tower_http=debug` to see them.

use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

/// Tracing configuration options
#[derive(Debug, Clone, Default)]
pub struct TracingConfig {
    /// Enable debug logging (sets RUST_LOG=debug if not already set)
    pub debug: bool,
}

impl TracingConfig {
    fn default_directive(&self) -> &'static str {
        if self.debug {
            "debug"
        } else {
            "info,tower_http=info"
        }
    }
}

/// Initialize console tracing; `RUST_LOG` wins over the `--debug` default.
pub fn init(config: &TracingConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.default_directive()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(config.debug) // Show targets in debug mode
        .compact()
        .try_init()
        .map_err(|err| anyhow!(err))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_flag_selects_directive() {
        assert_eq!(TracingConfig { debug: true }.default_directive(), "debug");
        assert!(TracingConfig::default().default_directive().starts_with("info"));
    }
}
