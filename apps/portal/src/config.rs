//! # Configuration
//!
//! Portal configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`ORDERDESK_*`)
//! 2. Defaults (this file)
//!
//! ## Thread Safety
//! Configuration is read-only after initialization, so no mutex needed.

use std::time::Duration;

use tracing::warn;

use orderdesk_gateway::{DEFAULT_SUBMIT_LATENCY, DEFAULT_VERIFY_LATENCY};

/// Portal configuration.
///
/// The latencies feed the simulated gateways: demos keep the defaults so
/// the round trips feel real, tests set them to zero.
#[derive(Debug, Clone)]
pub struct PortalConfig {
    /// Distributor name shown in the demo banner.
    pub distributor_name: String,

    /// Simulated credential-check latency.
    pub login_latency: Duration,

    /// Simulated sales-order submission latency.
    pub submit_latency: Duration,
}

impl Default for PortalConfig {
    fn default() -> Self {
        PortalConfig {
            distributor_name: "Orderdesk Distributing".to_string(),
            login_latency: DEFAULT_VERIFY_LATENCY,
            submit_latency: DEFAULT_SUBMIT_LATENCY,
        }
    }
}

impl PortalConfig {
    /// Creates a PortalConfig from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `ORDERDESK_DISTRIBUTOR_NAME`: Override distributor name
    /// - `ORDERDESK_LOGIN_LATENCY_MS`: Override login latency (milliseconds)
    /// - `ORDERDESK_SUBMIT_LATENCY_MS`: Override submission latency (milliseconds)
    pub fn from_env() -> Self {
        let mut config = PortalConfig::default();

        if let Ok(name) = std::env::var("ORDERDESK_DISTRIBUTOR_NAME") {
            config.distributor_name = name;
        }

        if let Ok(raw) = std::env::var("ORDERDESK_LOGIN_LATENCY_MS") {
            match parse_latency_ms(&raw) {
                Some(latency) => config.login_latency = latency,
                None => warn!(value = %raw, "Ignoring unparsable ORDERDESK_LOGIN_LATENCY_MS"),
            }
        }

        if let Ok(raw) = std::env::var("ORDERDESK_SUBMIT_LATENCY_MS") {
            match parse_latency_ms(&raw) {
                Some(latency) => config.submit_latency = latency,
                None => warn!(value = %raw, "Ignoring unparsable ORDERDESK_SUBMIT_LATENCY_MS"),
            }
        }

        config
    }
}

/// Parses a millisecond count from an env value.
fn parse_latency_ms(value: &str) -> Option<Duration> {
    value.trim().parse::<u64>().ok().map(Duration::from_millis)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_gateway_latencies() {
        let config = PortalConfig::default();
        assert_eq!(config.login_latency, Duration::from_millis(1000));
        assert_eq!(config.submit_latency, Duration::from_millis(1500));
    }

    #[test]
    fn test_parse_latency_ms() {
        assert_eq!(parse_latency_ms("250"), Some(Duration::from_millis(250)));
        assert_eq!(parse_latency_ms(" 0 "), Some(Duration::ZERO));
        assert_eq!(parse_latency_ms("fast"), None);
        assert_eq!(parse_latency_ms("-5"), None);
    }
}
