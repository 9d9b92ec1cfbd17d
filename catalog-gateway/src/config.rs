//! Gateway configuration and build information.

use std::{net::SocketAddr, time::Duration};

/// Service version reported by `/health` and `/version`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Release date reported by `/version`.
pub const BUILD_DATE: &str = "2025-11-07";

/// Minimum supported Rust toolchain, reported by `/version`.
pub const RUNTIME_VERSION: &str = env!("CARGO_PKG_RUST_VERSION");

/// Port the service always listens on.
pub const LISTEN_PORT: u16 = 8080;

/// How long `/api/slow` waits before answering.
pub const DEFAULT_SLOW_DELAY: Duration = Duration::from_secs(3);

/// Runtime settings for the gateway.
///
/// The service exposes no configuration surface; the binary always uses
/// [`GatewayConfig::default`]. Tests build their own to shorten the slow
/// endpoint's delay.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct GatewayConfig {
    /// Address the HTTP listener binds to.
    pub listen_addr: SocketAddr,
    /// Fixed delay applied by `/api/slow`.
    pub slow_delay: Duration,
}

impl GatewayConfig {
    /// Default settings with a different slow-endpoint delay.
    #[must_use]
    pub fn with_slow_delay(slow_delay: Duration) -> Self {
        Self { slow_delay, ..Self::default() }
    }
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            listen_addr: SocketAddr::from(([0, 0, 0, 0], LISTEN_PORT)),
            slow_delay: DEFAULT_SLOW_DELAY,
        }
    }
}
