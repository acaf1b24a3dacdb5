//! # Logging Setup
//!
//! Installs the global `tracing` subscriber for binaries.
//!
//! ## Log Levels
//! - `RUST_LOG=debug` - Show lookups and discount decisions
//! - `RUST_LOG=pricing_core=trace` - Trace the engine only
//! - Default: the configured filter (`info` unless changed)
//!
//! Output goes to stderr so stdout stays clean for `--json`.
//!
//! ## Startup Order
//! ```text
//! init("info")            ← before config, so config loading is logged
//!      │
//!      ▼
//! PricingConfig::load
//!      │
//!      ▼
//! handle.set_fallback(&config.logging.filter)
//! ```

use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, reload, EnvFilter, Registry};

/// Builds the filter: `RUST_LOG` if set and valid, else `fallback`.
pub fn filter(fallback: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(fallback))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Swaps the installed filter once the configuration is known.
#[derive(Debug, Clone)]
pub struct LogHandle {
    inner: reload::Handle<EnvFilter, Registry>,
}

impl LogHandle {
    /// Replaces the fallback filter. `RUST_LOG` still wins when set.
    pub fn set_fallback(&self, fallback: &str) -> bool {
        self.inner.reload(filter(fallback)).is_ok()
    }
}

/// Installs the subscriber. Returns `None` if one was already installed.
pub fn init(fallback: &str) -> Option<LogHandle> {
    let (filter_layer, inner) = reload::Layer::new(filter(fallback));

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(
            fmt::layer()
                .with_target(true)
                .with_writer(std::io::stderr),
        )
        .try_init()
        .ok()
        .map(|()| LogHandle { inner })
}
