//! # Pricing Configuration
//!
//! Settings for the `price-cart` tool and anything else that wires up the
//! catalog crate.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     PRICING_DATA_PATH=/srv/pricing/catalog.toml                        │
//! │     PRICING_LOG_FILTER=pricing_core=debug                              │
//! │     PRICING_DEFAULT_USER=user1                                         │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     ~/.config/cart-pricing/pricing.toml (Linux)                        │
//! │     ~/Library/Application Support/com.cart.pricing/pricing.toml (macOS)│
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     built-in sample data, filter "info", no default user               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! # pricing.toml
//! [data]
//! path = "/srv/pricing/catalog.toml"   # omit to use the built-in sample data
//!
//! [logging]
//! filter = "info,pricing_core=debug"
//!
//! [pricing]
//! default_user = "user1"
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use crate::error::{CatalogError, CatalogResult};

/// Environment variable overriding [`DataSettings::path`].
pub const ENV_DATA_PATH: &str = "PRICING_DATA_PATH";

/// Environment variable overriding [`LogSettings::filter`].
pub const ENV_LOG_FILTER: &str = "PRICING_LOG_FILTER";

/// Environment variable overriding [`PricingSettings::default_user`].
pub const ENV_DEFAULT_USER: &str = "PRICING_DEFAULT_USER";

// =============================================================================
// Sections
// =============================================================================

/// Where catalog data comes from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataSettings {
    /// TOML data file. `None` means the built-in sample data.
    #[serde(default)]
    pub path: Option<PathBuf>,
}

/// Log output settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogSettings {
    /// `tracing-subscriber` filter directive. `RUST_LOG` wins when set.
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for LogSettings {
    fn default() -> Self {
        LogSettings {
            filter: default_log_filter(),
        }
    }
}

/// Pricing defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingSettings {
    /// User to price for when none is given on the command line.
    #[serde(default)]
    pub default_user: Option<String>,
}

// =============================================================================
// Main Configuration
// =============================================================================

/// Complete pricing configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingConfig {
    #[serde(default)]
    pub data: DataSettings,

    #[serde(default)]
    pub logging: LogSettings,

    #[serde(default)]
    pub pricing: PricingSettings,
}

impl PricingConfig {
    /// Creates a configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from file and environment.
    ///
    /// ## Arguments
    /// * `config_path` - Optional explicit path to config file
    ///
    /// ## Loading Order
    /// 1. Start with defaults
    /// 2. Load from config file (if exists)
    /// 3. Override with environment variables
    /// 4. Validate
    pub fn load(config_path: Option<PathBuf>) -> CatalogResult<Self> {
        let explicit = config_path.is_some();
        let mut config = Self::default();

        if let Some(path) = config_path.or_else(Self::default_config_path) {
            if path.exists() {
                info!(?path, "Loading pricing config from file");
                config = Self::from_file(&path)?;
            } else if explicit {
                return Err(CatalogError::InvalidConfig(format!(
                    "config file {} does not exist",
                    path.display()
                )));
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Parses a config file without applying overrides.
    pub fn from_file(path: &Path) -> CatalogResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        toml::from_str(&contents).map_err(|e| CatalogError::parse(path.display().to_string(), e))
    }

    /// Validates the configuration.
    pub fn validate(&self) -> CatalogResult<()> {
        if let Err(e) = EnvFilter::try_new(&self.logging.filter) {
            return Err(CatalogError::InvalidConfig(format!(
                "log filter {:?} is invalid: {}",
                self.logging.filter, e
            )));
        }

        if let Some(ref user) = self.pricing.default_user {
            if user.trim().is_empty() {
                return Err(CatalogError::InvalidConfig(
                    "default_user must not be blank".into(),
                ));
            }
        }

        if let Some(ref path) = self.data.path {
            if path.as_os_str().is_empty() {
                return Err(CatalogError::InvalidConfig(
                    "data.path must not be empty".into(),
                ));
            }
        }

        Ok(())
    }

    /// Applies overrides from the process environment.
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Applies overrides from any key lookup.
    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(path) = lookup(ENV_DATA_PATH) {
            debug!(path = %path, "Overriding data path from environment");
            self.data.path = Some(PathBuf::from(path));
        }

        if let Some(filter) = lookup(ENV_LOG_FILTER) {
            self.logging.filter = filter;
        }

        if let Some(user) = lookup(ENV_DEFAULT_USER) {
            debug!(user = %user, "Overriding default user from environment");
            self.pricing.default_user = Some(user);
        }
    }

    /// Returns the platform-specific default config path.
    pub fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "cart", "pricing")
            .map(|dirs| dirs.config_dir().join("pricing.toml"))
    }

    /// The user to price for, preferring an explicit one.
    pub fn effective_user<'a>(&'a self, explicit: Option<&'a str>) -> Option<&'a str> {
        explicit.or(self.pricing.default_user.as_deref())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = PricingConfig::default();
        assert_eq!(config.data.path, None);
        assert_eq!(config.logging.filter, "info");
        assert_eq!(config.pricing.default_user, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation() {
        let mut config = PricingConfig::default();

        config.pricing.default_user = Some("  ".to_string());
        assert!(config.validate().is_err());

        config.pricing.default_user = Some("user1".to_string());
        assert!(config.validate().is_ok());

        config.logging.filter = "pricing_core=notalevel".to_string();
        assert!(config.validate().is_err());

        config.logging.filter = "warn,pricing_core=debug".to_string();
        assert!(config.validate().is_ok());

        config.data.path = Some(PathBuf::new());
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_overrides() {
        let env: HashMap<&str, &str> = [
            (ENV_DATA_PATH, "/tmp/catalog.toml"),
            (ENV_DEFAULT_USER, "vipuser"),
        ]
        .into_iter()
        .collect();

        let mut config = PricingConfig::default();
        config.apply_overrides(|key| env.get(key).map(|v| v.to_string()));

        assert_eq!(config.data.path, Some(PathBuf::from("/tmp/catalog.toml")));
        assert_eq!(config.pricing.default_user.as_deref(), Some("vipuser"));
        assert_eq!(config.logging.filter, "info");
    }

    #[test]
    fn test_effective_user() {
        let mut config = PricingConfig::default();
        assert_eq!(config.effective_user(None), None);

        config.pricing.default_user = Some("user2".to_string());
        assert_eq!(config.effective_user(None), Some("user2"));
        assert_eq!(config.effective_user(Some("user1")), Some("user1"));
    }

    #[test]
    fn test_from_file_partial_sections() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[pricing]\ndefault_user = \"user3\"").unwrap();

        let config = PricingConfig::from_file(file.path()).unwrap();
        assert_eq!(config.pricing.default_user.as_deref(), Some("user3"));
        assert_eq!(config.logging.filter, "info");
        assert_eq!(config.data.path, None);
    }

    #[test]
    fn test_missing_explicit_config_is_an_error() {
        let result = PricingConfig::load(Some(PathBuf::from("/definitely/not/pricing.toml")));
        assert!(matches!(result, Err(CatalogError::InvalidConfig(_))));
    }

    #[test]
    fn test_toml_serialization() {
        let mut config = PricingConfig::default();
        config.pricing.default_user = Some("user1".to_string());

        let toml_str = toml::to_string_pretty(&config).unwrap();
        assert!(toml_str.contains("[logging]"));
        assert!(toml_str.contains("[pricing]"));

        let parsed: PricingConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed, config);
    }
}
