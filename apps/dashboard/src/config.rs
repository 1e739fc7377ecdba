//! # Dashboard Configuration
//!
//! Configuration management for the dashboard binary.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     AGRI_LATENCY=instant                                               │
//! │     AGRI_LATENCY_SCALE=0.5                                             │
//! │     AGRI_IDS=uuid                                                      │
//! │     AGRI_PAGE_SIZE=25                                                  │
//! │     AGRI_LOG=debug                                                     │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     ~/.config/agri-dashboard/dashboard.toml (Linux)                    │
//! │     ~/Library/Application Support/com.agri.dashboard/dashboard.toml    │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     simulated latency, sequential ids, 10 rows per page               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! # dashboard.toml
//! [store]
//! latency = "simulated"   # simulated | instant
//! latency_scale = 1.0
//! ids = "sequential"      # sequential | uuid
//!
//! [view]
//! page_size = 10
//! market_page_size = 12
//!
//! [logging]
//! filter = "info,agri=debug"
//! ```

use std::num::NonZeroUsize;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use agri_store::StoreConfig;

use crate::error::{AppError, AppResult};

/// Filter used when neither the environment nor the file sets one.
pub const DEFAULT_LOG_FILTER: &str = "info,agri=debug";

/// Largest accepted page size.
pub const MAX_PAGE_SIZE: usize = 100;

/// Largest accepted latency multiplier.
pub const MAX_LATENCY_SCALE: f64 = 1000.0;

// =============================================================================
// Sections
// =============================================================================

/// Management list settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewSettings {
    /// Rows per page for the farmer, inventory and harvest lists.
    /// Default: 10
    pub page_size: usize,

    /// Cards per page in the marketplace.
    /// Default: 12
    pub market_page_size: usize,
}

impl Default for ViewSettings {
    fn default() -> Self {
        ViewSettings {
            page_size: 10,
            market_page_size: 12,
        }
    }
}

impl ViewSettings {
    /// Page size as the pipeline wants it.
    pub fn page_size(&self) -> NonZeroUsize {
        NonZeroUsize::new(self.page_size).unwrap_or(NonZeroUsize::MIN)
    }

    pub fn market_page_size(&self) -> NonZeroUsize {
        NonZeroUsize::new(self.market_page_size).unwrap_or(NonZeroUsize::MIN)
    }
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// `tracing_subscriber::EnvFilter` directives.
    pub filter: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        LoggingSettings {
            filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

// =============================================================================
// Dashboard Config
// =============================================================================

/// Complete dashboard configuration.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Latency and id settings handed to the store.
    pub store: StoreConfig,

    /// Management list settings.
    pub view: ViewSettings,

    /// Logging settings.
    pub logging: LoggingSettings,
}

impl DashboardConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (dashboard.toml)
    /// 3. Environment variables
    ///
    /// An explicit `config_path` that does not exist is an error. The
    /// default path is optional.
    pub fn load(config_path: Option<PathBuf>) -> AppResult<Self> {
        let mut config = match config_path {
            Some(path) => {
                info!(?path, "Loading dashboard config from file");
                Self::from_file(&path)?
            }
            None => match Self::default_config_path() {
                Some(path) if path.exists() => {
                    info!(?path, "Loading dashboard config from file");
                    Self::from_file(&path)?
                }
                path => {
                    debug!(?path, "Config file not found, using defaults");
                    Self::default()
                }
            },
        };

        // Override with environment variables
        config.apply_env_overrides();

        config.validate()?;

        Ok(config)
    }

    /// Parses a TOML file. Missing sections and keys keep their defaults.
    pub fn from_file(path: &std::path::Path) -> AppResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }

    /// Saves configuration to file, creating the parent directory.
    pub fn save(&self, config_path: Option<PathBuf>) -> AppResult<PathBuf> {
        let path = config_path
            .or_else(Self::default_config_path)
            .ok_or_else(|| AppError::config("no config path available"))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)?;
        std::fs::write(&path, contents)?;

        info!(?path, "Dashboard config saved");
        Ok(path)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> AppResult<()> {
        let scale = self.store.latency_scale;
        if !(0.0..=MAX_LATENCY_SCALE).contains(&scale) {
            return Err(AppError::config(format!(
                "latency_scale must be between 0 and {MAX_LATENCY_SCALE}, got {scale}"
            )));
        }

        for (key, value) in [
            ("page_size", self.view.page_size),
            ("market_page_size", self.view.market_page_size),
        ] {
            if value == 0 || value > MAX_PAGE_SIZE {
                return Err(AppError::config(format!(
                    "{key} must be between 1 and {MAX_PAGE_SIZE}, got {value}"
                )));
            }
        }

        Ok(())
    }

    /// Applies `AGRI_*` environment variable overrides.
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Applies overrides read through `var`. Unparseable values are logged
    /// and ignored.
    fn apply_overrides<F>(&mut self, var: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(mode) = var("AGRI_LATENCY") {
            match mode.parse() {
                Ok(parsed) => {
                    debug!(mode = %mode, "Overriding latency mode from environment");
                    self.store.latency = parsed;
                }
                Err(_) => warn!(mode = %mode, "Unknown latency mode in environment"),
            }
        }

        if let Some(scale) = var("AGRI_LATENCY_SCALE") {
            match scale.trim().parse::<f64>() {
                Ok(parsed) => {
                    debug!(scale = parsed, "Overriding latency scale from environment");
                    self.store.latency_scale = parsed;
                }
                Err(_) => warn!(scale = %scale, "Invalid latency scale in environment"),
            }
        }

        if let Some(ids) = var("AGRI_IDS") {
            match ids.parse() {
                Ok(parsed) => {
                    debug!(ids = %ids, "Overriding id strategy from environment");
                    self.store.ids = parsed;
                }
                Err(_) => warn!(ids = %ids, "Unknown id strategy in environment"),
            }
        }

        if let Some(size) = var("AGRI_PAGE_SIZE") {
            match size.trim().parse::<usize>() {
                Ok(parsed) => {
                    debug!(page_size = parsed, "Overriding page size from environment");
                    self.view.page_size = parsed;
                }
                Err(_) => warn!(page_size = %size, "Invalid page size in environment"),
            }
        }

        if let Some(filter) = var("AGRI_LOG") {
            self.logging.filter = filter;
        }
    }

    /// Returns the default config file path.
    pub fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "agri", "dashboard")
            .map(|dirs| dirs.config_dir().join("dashboard.toml"))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use agri_store::{IdStrategy, LatencyMode};
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_default_config() {
        let config = DashboardConfig::default();
        assert_eq!(config.store.latency, LatencyMode::Simulated);
        assert_eq!(config.store.ids, IdStrategy::Sequential);
        assert_eq!(config.view.page_size, 10);
        assert_eq!(config.view.market_page_size, 12);
        assert_eq!(config.logging.filter, DEFAULT_LOG_FILTER);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config: DashboardConfig = toml::from_str(
            r#"
            [store]
            latency = "instant"

            [view]
            page_size = 25
            "#,
        )
        .unwrap();

        assert_eq!(config.store.latency, LatencyMode::Instant);
        assert_eq!(config.store.latency_scale, 1.0);
        assert_eq!(config.view.page_size, 25);
        assert_eq!(config.view.market_page_size, 12);
        assert_eq!(config.logging.filter, DEFAULT_LOG_FILTER);
    }

    #[test]
    fn test_unknown_latency_in_file_fails() {
        let parsed: Result<DashboardConfig, _> = toml::from_str("[store]\nlatency = \"slow\"\n");
        assert!(parsed.is_err());
    }

    #[test]
    fn test_env_overrides() {
        let vars = env(&[
            ("AGRI_LATENCY", "instant"),
            ("AGRI_LATENCY_SCALE", "0.25"),
            ("AGRI_IDS", "uuid"),
            ("AGRI_PAGE_SIZE", "5"),
            ("AGRI_LOG", "warn"),
        ]);
        let mut config = DashboardConfig::default();
        config.apply_overrides(|key| vars.get(key).cloned());

        assert_eq!(config.store.latency, LatencyMode::Instant);
        assert_eq!(config.store.latency_scale, 0.25);
        assert_eq!(config.store.ids, IdStrategy::Uuid);
        assert_eq!(config.view.page_size, 5);
        assert_eq!(config.logging.filter, "warn");
    }

    #[test]
    fn test_bad_env_values_are_ignored() {
        let vars = env(&[
            ("AGRI_LATENCY", "glacial"),
            ("AGRI_LATENCY_SCALE", "fast"),
            ("AGRI_PAGE_SIZE", "-3"),
        ]);
        let mut config = DashboardConfig::default();
        config.apply_overrides(|key| vars.get(key).cloned());

        assert_eq!(config, DashboardConfig::default());
    }

    #[test]
    fn test_config_validation() {
        let mut config = DashboardConfig::default();

        config.store.latency_scale = -1.0;
        assert!(matches!(config.validate(), Err(AppError::Config(_))));

        config.store.latency_scale = f64::NAN;
        assert!(config.validate().is_err());

        config.store.latency_scale = 1e20;
        assert!(matches!(config.validate(), Err(AppError::Config(_))));

        config.store.latency_scale = f64::INFINITY;
        assert!(config.validate().is_err());

        config.store.latency_scale = MAX_LATENCY_SCALE;
        assert!(config.validate().is_ok());

        config.store.latency_scale = 0.0;
        assert!(config.validate().is_ok());

        config.view.page_size = 0;
        assert!(config.validate().is_err());

        config.view.page_size = 100;
        config.view.market_page_size = 101;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_toml_serialization() {
        let config = DashboardConfig::default();
        let toml_str = toml::to_string_pretty(&config).unwrap();
        assert!(toml_str.contains("[store]"));
        assert!(toml_str.contains("[view]"));
        assert!(toml_str.contains("latency = \"simulated\""));

        let back: DashboardConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn test_save_then_load_from_file() {
        let path = std::env::temp_dir()
            .join(format!("agri-dashboard-{}", std::process::id()))
            .join("dashboard.toml");

        let mut config = DashboardConfig::default();
        config.view.market_page_size = 6;
        let written = config.save(Some(path.clone())).unwrap();
        assert_eq!(written, path);

        let loaded = DashboardConfig::from_file(&path).unwrap();
        assert_eq!(loaded.view.market_page_size, 6);

        let _ = std::fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let path = std::env::temp_dir().join("agri-dashboard-missing/none.toml");
        assert!(matches!(
            DashboardConfig::load(Some(path)),
            Err(AppError::Io(_))
        ));
    }
}
