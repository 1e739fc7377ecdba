//! # Store Configuration
//!
//! Latency profile and id strategy for a [`Store`](crate::Store).
//!
//! ## Simulated Latency
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Operation     │ Collections                        │ Delay            │
//! │────────────────┼────────────────────────────────────┼──────────────────│
//! │  List          │ farmers, inventory, harvests,      │ 500 ms           │
//! │                │ sales, customers, listings         │                  │
//! │  ListCatalog   │ crops, sensors                     │ 400 ms           │
//! │  ListAlerts    │ alerts                             │ 300 ms           │
//! │  Get           │ any get_by_id                      │ 300 ms           │
//! │  Create        │ farmers, inventory, harvests       │ 800 ms           │
//! │  Update        │ farmers, inventory, harvests       │ 600 ms           │
//! │  Delete        │ farmers                            │ 400 ms           │
//! │  Dismiss       │ alerts                             │ 200 ms           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Latency never changes results. It exists so the loading states of the
//! fetch layer can be observed.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::ids::IdStrategy;
use agri_core::CoreError;

// =============================================================================
// Operations
// =============================================================================

/// Kinds of store call that carry their own artificial delay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    List,
    ListCatalog,
    ListAlerts,
    Get,
    Create,
    Update,
    Delete,
    Dismiss,
}

impl Operation {
    pub const ALL: [Operation; 8] = [
        Operation::List,
        Operation::ListCatalog,
        Operation::ListAlerts,
        Operation::Get,
        Operation::Create,
        Operation::Update,
        Operation::Delete,
        Operation::Dismiss,
    ];
}

/// Per-operation artificial delays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LatencyProfile {
    list: Duration,
    list_catalog: Duration,
    list_alerts: Duration,
    get: Duration,
    create: Duration,
    update: Duration,
    delete: Duration,
    dismiss: Duration,
}

impl LatencyProfile {
    /// The delays of the hosted dashboard's mock backend.
    pub fn simulated() -> Self {
        LatencyProfile {
            list: Duration::from_millis(500),
            list_catalog: Duration::from_millis(400),
            list_alerts: Duration::from_millis(300),
            get: Duration::from_millis(300),
            create: Duration::from_millis(800),
            update: Duration::from_millis(600),
            delete: Duration::from_millis(400),
            dismiss: Duration::from_millis(200),
        }
    }

    /// No delay at all. For tests and batch tools.
    pub fn instant() -> Self {
        LatencyProfile {
            list: Duration::ZERO,
            list_catalog: Duration::ZERO,
            list_alerts: Duration::ZERO,
            get: Duration::ZERO,
            create: Duration::ZERO,
            update: Duration::ZERO,
            delete: Duration::ZERO,
            dismiss: Duration::ZERO,
        }
    }

    /// Multiplies every delay by `factor`. Negative or non-finite factors
    /// are treated as zero; products too large for a `Duration` saturate
    /// at `Duration::MAX`.
    pub fn scaled(&self, factor: f64) -> Self {
        let factor = if factor.is_finite() && factor > 0.0 {
            factor
        } else {
            0.0
        };
        let scale = |d: Duration| {
            Duration::try_from_secs_f64(d.as_secs_f64() * factor).unwrap_or(Duration::MAX)
        };

        LatencyProfile {
            list: scale(self.list),
            list_catalog: scale(self.list_catalog),
            list_alerts: scale(self.list_alerts),
            get: scale(self.get),
            create: scale(self.create),
            update: scale(self.update),
            delete: scale(self.delete),
            dismiss: scale(self.dismiss),
        }
    }

    /// Overrides the delay of one operation.
    pub fn with(mut self, op: Operation, delay: Duration) -> Self {
        *self.slot(op) = delay;
        self
    }

    /// Delay applied before `op` touches the collections.
    pub fn delay(&self, op: Operation) -> Duration {
        match op {
            Operation::List => self.list,
            Operation::ListCatalog => self.list_catalog,
            Operation::ListAlerts => self.list_alerts,
            Operation::Get => self.get,
            Operation::Create => self.create,
            Operation::Update => self.update,
            Operation::Delete => self.delete,
            Operation::Dismiss => self.dismiss,
        }
    }

    fn slot(&mut self, op: Operation) -> &mut Duration {
        match op {
            Operation::List => &mut self.list,
            Operation::ListCatalog => &mut self.list_catalog,
            Operation::ListAlerts => &mut self.list_alerts,
            Operation::Get => &mut self.get,
            Operation::Create => &mut self.create,
            Operation::Update => &mut self.update,
            Operation::Delete => &mut self.delete,
            Operation::Dismiss => &mut self.dismiss,
        }
    }
}

impl Default for LatencyProfile {
    fn default() -> Self {
        LatencyProfile::simulated()
    }
}

// =============================================================================
// Configuration
// =============================================================================

/// Named latency presets, as written in config files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LatencyMode {
    #[default]
    Simulated,
    Instant,
}

impl std::str::FromStr for LatencyMode {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "simulated" => Ok(LatencyMode::Simulated),
            "instant" => Ok(LatencyMode::Instant),
            other => Err(CoreError::unknown("latency mode", other)),
        }
    }
}

/// Store configuration.
///
/// ## Example
/// ```rust
/// use agri_store::{IdStrategy, LatencyMode, StoreConfig};
///
/// let config = StoreConfig::default()
///     .latency_scale(0.1)
///     .ids(IdStrategy::Uuid);
/// assert_eq!(config.latency, LatencyMode::Simulated);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Latency preset.
    /// Default: simulated
    pub latency: LatencyMode,

    /// Multiplier applied to the preset.
    /// Default: 1.0
    pub latency_scale: f64,

    /// How created records get their ids.
    /// Default: sequential
    pub ids: IdStrategy,
}

impl Default for StoreConfig {
    fn default() -> Self {
        StoreConfig {
            latency: LatencyMode::Simulated,
            latency_scale: 1.0,
            ids: IdStrategy::Sequential,
        }
    }
}

impl StoreConfig {
    /// Creates a configuration with the simulated delays.
    pub fn new() -> Self {
        StoreConfig::default()
    }

    /// Creates a zero-latency configuration (for testing).
    ///
    /// ## Usage
    /// ```rust
    /// use agri_store::{SeedData, Store, StoreConfig};
    ///
    /// let store = Store::new(StoreConfig::instant(), SeedData::sample());
    /// ```
    pub fn instant() -> Self {
        StoreConfig {
            latency: LatencyMode::Instant,
            ..StoreConfig::default()
        }
    }

    /// Sets the latency preset.
    pub fn latency(mut self, mode: LatencyMode) -> Self {
        self.latency = mode;
        self
    }

    /// Sets the latency multiplier.
    pub fn latency_scale(mut self, scale: f64) -> Self {
        self.latency_scale = scale;
        self
    }

    /// Sets the id strategy.
    pub fn ids(mut self, ids: IdStrategy) -> Self {
        self.ids = ids;
        self
    }

    /// Resolves the preset and scale into concrete delays.
    pub fn latency_profile(&self) -> LatencyProfile {
        match self.latency {
            LatencyMode::Simulated => LatencyProfile::simulated().scaled(self.latency_scale),
            LatencyMode::Instant => LatencyProfile::instant(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simulated_delays() {
        let profile = LatencyProfile::simulated();
        assert_eq!(profile.delay(Operation::List), Duration::from_millis(500));
        assert_eq!(profile.delay(Operation::ListCatalog), Duration::from_millis(400));
        assert_eq!(profile.delay(Operation::ListAlerts), Duration::from_millis(300));
        assert_eq!(profile.delay(Operation::Create), Duration::from_millis(800));
        assert_eq!(profile.delay(Operation::Dismiss), Duration::from_millis(200));
    }

    #[test]
    fn test_huge_scale_saturates() {
        let profile = StoreConfig::default().latency_scale(1e20).latency_profile();
        assert_eq!(profile.delay(Operation::List), Duration::MAX);
        assert_eq!(profile.delay(Operation::Dismiss), Duration::MAX);
    }

    #[test]
    fn test_instant_is_zero() {
        let profile = LatencyProfile::instant();
        for op in Operation::ALL {
            assert_eq!(profile.delay(op), Duration::ZERO);
        }
    }

    #[test]
    fn test_scaled() {
        let half = LatencyProfile::simulated().scaled(0.5);
        assert_eq!(half.delay(Operation::List), Duration::from_millis(250));

        let none = LatencyProfile::simulated().scaled(-1.0);
        assert_eq!(none, LatencyProfile::instant());
    }

    #[test]
    fn test_with_override() {
        let profile = LatencyProfile::instant().with(Operation::Update, Duration::from_secs(1));
        assert_eq!(profile.delay(Operation::Update), Duration::from_secs(1));
        assert_eq!(profile.delay(Operation::Create), Duration::ZERO);
    }

    #[test]
    fn test_config_builder() {
        let config = StoreConfig::new()
            .latency(LatencyMode::Simulated)
            .latency_scale(2.0)
            .ids(IdStrategy::Uuid);

        assert_eq!(config.ids, IdStrategy::Uuid);
        assert_eq!(
            config.latency_profile().delay(Operation::List),
            Duration::from_secs(1)
        );
        assert_eq!(StoreConfig::instant().latency_profile(), LatencyProfile::instant());
    }
}
