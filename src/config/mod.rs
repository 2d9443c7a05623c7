use serde::Deserialize;
use std::env;
use std::str::FromStr;
use std::time::Duration;
use validator::Validate;

use crate::error::{ConfigError, SeatingError};
use crate::seating::policy::{
    DEFAULT_GRID_RESERVATION_PROBABILITY, DEFAULT_OCCUPANCY_PROBABILITY,
    DEFAULT_PLACEHOLDER_HOLDER, DEFAULT_RESERVATION_PROBABILITY,
};
use crate::seating::{ConsistentPolicy, RandomPolicy, SeatLayout, SeatPolicy};

// Top-level configuration, one section per concern
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub app: AppConfig,
    pub seating: SeatingConfig,
    pub sessions: SessionConfig,
    pub features: FeatureFlags,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub environment: String,
    pub rust_log: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutKind {
    /// The sanctuary with its four sections.
    Synagogue,
    /// A plain rows x seats rectangle.
    Grid,
}

impl FromStr for LayoutKind {
    type Err = ();

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.to_ascii_lowercase().as_str() {
            "synagogue" => Ok(Self::Synagogue),
            "grid" => Ok(Self::Grid),
            _ => Err(()),
        }
    }
}

impl LayoutKind {
    pub fn default_reservation_probability(self) -> f64 {
        match self {
            Self::Synagogue => DEFAULT_RESERVATION_PROBABILITY,
            Self::Grid => DEFAULT_GRID_RESERVATION_PROBABILITY,
        }
    }
}

// How fresh seat grids are shaped and seeded
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SeatingConfig {
    pub layout: LayoutKind,
    #[validate(range(min = 1, max = 200))]
    pub grid_rows: u32,
    #[validate(range(min = 1, max = 200))]
    pub grid_seats_per_row: u32,
    #[validate(range(min = 0.0, max = 1.0))]
    pub occupancy_probability: f64,
    #[validate(range(min = 0.0, max = 1.0))]
    pub reservation_probability: f64,
    #[validate(length(min = 1))]
    pub placeholder_holder: String,
    /// Holder name used when a visitor reserves without giving one.
    #[validate(length(min = 1, max = 64))]
    pub default_holder: String,
    /// Mark generated reservations as occupied too.
    pub consistent_generation: bool,
}

impl SeatingConfig {
    pub fn layout(&self) -> SeatLayout {
        match self.layout {
            LayoutKind::Synagogue => SeatLayout::synagogue(),
            LayoutKind::Grid => SeatLayout::grid(self.grid_rows, self.grid_seats_per_row),
        }
    }

    pub fn policy(&self) -> Result<Box<dyn SeatPolicy + Send>, SeatingError> {
        let random = RandomPolicy::new(
            self.occupancy_probability,
            self.reservation_probability,
            self.placeholder_holder.clone(),
        )?;
        if self.consistent_generation {
            Ok(Box::new(ConsistentPolicy::new(random)))
        } else {
            Ok(Box::new(random))
        }
    }
}

impl Default for SeatingConfig {
    fn default() -> Self {
        Self {
            layout: LayoutKind::Synagogue,
            grid_rows: 8,
            grid_seats_per_row: 6,
            occupancy_probability: DEFAULT_OCCUPANCY_PROBABILITY,
            reservation_probability: DEFAULT_RESERVATION_PROBABILITY,
            placeholder_holder: DEFAULT_PLACEHOLDER_HOLDER.to_string(),
            default_holder: "אתה".to_string(),
            consistent_generation: false,
        }
    }
}

// Idle seating sessions are dropped after `ttl`
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SessionConfig {
    #[validate(range(min = 1))]
    pub ttl_seconds: u64,
    #[validate(range(min = 1))]
    pub cleanup_interval_seconds: u64,
}

impl SessionConfig {
    pub fn ttl(&self) -> Duration {
        Duration::from_secs(self.ttl_seconds)
    }

    pub fn cleanup_interval(&self) -> Duration {
        Duration::from_secs(self.cleanup_interval_seconds)
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self { ttl_seconds: 1800, cleanup_interval_seconds: 300 }
    }
}

// Feature flags for the optional portal sections
#[derive(Debug, Clone, Deserialize)]
pub struct FeatureFlags {
    pub enable_classes: bool,
    pub enable_events: bool,
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self { enable_classes: true, enable_events: true }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            app: AppConfig {
                host: "0.0.0.0".to_string(),
                port: 8000,
                environment: "development".to_string(),
                rust_log: default_rust_log(),
            },
            seating: SeatingConfig::default(),
            sessions: SessionConfig::default(),
            features: FeatureFlags::default(),
        }
    }
}

fn default_rust_log() -> String {
    "synagogue_portal=debug,tower_http=debug".to_string()
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Reads every setting through `lookup`, falling back to the defaults
    /// for anything unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Config::default();
        let layout = parse(&lookup, "SEATING_LAYOUT", defaults.seating.layout)?;
        let config = Config {
            app: AppConfig {
                host: lookup("HOST").unwrap_or(defaults.app.host),
                port: parse(&lookup, "PORT", defaults.app.port)?,
                environment: lookup("ENVIRONMENT").unwrap_or(defaults.app.environment),
                rust_log: lookup("RUST_LOG").unwrap_or(defaults.app.rust_log),
            },
            seating: SeatingConfig {
                layout,
                grid_rows: parse(&lookup, "SEATING_ROWS", defaults.seating.grid_rows)?,
                grid_seats_per_row: parse(
                    &lookup,
                    "SEATING_SEATS_PER_ROW",
                    defaults.seating.grid_seats_per_row,
                )?,
                occupancy_probability: parse(
                    &lookup,
                    "SEATING_OCCUPANCY_PROBABILITY",
                    defaults.seating.occupancy_probability,
                )?,
                reservation_probability: parse(
                    &lookup,
                    "SEATING_RESERVATION_PROBABILITY",
                    layout.default_reservation_probability(),
                )?,
                placeholder_holder: lookup("SEATING_PLACEHOLDER_HOLDER")
                    .unwrap_or(defaults.seating.placeholder_holder),
                default_holder: lookup("SEATING_DEFAULT_HOLDER")
                    .unwrap_or(defaults.seating.default_holder),
                consistent_generation: parse(
                    &lookup,
                    "SEATING_CONSISTENT_GENERATION",
                    defaults.seating.consistent_generation,
                )?,
            },
            sessions: SessionConfig {
                ttl_seconds: parse(&lookup, "SESSION_TTL_SECONDS", defaults.sessions.ttl_seconds)?,
                cleanup_interval_seconds: parse(
                    &lookup,
                    "SESSION_CLEANUP_INTERVAL_SECONDS",
                    defaults.sessions.cleanup_interval_seconds,
                )?,
            },
            features: FeatureFlags {
                enable_classes: parse(&lookup, "ENABLE_CLASSES", defaults.features.enable_classes)?,
                enable_events: parse(&lookup, "ENABLE_EVENTS", defaults.features.enable_events)?,
            },
        };

        config.seating.validate()?;
        config.sessions.validate()?;
        config.seating.layout().validate()?;
        Ok(config)
    }
}

fn parse<F, T>(lookup: &F, name: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(name) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue { name, value: raw }),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn from_pairs(pairs: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> =
            pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        Config::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        let config = from_pairs(&[]).unwrap();
        assert_eq!(config.app.port, 8000);
        assert_eq!(config.seating.layout, LayoutKind::Synagogue);
        assert_eq!(config.seating.layout().capacity(), 184);
        assert_eq!(config.seating.reservation_probability, 0.15);
        assert_eq!(config.seating.default_holder, "אתה");
        assert!(!config.seating.consistent_generation);
        assert_eq!(config.sessions.ttl(), Duration::from_secs(1800));
        assert!(config.features.enable_classes && config.features.enable_events);
    }

    #[test]
    fn reads_grid_layout() {
        let config = from_pairs(&[
            ("SEATING_LAYOUT", "grid"),
            ("SEATING_ROWS", "3"),
            ("SEATING_SEATS_PER_ROW", "4"),
            ("PORT", "9090"),
            ("ENABLE_EVENTS", "false"),
        ])
        .unwrap();
        assert_eq!(config.seating.layout(), SeatLayout::grid(3, 4));
        assert_eq!(config.seating.reservation_probability, 0.20);
        assert_eq!(config.app.port, 9090);
        assert!(!config.features.enable_events);
    }

    #[test]
    fn rejects_unparseable_values() {
        let err = from_pairs(&[("PORT", "eighty")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { name: "PORT", .. }));
        assert!(from_pairs(&[("SEATING_LAYOUT", "balcony")]).is_err());
    }

    #[test]
    fn rejects_out_of_range_values() {
        assert!(matches!(
            from_pairs(&[("SEATING_OCCUPANCY_PROBABILITY", "1.5")]),
            Err(ConfigError::Validation(_))
        ));
        assert!(matches!(
            from_pairs(&[("SEATING_LAYOUT", "grid"), ("SEATING_ROWS", "0")]),
            Err(ConfigError::Validation(_))
        ));
        assert!(from_pairs(&[("SESSION_TTL_SECONDS", "0")]).is_err());
    }

    #[test]
    fn builds_policy_from_settings() {
        let config = SeatingConfig {
            occupancy_probability: 0.0,
            reservation_probability: 0.0,
            ..SeatingConfig::default()
        };
        let mut policy = config.policy().unwrap();
        let position = crate::seating::SeatPosition { section: None, row: 1, seat_number: 1 };
        assert_eq!(policy.initial_state(&position), (false, None));
    }
}
