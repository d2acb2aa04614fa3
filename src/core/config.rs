//! Care configuration with documented constants
//!
//! Every tuning number used by the pet model lives here, together with the
//! thresholds that classify mood and care needs.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::error::{PetError, Result};

/// Hard limits for hunger and happiness, whatever the config says
pub const LEVEL_FLOOR: f64 = 0.0;
pub const LEVEL_CEILING: f64 = 100.0;

/// Configuration for pet care
///
/// The defaults reproduce the reference behavior exactly. Changing them
/// changes how quickly pets get hungry and how easily they cheer up.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CareConfig {
    // === BOUNDS ===
    /// Lowest value hunger or happiness can take
    pub min_level: f64,

    /// Highest value hunger or happiness can take
    pub max_level: f64,

    /// Hunger of a freshly created pet when none is given
    pub initial_hunger: f64,

    /// Happiness of a freshly created pet when none is given
    pub initial_happiness: f64,

    // === ACTIONS ===
    /// Food amount used by `feed_default`
    pub default_feed_amount: f64,

    /// Fraction of the food amount that turns into happiness
    ///
    /// At 0.1, a default meal of 15 adds 1.5 happiness.
    pub feed_happiness_ratio: f64,

    /// Play duration used by `play_default`
    pub default_play_duration: f64,

    /// Happiness gained per unit of play, before the personality multiplier
    pub play_happiness_rate: f64,

    /// Hunger gained per unit of play, before the personality multiplier
    pub play_hunger_rate: f64,

    // === MOOD THRESHOLDS ===
    /// Happiness at or above which a well-fed pet is joyful
    pub joyful_min_happiness: f64,

    /// Hunger at or below which a happy pet is joyful
    pub joyful_max_hunger: f64,

    /// Happiness at or above which a fed pet is content
    pub content_min_happiness: f64,

    /// Hunger at or below which a happy pet is content
    pub content_max_hunger: f64,

    /// Hunger at or above which a pet is starving
    pub starving_min_hunger: f64,

    /// Happiness at or below which a pet is sad
    pub sad_max_happiness: f64,

    // === NEED THRESHOLDS ===
    /// Hunger at or above which feeding is recommended
    pub feed_soon_hunger: f64,

    /// Happiness at or below which playing is recommended
    pub play_together_happiness: f64,
}

impl Default for CareConfig {
    fn default() -> Self {
        Self {
            min_level: 0.0,
            max_level: 100.0,
            initial_hunger: 50.0,
            initial_happiness: 50.0,

            default_feed_amount: 15.0,
            feed_happiness_ratio: 0.1,
            default_play_duration: 10.0,
            play_happiness_rate: 0.8,
            play_hunger_rate: 0.6,

            // joyful is checked before content, so it must be the stricter band
            joyful_min_happiness: 75.0,
            joyful_max_hunger: 40.0,
            content_min_happiness: 50.0,
            content_max_hunger: 60.0,
            starving_min_hunger: 80.0,
            sad_max_happiness: 25.0,

            feed_soon_hunger: 70.0,
            play_together_happiness: 35.0,
        }
    }
}

impl CareConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a config from TOML; missing keys keep their defaults
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: CareConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)?;
        let config = Self::from_toml_str(&contents)?;
        tracing::info!(?path, "Loaded care config");
        Ok(config)
    }

    /// Clamp a level into `[min_level, max_level]`, never leaving `[0, 100]`
    pub fn clamp_level(&self, value: f64) -> f64 {
        value
            .max(self.min_level)
            .min(self.max_level)
            .max(LEVEL_FLOOR)
            .min(LEVEL_CEILING)
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        // Written as negations so NaN fails every check
        if !(self.min_level >= LEVEL_FLOOR
            && self.min_level < self.max_level
            && self.max_level <= LEVEL_CEILING)
        {
            return Err(PetError::InvalidConfig(format!(
                "levels should satisfy {} <= min_level ({}) < max_level ({}) <= {}",
                LEVEL_FLOOR, self.min_level, self.max_level, LEVEL_CEILING
            )));
        }

        let amounts = [
            ("initial_hunger", self.initial_hunger),
            ("initial_happiness", self.initial_happiness),
            ("default_feed_amount", self.default_feed_amount),
            ("default_play_duration", self.default_play_duration),
            ("feed_happiness_ratio", self.feed_happiness_ratio),
            ("play_happiness_rate", self.play_happiness_rate),
            ("play_hunger_rate", self.play_hunger_rate),
        ];
        for (name, value) in amounts {
            if !value.is_finite() {
                return Err(PetError::InvalidConfig(format!("{} ({}) must be finite", name, value)));
            }
        }

        let thresholds = [
            ("joyful_min_happiness", self.joyful_min_happiness),
            ("joyful_max_hunger", self.joyful_max_hunger),
            ("content_min_happiness", self.content_min_happiness),
            ("content_max_hunger", self.content_max_hunger),
            ("starving_min_hunger", self.starving_min_hunger),
            ("sad_max_happiness", self.sad_max_happiness),
            ("feed_soon_hunger", self.feed_soon_hunger),
            ("play_together_happiness", self.play_together_happiness),
        ];
        for (name, value) in thresholds {
            if !(value >= self.min_level && value <= self.max_level) {
                return Err(PetError::InvalidConfig(format!(
                    "{} ({}) should lie within [{}, {}]",
                    name, value, self.min_level, self.max_level
                )));
            }
        }

        if self.joyful_min_happiness < self.content_min_happiness
            || self.joyful_max_hunger > self.content_max_hunger
        {
            return Err(PetError::InvalidConfig(
                "joyful band should be inside the content band".into(),
            ));
        }

        if !(self.feed_happiness_ratio > 0.0
            && self.play_happiness_rate > 0.0
            && self.play_hunger_rate > 0.0)
        {
            return Err(PetError::InvalidConfig("Action rates must be positive".into()));
        }

        Ok(())
    }
}

// === GLOBAL CONFIG ACCESS ===

use std::sync::OnceLock;

static CONFIG: OnceLock<CareConfig> = OnceLock::new();

/// Get the global care config (initializes with defaults if not set)
pub fn config() -> &'static CareConfig {
    CONFIG.get_or_init(CareConfig::default)
}

/// Set the global care config (can only be called once)
///
/// Returns Err if config was already set.
pub fn set_config(config: CareConfig) -> std::result::Result<(), CareConfig> {
    CONFIG.set(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(CareConfig::default().validate().is_ok());
    }

    #[test]
    fn test_clamp_level() {
        let config = CareConfig::default();
        assert_eq!(config.clamp_level(-5.0), 0.0);
        assert_eq!(config.clamp_level(42.5), 42.5);
        assert_eq!(config.clamp_level(250.0), 100.0);
    }

    #[test]
    fn test_clamp_level_holds_with_unvalidated_bounds() {
        let wide = CareConfig {
            min_level: -50.0,
            max_level: 500.0,
            ..CareConfig::default()
        };
        assert_eq!(wide.clamp_level(-40.0), 0.0);
        assert_eq!(wide.clamp_level(450.0), 100.0);

        let nan = CareConfig {
            min_level: f64::NAN,
            max_level: f64::NAN,
            ..CareConfig::default()
        };
        assert_eq!(nan.clamp_level(350.0), 100.0);
        assert_eq!(nan.clamp_level(-10.0), 0.0);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = CareConfig::from_toml_str("default_feed_amount = 20.0\n").unwrap();
        assert_eq!(config.default_feed_amount, 20.0);
        assert_eq!(config.play_hunger_rate, 0.6);
        assert_eq!(config.max_level, 100.0);
    }

    #[test]
    fn test_inverted_bounds_rejected() {
        let config = CareConfig {
            min_level: 100.0,
            max_level: 0.0,
            ..CareConfig::default()
        };
        assert!(matches!(config.validate(), Err(PetError::InvalidConfig(_))));
    }

    #[test]
    fn test_nan_bounds_rejected() {
        let result = CareConfig::from_toml_str("min_level = nan\nmax_level = nan\n");
        assert!(matches!(result, Err(PetError::InvalidConfig(_))));
    }

    #[test]
    fn test_bounds_outside_percent_range_rejected() {
        let result = CareConfig::from_toml_str("min_level = -50.0\nmax_level = 500.0\n");
        assert!(matches!(result, Err(PetError::InvalidConfig(_))));

        let narrower = CareConfig::from_toml_str("min_level = 10.0\nmax_level = 90.0\n");
        assert!(narrower.is_ok());
    }

    #[test]
    fn test_nan_threshold_rejected() {
        let result = CareConfig::from_toml_str("sad_max_happiness = nan\n");
        assert!(matches!(result, Err(PetError::InvalidConfig(_))));
    }

    #[test]
    fn test_non_finite_rates_rejected() {
        let result = CareConfig::from_toml_str("play_hunger_rate = inf\n");
        assert!(matches!(result, Err(PetError::InvalidConfig(_))));

        let result = CareConfig::from_toml_str("default_feed_amount = nan\n");
        assert!(matches!(result, Err(PetError::InvalidConfig(_))));
    }

    #[test]
    fn test_joyful_outside_content_rejected() {
        let config = CareConfig {
            joyful_min_happiness: 40.0,
            ..CareConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_threshold_out_of_bounds_rejected() {
        let result = CareConfig::from_toml_str("starving_min_hunger = 150.0\n");
        assert!(matches!(result, Err(PetError::InvalidConfig(_))));
    }

    #[test]
    fn test_malformed_toml_is_toml_error() {
        let result = CareConfig::from_toml_str("max_level = \"lots\"\n");
        assert!(matches!(result, Err(PetError::TomlError(_))));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = CareConfig::load("definitely/not/here.toml");
        assert!(matches!(result, Err(PetError::IoError(_))));
    }
}
