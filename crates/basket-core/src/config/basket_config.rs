//! Top-level Basket configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::AnalysisConfig;
use crate::errors::ConfigError;

/// `[mining]` section of `basket.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct MiningSection {
    /// Base minimum support for itemsets of size ≥ 2.
    pub min_support: Option<f64>,
    /// Minimum rule confidence.
    pub min_confidence: Option<f64>,
    /// Minimum rule lift.
    pub min_lift: Option<f64>,
    /// Minimum support for single items.
    pub min_itemset_support: Option<f64>,
    /// Smallest reported bundle size.
    pub min_bundle_size: Option<usize>,
    /// Largest mined bundle size.
    pub max_bundle_size: Option<usize>,
    /// Adaptive per-level support thresholds.
    pub adaptive_support: Option<bool>,
    /// Wall-clock budget in seconds.
    pub max_analysis_time: Option<f64>,
}

/// `[validation]` section of `basket.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ValidationSection {
    /// Confidence level for Wald intervals.
    pub confidence_level: Option<f64>,
    /// Run k-fold cross-validation.
    pub enable_cross_validation: Option<bool>,
    /// Number of folds.
    pub folds: Option<usize>,
}

/// Top-level configuration aggregating all sections.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`BASKET_*`)
/// 3. Project config (`basket.toml` in project root)
/// 4. User config (`~/.basket/config.toml`)
/// 5. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct BasketConfig {
    pub mining: MiningSection,
    pub validation: ValidationSection,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub min_support: Option<f64>,
    pub min_confidence: Option<f64>,
    pub max_analysis_time: Option<f64>,
    pub enable_cross_validation: Option<bool>,
}

impl BasketConfig {
    /// Load configuration with layered resolution.
    pub fn load(root: &Path, cli_overrides: Option<&CliOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Layer 4 (lowest priority): user config
        if let Some(user_config_path) = Self::user_config_path() {
            if user_config_path.exists() {
                Self::merge_toml_file(&mut config, &user_config_path)?;
            }
        }

        // Layer 3: project config
        let project_config_path = root.join("basket.toml");
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        // Layer 2: environment variables
        Self::apply_env_overrides(&mut config);

        // Layer 1 (highest priority): CLI flags
        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut config, cli);
        }

        Self::validate(&config)?;
        debug!(root = %root.display(), "configuration resolved");

        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }

    /// Resolve the layered config into the concrete per-run value object.
    pub fn resolve(&self) -> AnalysisConfig {
        let defaults = AnalysisConfig::default();
        AnalysisConfig {
            min_support: self.mining.min_support.unwrap_or(defaults.min_support),
            min_confidence: self
                .mining
                .min_confidence
                .unwrap_or(defaults.min_confidence),
            min_lift: self.mining.min_lift.unwrap_or(defaults.min_lift),
            min_itemset_support: self
                .mining
                .min_itemset_support
                .unwrap_or(defaults.min_itemset_support),
            min_bundle_size: self
                .mining
                .min_bundle_size
                .unwrap_or(defaults.min_bundle_size),
            max_bundle_size: self.mining.max_bundle_size,
            adaptive_support: self
                .mining
                .adaptive_support
                .unwrap_or(defaults.adaptive_support),
            max_analysis_time: self
                .mining
                .max_analysis_time
                .unwrap_or(defaults.max_analysis_time),
            confidence_level: self
                .validation
                .confidence_level
                .unwrap_or(defaults.confidence_level),
            enable_cross_validation: self
                .validation
                .enable_cross_validation
                .unwrap_or(defaults.enable_cross_validation),
            cross_validation_folds: self
                .validation
                .folds
                .unwrap_or(defaults.cross_validation_folds),
        }
    }

    /// Validate the configuration values.
    pub fn validate(config: &BasketConfig) -> Result<(), ConfigError> {
        for (field, value) in [
            ("mining.min_support", config.mining.min_support),
            ("mining.min_confidence", config.mining.min_confidence),
            (
                "mining.min_itemset_support",
                config.mining.min_itemset_support,
            ),
            (
                "validation.confidence_level",
                config.validation.confidence_level,
            ),
        ] {
            if let Some(v) = value {
                if !(0.0..=1.0).contains(&v) {
                    return Err(ConfigError::ValidationFailed {
                        field: field.to_string(),
                        message: "must be between 0.0 and 1.0".to_string(),
                    });
                }
            }
        }
        if let Some(size) = config.mining.min_bundle_size {
            if size == 0 {
                return Err(ConfigError::ValidationFailed {
                    field: "mining.min_bundle_size".to_string(),
                    message: "must be greater than 0".to_string(),
                });
            }
        }
        if let Some(folds) = config.validation.folds {
            if folds == 0 {
                return Err(ConfigError::ValidationFailed {
                    field: "validation.folds".to_string(),
                    message: "must be greater than 0".to_string(),
                });
            }
        }
        Ok(())
    }

    /// Returns the user config path: `~/.basket/config.toml`.
    fn user_config_path() -> Option<std::path::PathBuf> {
        home_dir().map(|h| h.join(".basket").join("config.toml"))
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored (forward-compatible).
    fn merge_toml_file(config: &mut BasketConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: BasketConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`, where `other` values override `base`
    /// values only when `other` has a `Some` value.
    fn merge(base: &mut BasketConfig, other: &BasketConfig) {
        // Mining
        if other.mining.min_support.is_some() {
            base.mining.min_support = other.mining.min_support;
        }
        if other.mining.min_confidence.is_some() {
            base.mining.min_confidence = other.mining.min_confidence;
        }
        if other.mining.min_lift.is_some() {
            base.mining.min_lift = other.mining.min_lift;
        }
        if other.mining.min_itemset_support.is_some() {
            base.mining.min_itemset_support = other.mining.min_itemset_support;
        }
        if other.mining.min_bundle_size.is_some() {
            base.mining.min_bundle_size = other.mining.min_bundle_size;
        }
        if other.mining.max_bundle_size.is_some() {
            base.mining.max_bundle_size = other.mining.max_bundle_size;
        }
        if other.mining.adaptive_support.is_some() {
            base.mining.adaptive_support = other.mining.adaptive_support;
        }
        if other.mining.max_analysis_time.is_some() {
            base.mining.max_analysis_time = other.mining.max_analysis_time;
        }

        // Validation
        if other.validation.confidence_level.is_some() {
            base.validation.confidence_level = other.validation.confidence_level;
        }
        if other.validation.enable_cross_validation.is_some() {
            base.validation.enable_cross_validation = other.validation.enable_cross_validation;
        }
        if other.validation.folds.is_some() {
            base.validation.folds = other.validation.folds;
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `BASKET_MINING_MIN_SUPPORT`, `BASKET_VALIDATION_FOLDS`, etc.
    /// Unparsable values are logged and ignored, keeping the lower layers.
    fn apply_env_overrides(config: &mut BasketConfig) {
        if let Some(v) = env_override("BASKET_MINING_MIN_SUPPORT") {
            config.mining.min_support = Some(v);
        }
        if let Some(v) = env_override("BASKET_MINING_MIN_CONFIDENCE") {
            config.mining.min_confidence = Some(v);
        }
        if let Some(v) = env_override("BASKET_MINING_ADAPTIVE_SUPPORT") {
            config.mining.adaptive_support = Some(v);
        }
        if let Some(v) = env_override("BASKET_MINING_MAX_ANALYSIS_TIME") {
            config.mining.max_analysis_time = Some(v);
        }
        if let Some(v) = env_override("BASKET_VALIDATION_CONFIDENCE_LEVEL") {
            config.validation.confidence_level = Some(v);
        }
        if let Some(v) = env_override("BASKET_VALIDATION_ENABLE_CROSS_VALIDATION") {
            config.validation.enable_cross_validation = Some(v);
        }
        if let Some(v) = env_override("BASKET_VALIDATION_FOLDS") {
            config.validation.folds = Some(v);
        }
    }

    /// Apply CLI overrides (highest priority).
    fn apply_cli_overrides(config: &mut BasketConfig, cli: &CliOverrides) {
        if let Some(v) = cli.min_support {
            config.mining.min_support = Some(v);
        }
        if let Some(v) = cli.min_confidence {
            config.mining.min_confidence = Some(v);
        }
        if let Some(v) = cli.max_analysis_time {
            config.mining.max_analysis_time = Some(v);
        }
        if let Some(v) = cli.enable_cross_validation {
            config.validation.enable_cross_validation = Some(v);
        }
    }
}

/// Read and parse one environment override, warning on unparsable values.
fn env_override<T: std::str::FromStr>(name: &str) -> Option<T> {
    let val = std::env::var(name).ok()?;
    match val.parse() {
        Ok(parsed) => Some(parsed),
        Err(_) => {
            warn!(var = name, value = %val, "ignoring unparsable environment override");
            None
        }
    }
}

/// Cross-platform home directory resolution.
fn home_dir() -> Option<std::path::PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(std::path::PathBuf::from)
}
