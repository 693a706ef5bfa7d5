//! Weighting models and tuning for the astrobrief engine.
//!
//! A [`WeightingModel`] names the fraction of blended weight each input
//! origin contributes. The historical revisions of this system differed
//! only in these splits; they are presets here, never code forks. Models
//! are validated at construction — a negative fraction is the one
//! configuration error the engine refuses to carry forward.
//!
//! # Example
//!
//! ```toml
//! natal = 0.40
//! progressed = 0.15
//! transit_fast = 0.15
//! transit_slow = 0.05
//! weather = 0.10
//! temporal = 0.05
//! ```

use serde::{Deserialize, Serialize};

/// Errors from configuration loading and validation.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid weighting model: {reason}")]
    InvalidModel { reason: String },

    #[error("unknown preset '{0}'")]
    UnknownPreset(String),

    #[error("TOML parse error: {0}")]
    TomlError(#[from] toml::de::Error),
}

fn default_fraction() -> f64 {
    0.0
}

/// Per-origin weight fractions. Missing keys default to 0; unrecognized
/// keys are ignored. Immutable once constructed for a generation pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightingModel {
    #[serde(default = "default_fraction")]
    pub natal: f64,
    #[serde(default = "default_fraction")]
    pub progressed: f64,
    /// Transits from fast-moving bodies (Moon through Mars).
    #[serde(default = "default_fraction")]
    pub transit_fast: f64,
    /// Transits from slow-moving bodies (Jupiter and out).
    #[serde(default = "default_fraction")]
    pub transit_slow: f64,
    #[serde(default = "default_fraction")]
    pub weather: f64,
    #[serde(default = "default_fraction")]
    pub temporal: f64,
}

impl Default for WeightingModel {
    fn default() -> Self {
        Self::balanced()
    }
}

impl WeightingModel {
    /// The default blend: natal base with a strong transit voice.
    pub fn balanced() -> Self {
        Self {
            natal: 0.40,
            progressed: 0.15,
            transit_fast: 0.15,
            transit_slow: 0.05,
            weather: 0.10,
            temporal: 0.05,
        }
    }

    /// Day-to-day variety first: transits dominate, natal recedes.
    pub fn transit_forward() -> Self {
        Self {
            natal: 0.20,
            progressed: 0.12,
            transit_fast: 0.40,
            transit_slow: 0.10,
            weather: 0.10,
            temporal: 0.08,
        }
    }

    /// Chart-faithful: the natal signature leads, transits season.
    pub fn natal_heavy() -> Self {
        Self {
            natal: 0.65,
            progressed: 0.20,
            transit_fast: 0.08,
            transit_slow: 0.04,
            weather: 0.03,
            temporal: 0.0,
        }
    }

    /// Look up a preset by name.
    pub fn preset(name: &str) -> Result<Self, ConfigError> {
        match name {
            "balanced" => Ok(Self::balanced()),
            "transit_forward" => Ok(Self::transit_forward()),
            "natal_heavy" => Ok(Self::natal_heavy()),
            other => Err(ConfigError::UnknownPreset(other.to_string())),
        }
    }

    /// Load a model from a TOML string and validate it.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let model: WeightingModel = toml::from_str(toml_str)?;
        model.validate()?;
        Ok(model)
    }

    /// Reject negative fractions. Fractions need not sum to 1 — the
    /// aggregator treats them as relative multipliers, not a partition.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("natal", self.natal),
            ("progressed", self.progressed),
            ("transit_fast", self.transit_fast),
            ("transit_slow", self.transit_slow),
            ("weather", self.weather),
            ("temporal", self.temporal),
        ] {
            if value < 0.0 {
                return Err(ConfigError::InvalidModel {
                    reason: format!("{name} fraction is negative ({value})"),
                });
            }
            if !value.is_finite() {
                return Err(ConfigError::InvalidModel {
                    reason: format!("{name} fraction is not finite"),
                });
            }
        }
        Ok(())
    }
}

/// Threshold constants for the engine. These are configuration, not
/// derived values; the defaults match the reference revision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineTuning {
    /// Origin share of total weight above which confidence is High.
    #[serde(default = "default_high_confidence")]
    pub high_confidence_share: f64,
    /// Origin share above which confidence is Medium.
    #[serde(default = "default_medium_confidence")]
    pub medium_confidence_share: f64,
    /// Multiplier applied to natal weights before the model fraction.
    #[serde(default = "default_natal_scale")]
    pub natal_scale: f64,
    /// Cap on any single natal weight after scaling.
    #[serde(default = "default_natal_cap")]
    pub natal_cap: f64,
    /// Scaled category scores below this are zeroed as noise.
    #[serde(default = "default_noise_floor")]
    pub allocation_noise_floor: f64,
    /// Minimum token weight for a Tier-1 combination predicate.
    #[serde(default = "default_combo_threshold")]
    pub combination_weight_threshold: f64,
    /// Minimum token weight for a Tier-2 single dominant token.
    #[serde(default = "default_dominant_threshold")]
    pub dominant_weight_threshold: f64,
}

fn default_high_confidence() -> f64 {
    0.55
}
fn default_medium_confidence() -> f64 {
    0.35
}
fn default_natal_scale() -> f64 {
    0.6
}
fn default_natal_cap() -> f64 {
    1.5
}
fn default_noise_floor() -> f64 {
    0.25
}
fn default_combo_threshold() -> f64 {
    0.8
}
fn default_dominant_threshold() -> f64 {
    2.0
}

impl Default for EngineTuning {
    fn default() -> Self {
        Self {
            high_confidence_share: default_high_confidence(),
            medium_confidence_share: default_medium_confidence(),
            natal_scale: default_natal_scale(),
            natal_cap: default_natal_cap(),
            allocation_noise_floor: default_noise_floor(),
            combination_weight_threshold: default_combo_threshold(),
            dominant_weight_threshold: default_dominant_threshold(),
        }
    }
}

impl EngineTuning {
    /// Load tuning overrides from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let tuning: EngineTuning = toml::from_str(toml_str)?;
        tuning.validate()?;
        Ok(tuning)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.medium_confidence_share > self.high_confidence_share {
            return Err(ConfigError::InvalidModel {
                reason: "medium confidence share exceeds high confidence share".into(),
            });
        }
        for (name, value) in [
            ("high_confidence_share", self.high_confidence_share),
            ("medium_confidence_share", self.medium_confidence_share),
            ("natal_scale", self.natal_scale),
            ("natal_cap", self.natal_cap),
            ("allocation_noise_floor", self.allocation_noise_floor),
            (
                "combination_weight_threshold",
                self.combination_weight_threshold,
            ),
            ("dominant_weight_threshold", self.dominant_weight_threshold),
        ] {
            if value < 0.0 || !value.is_finite() {
                return Err(ConfigError::InvalidModel {
                    reason: format!("{name} must be a non-negative finite number"),
                });
            }
        }
        Ok(())
    }
}
