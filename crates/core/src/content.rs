//! The assembled output record and its companion confidence level.

use crate::energy::EnergyBreakdown;
use serde::{Deserialize, Serialize};

/// How clearly one input source dominates the blended token pool.
///
/// Modulates phrasing only — a scattered day gets a softer lead-in, a
/// clearly transit-driven day gets direct language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfidenceLevel {
    /// One origin carries a clear majority of total weight.
    High,
    /// A distinguishable leader, short of a majority.
    Medium,
    /// No dominant origin — scattered energy.
    Moderate,
}

/// Observed weather, supplied externally when available.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WeatherFacts {
    /// Temperature in degrees Celsius.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    /// Condition label (e.g. "rain", "clear").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<String>,
}

/// One generation call's complete output. A pure return value with no
/// independent lifecycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputContent {
    /// The selected narrative text. Never empty.
    pub narrative: String,
    /// Six-category integer breakdown, always summing to 21.
    pub energy_breakdown: EnergyBreakdown,
    /// Overall lightness of the palette, 0–100.
    pub brightness: u32,
    /// Color saturation of the palette, 0–100.
    pub vibrancy: u32,
    /// How clearly one origin dominated.
    pub confidence: ConfidenceLevel,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub textiles: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub colors: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub patterns: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shape: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accessories: Option<String>,
    /// One-line closer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub takeaway: Option<String>,
    /// Echo of the supplied temperature, when weather was provided.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    /// Echo of the supplied weather condition.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weather_condition: Option<String>,
}

impl OutputContent {
    /// Serialize to the JSON wire form handed to downstream renderers.
    pub fn to_json(&self) -> crate::error::Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn optional_fields_are_omitted_when_absent() {
        let content = OutputContent {
            narrative: "A steady day.".into(),
            energy_breakdown: EnergyBreakdown::all_classic(),
            brightness: 50,
            vibrancy: 50,
            confidence: ConfidenceLevel::Moderate,
            textiles: None,
            colors: None,
            patterns: None,
            shape: None,
            accessories: None,
            takeaway: None,
            temperature: None,
            weather_condition: None,
        };
        let json = serde_json::to_string(&content).unwrap();
        assert!(!json.contains("textiles"));
        assert!(!json.contains("temperature"));
        assert!(json.contains("narrative"));
        let back: OutputContent = serde_json::from_str(&json).unwrap();
        assert_eq!(back, content);
    }

    #[test]
    fn to_json_matches_serde_output() {
        let content = OutputContent {
            narrative: "A steady day.".into(),
            energy_breakdown: EnergyBreakdown::all_classic(),
            brightness: 50,
            vibrancy: 50,
            confidence: ConfidenceLevel::High,
            textiles: Some("silky fabrics".into()),
            colors: None,
            patterns: None,
            shape: None,
            accessories: None,
            takeaway: None,
            temperature: None,
            weather_condition: None,
        };
        let json = content.to_json().unwrap();
        assert_eq!(json, serde_json::to_string(&content).unwrap());
    }
}
