//! Weighted semantic tokens — the currency of the engine.
//!
//! A [`Token`] is an immutable weighted label with provenance: which input
//! source produced it, and optionally which planet/sign/house/aspect it
//! came from. Generators create tokens fresh per invocation; adjusters
//! return *new* tokens rather than mutating in place.

use serde::{Deserialize, Serialize};

/// Weights at or below this value are treated as inert: consumers may
/// drop such tokens without changing observable output.
pub const WEIGHT_EPSILON: f64 = 1e-6;

/// The qualitative dimension a token speaks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenCategory {
    /// Silhouette and construction (e.g. "tailored", "draped").
    Structure,
    /// Emotional tone (e.g. "bold", "serene").
    Mood,
    /// Material feel (e.g. "silky", "crisp").
    Texture,
    /// Concrete hue (e.g. "crimson", "slate").
    Color,
    /// How color reads (e.g. "saturated", "muted").
    ColorQuality,
    /// Overall expressive register (e.g. "dramatic", "understated").
    Expression,
}

impl TokenCategory {
    /// All categories, in declaration order.
    pub const ALL: [TokenCategory; 6] = [
        TokenCategory::Structure,
        TokenCategory::Mood,
        TokenCategory::Texture,
        TokenCategory::Color,
        TokenCategory::ColorQuality,
        TokenCategory::Expression,
    ];
}

/// Which input source produced a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Origin {
    /// The natal (base) chart.
    Natal,
    /// The progressed (emotional-weather) chart.
    Progressed,
    /// Transiting aspects against the natal chart.
    Transit,
    /// Observed weather conditions.
    Weather,
    /// The temporal signature (moon phase, planetary day).
    Temporal,
}

impl Origin {
    /// All origins, in declaration order.
    pub const ALL: [Origin; 5] = [
        Origin::Natal,
        Origin::Progressed,
        Origin::Transit,
        Origin::Weather,
        Origin::Temporal,
    ];
}

/// An immutable weighted semantic label with provenance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    /// The label itself (e.g. "luxurious").
    pub name: String,
    /// Which qualitative dimension it speaks to.
    pub category: TokenCategory,
    /// Relative strength. Never negative.
    pub weight: f64,
    /// Which input source produced it.
    pub origin: Origin,
    /// Planet that sourced the token, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub planet_source: Option<String>,
    /// Sign that sourced the token, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sign_source: Option<String>,
    /// House that sourced the token, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub house_source: Option<u8>,
    /// Aspect that sourced the token, when known (e.g. "Square").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aspect_source: Option<String>,
}

impl Token {
    /// Create a token with no planetary provenance.
    ///
    /// Negative weights are clamped to zero — the weight invariant holds
    /// by construction.
    pub fn new(
        name: impl Into<String>,
        category: TokenCategory,
        weight: f64,
        origin: Origin,
    ) -> Self {
        Self {
            name: name.into(),
            category,
            weight: weight.max(0.0),
            origin,
            planet_source: None,
            sign_source: None,
            house_source: None,
            aspect_source: None,
        }
    }

    /// Attach a planet source.
    pub fn with_planet(mut self, planet: impl Into<String>) -> Self {
        self.planet_source = Some(planet.into());
        self
    }

    /// Attach a sign source.
    pub fn with_sign(mut self, sign: impl Into<String>) -> Self {
        self.sign_source = Some(sign.into());
        self
    }

    /// Attach a house source.
    pub fn with_house(mut self, house: u8) -> Self {
        self.house_source = Some(house);
        self
    }

    /// Attach an aspect source.
    pub fn with_aspect(mut self, aspect: impl Into<String>) -> Self {
        self.aspect_source = Some(aspect.into());
        self
    }

    /// Return a copy with the weight multiplied by `factor`.
    ///
    /// Provenance fields are preserved. The result is clamped to be
    /// non-negative regardless of `factor`.
    pub fn scaled(&self, factor: f64) -> Self {
        let mut out = self.clone();
        out.weight = (self.weight * factor).max(0.0);
        out
    }

    /// Whether this token carries effectively no weight.
    pub fn is_inert(&self) -> bool {
        self.weight <= WEIGHT_EPSILON
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_weight_clamps_to_zero() {
        let t = Token::new("bold", TokenCategory::Mood, -2.0, Origin::Transit);
        assert_eq!(t.weight, 0.0);
        assert!(t.is_inert());
    }

    #[test]
    fn scaled_preserves_provenance() {
        let t = Token::new("silky", TokenCategory::Texture, 1.5, Origin::Natal)
            .with_planet("Venus")
            .with_sign("Taurus")
            .with_house(2);
        let s = t.scaled(2.0);
        assert_eq!(s.weight, 3.0);
        assert_eq!(s.name, "silky");
        assert_eq!(s.planet_source.as_deref(), Some("Venus"));
        assert_eq!(s.sign_source.as_deref(), Some("Taurus"));
        assert_eq!(s.house_source, Some(2));
    }

    #[test]
    fn scaled_never_goes_negative() {
        let t = Token::new("crisp", TokenCategory::Texture, 1.0, Origin::Weather);
        assert_eq!(t.scaled(-3.0).weight, 0.0);
    }

    #[test]
    fn tiny_weight_is_inert() {
        let t = Token::new("muted", TokenCategory::ColorQuality, 1e-9, Origin::Temporal);
        assert!(t.is_inert());
        let t = Token::new("muted", TokenCategory::ColorQuality, 0.1, Origin::Temporal);
        assert!(!t.is_inert());
    }

    #[test]
    fn serde_round_trip_skips_absent_provenance() {
        let t = Token::new("bold", TokenCategory::Mood, 1.0, Origin::Transit);
        let json = serde_json::to_string(&t).unwrap();
        assert!(!json.contains("planet_source"));
        let back: Token = serde_json::from_str(&json).unwrap();
        assert_eq!(back, t);
    }
}
