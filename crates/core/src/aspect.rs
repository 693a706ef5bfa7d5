//! Transit aspects as supplied by external chart-math collaborators.

use serde::{Deserialize, Serialize};

/// The angular relationship between a transiting and a natal planet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AspectType {
    Conjunction,
    Opposition,
    Square,
    Trine,
    Sextile,
    // Minor aspects
    Quincunx,
    Semisextile,
    Semisquare,
    Sesquiquadrate,
}

impl AspectType {
    /// Tension aspects push the freshness boost up — friction is news.
    pub fn is_tension(&self) -> bool {
        matches!(self, AspectType::Square | AspectType::Opposition)
    }

    /// Minor aspects are short-lived and therefore fresher signal.
    pub fn is_minor(&self) -> bool {
        matches!(
            self,
            AspectType::Quincunx
                | AspectType::Semisextile
                | AspectType::Semisquare
                | AspectType::Sesquiquadrate
        )
    }

    /// Canonical display name, matching what token `aspect_source` carries.
    pub fn name(&self) -> &'static str {
        match self {
            AspectType::Conjunction => "Conjunction",
            AspectType::Opposition => "Opposition",
            AspectType::Square => "Square",
            AspectType::Trine => "Trine",
            AspectType::Sextile => "Sextile",
            AspectType::Quincunx => "Quincunx",
            AspectType::Semisextile => "Semisextile",
            AspectType::Semisquare => "Semisquare",
            AspectType::Sesquiquadrate => "Sesquiquadrate",
        }
    }

    /// Parse a display name back into an aspect type. Unknown names yield
    /// `None`; upstream collaborators occasionally send aspect labels we
    /// do not model, and those are treated as neutral.
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "Conjunction" => Some(AspectType::Conjunction),
            "Opposition" => Some(AspectType::Opposition),
            "Square" => Some(AspectType::Square),
            "Trine" => Some(AspectType::Trine),
            "Sextile" => Some(AspectType::Sextile),
            "Quincunx" => Some(AspectType::Quincunx),
            "Semisextile" => Some(AspectType::Semisextile),
            "Semisquare" => Some(AspectType::Semisquare),
            "Sesquiquadrate" => Some(AspectType::Sesquiquadrate),
            _ => None,
        }
    }
}

/// A single transiting aspect record. Supplied externally; read-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransitAspect {
    /// The transiting planet (e.g. "Moon").
    pub transit_planet: String,
    /// The natal planet being aspected.
    pub natal_planet: String,
    /// The angular relationship.
    pub aspect_type: AspectType,
    /// Deviation from exact, in degrees. Never negative.
    pub orb: f64,
}

impl TransitAspect {
    pub fn new(
        transit_planet: impl Into<String>,
        natal_planet: impl Into<String>,
        aspect_type: AspectType,
        orb: f64,
    ) -> Self {
        Self {
            transit_planet: transit_planet.into(),
            natal_planet: natal_planet.into(),
            aspect_type,
            orb: orb.max(0.0),
        }
    }
}
