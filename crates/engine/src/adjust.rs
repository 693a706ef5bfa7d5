//! Freshness adjustment — pure functions that rescale token weights.
//!
//! The freshness boost biases the blend toward fast-changing signal: a
//! Moon transit is news today and gone tomorrow, a Pluto transit reads the
//! same for months. Multipliers are keyed on the token's planet source,
//! then scaled up for tension and minor aspects (both are short-lived and
//! distinctive). Dignity never changes weights — it only colors phrasing
//! confidence downstream, so it lives in `core::astro` as a lookup.

use astrobrief_core::aspect::AspectType;
use astrobrief_core::astro::{SpeedClass, speed_class};
use astrobrief_core::token::Token;

/// Multiplier for tokens with no recognized planet source.
const NEUTRAL_MULTIPLIER: f64 = 0.9;

/// Extra factor for Square/Opposition aspects.
const TENSION_FACTOR: f64 = 1.2;

/// Extra factor for minor aspects.
const MINOR_FACTOR: f64 = 1.4;

fn speed_multiplier(class: SpeedClass) -> f64 {
    match class {
        SpeedClass::Lunar => 3.0,
        SpeedClass::Fast => 2.0,
        SpeedClass::Mid => 1.2,
        SpeedClass::Slow => 0.7,
        SpeedClass::Glacial => 0.5,
    }
}

/// Rescale a token's weight by how fresh its source signal is.
///
/// Returns a new token; the input is untouched. Name, category, and all
/// provenance fields are preserved. The result is never negative.
pub fn apply_freshness_boost(token: &Token) -> Token {
    let mut factor = token
        .planet_source
        .as_deref()
        .and_then(speed_class)
        .map(speed_multiplier)
        .unwrap_or(NEUTRAL_MULTIPLIER);

    if let Some(aspect) = token.aspect_source.as_deref().and_then(AspectType::parse) {
        if aspect.is_tension() {
            factor *= TENSION_FACTOR;
        }
        if aspect.is_minor() {
            factor *= MINOR_FACTOR;
        }
    }

    token.scaled(factor)
}

/// Apply the freshness boost to every token in a pool.
pub fn boost_pool(tokens: &[Token]) -> Vec<Token> {
    tokens.iter().map(apply_freshness_boost).collect()
}
