//! Weighted merge of the five origin pools into one flat token sequence.
//!
//! No deduplication happens here: tokens sharing a name but differing in
//! provenance stay distinct entries, and later stages sum them when
//! grouping by name. Source diversity is a confidence signal, so it must
//! survive the merge.

use astrobrief_config::{EngineTuning, WeightingModel};
use astrobrief_core::astro::{SpeedClass, speed_class};
use astrobrief_core::token::Token;
use tracing::debug;

/// The five origin pools, as produced by the generators and adjusters.
/// A missing pool is just an empty vec — never an error.
#[derive(Debug, Clone, Default)]
pub struct TokenPools {
    pub natal: Vec<Token>,
    pub progressed: Vec<Token>,
    pub transit: Vec<Token>,
    pub weather: Vec<Token>,
    pub temporal: Vec<Token>,
}

fn is_fast_transit(token: &Token) -> bool {
    match token.planet_source.as_deref().and_then(speed_class) {
        Some(SpeedClass::Lunar | SpeedClass::Fast | SpeedClass::Mid) => true,
        Some(SpeedClass::Slow | SpeedClass::Glacial) => false,
        // Unknown bodies are treated as fast: they are rare enough that
        // suppressing them under the slow fraction would hide them entirely.
        None => true,
    }
}

/// Merge all pools under the model's per-origin fractions.
///
/// Natal weights are first locally normalized — `min(w * scale, cap)` —
/// so a chart with many strong natal signals cannot dominate the blend by
/// raw token count. Transit tokens split between the `transit_fast` and
/// `transit_slow` fractions by the transit planet's speed class. Tokens
/// that end up inert are dropped.
pub fn aggregate(pools: &TokenPools, model: &WeightingModel, tuning: &EngineTuning) -> Vec<Token> {
    let mut merged = Vec::with_capacity(
        pools.natal.len()
            + pools.progressed.len()
            + pools.transit.len()
            + pools.weather.len()
            + pools.temporal.len(),
    );

    for token in &pools.natal {
        let normalized = (token.weight * tuning.natal_scale).min(tuning.natal_cap);
        let mut scaled = token.clone();
        scaled.weight = (normalized * model.natal).max(0.0);
        merged.push(scaled);
    }

    for token in &pools.progressed {
        merged.push(token.scaled(model.progressed));
    }

    for token in &pools.transit {
        let fraction = if is_fast_transit(token) {
            model.transit_fast
        } else {
            model.transit_slow
        };
        merged.push(token.scaled(fraction));
    }

    for token in &pools.weather {
        merged.push(token.scaled(model.weather));
    }

    for token in &pools.temporal {
        merged.push(token.scaled(model.temporal));
    }

    let before = merged.len();
    merged.retain(|t| !t.is_inert());
    debug!(
        kept = merged.len(),
        dropped_inert = before - merged.len(),
        "aggregated token pools"
    );
    merged
}
