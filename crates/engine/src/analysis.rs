//! Grouped views over the aggregated token pool.
//!
//! The selector and assembler never walk the raw pool; they ask the
//! analysis for summed weights by name, category, and origin. Grouping is
//! by `BTreeMap` so dominant-token ties resolve alphabetically — the same
//! inputs must always produce the same output.

use astrobrief_config::EngineTuning;
use astrobrief_core::content::ConfidenceLevel;
use astrobrief_core::token::{Origin, Token, TokenCategory};
use std::collections::{BTreeMap, BTreeSet};

/// Summed, grouped weights for one aggregated pool.
#[derive(Debug, Clone)]
pub struct TokenAnalysis {
    weight_by_name: BTreeMap<String, f64>,
    origins_by_name: BTreeMap<String, BTreeSet<&'static str>>,
    weight_by_category: BTreeMap<&'static str, f64>,
    dominant_by_category: BTreeMap<&'static str, (String, f64)>,
    weight_by_origin: Vec<(Origin, f64)>,
    total_weight: f64,
    token_count: usize,
}

fn category_key(category: TokenCategory) -> &'static str {
    match category {
        TokenCategory::Structure => "structure",
        TokenCategory::Mood => "mood",
        TokenCategory::Texture => "texture",
        TokenCategory::Color => "color",
        TokenCategory::ColorQuality => "color_quality",
        TokenCategory::Expression => "expression",
    }
}

fn origin_key(origin: Origin) -> &'static str {
    match origin {
        Origin::Natal => "natal",
        Origin::Progressed => "progressed",
        Origin::Transit => "transit",
        Origin::Weather => "weather",
        Origin::Temporal => "temporal",
    }
}

impl TokenAnalysis {
    /// Analyze an aggregated pool. Inert tokens are ignored.
    pub fn analyze(tokens: &[Token]) -> Self {
        let mut weight_by_name: BTreeMap<String, f64> = BTreeMap::new();
        let mut origins_by_name: BTreeMap<String, BTreeSet<&'static str>> = BTreeMap::new();
        let mut weight_by_category: BTreeMap<&'static str, f64> = BTreeMap::new();
        let mut origin_totals: BTreeMap<&'static str, (Origin, f64)> = BTreeMap::new();
        let mut total_weight = 0.0;
        let mut token_count = 0;

        for token in tokens.iter().filter(|t| !t.is_inert()) {
            *weight_by_name.entry(token.name.clone()).or_insert(0.0) += token.weight;
            origins_by_name
                .entry(token.name.clone())
                .or_default()
                .insert(origin_key(token.origin));
            *weight_by_category
                .entry(category_key(token.category))
                .or_insert(0.0) += token.weight;
            origin_totals
                .entry(origin_key(token.origin))
                .or_insert((token.origin, 0.0))
                .1 += token.weight;
            total_weight += token.weight;
            token_count += 1;
        }

        // Dominant name per category: highest summed weight, ties to the
        // alphabetically earlier name.
        let mut per_category_names: BTreeMap<&'static str, BTreeMap<String, f64>> = BTreeMap::new();
        for token in tokens.iter().filter(|t| !t.is_inert()) {
            *per_category_names
                .entry(category_key(token.category))
                .or_default()
                .entry(token.name.clone())
                .or_insert(0.0) += token.weight;
        }
        let mut dominant_by_category = BTreeMap::new();
        for (category, names) in &per_category_names {
            let mut best: Option<(&String, f64)> = None;
            for (name, &weight) in names {
                if best.is_none_or(|(_, w)| weight > w) {
                    best = Some((name, weight));
                }
            }
            if let Some((name, weight)) = best {
                dominant_by_category.insert(*category, (name.clone(), weight));
            }
        }

        Self {
            weight_by_name,
            origins_by_name,
            weight_by_category,
            dominant_by_category,
            weight_by_origin: origin_totals.into_values().collect(),
            total_weight,
            token_count,
        }
    }

    /// Summed weight of all tokens named `name`.
    pub fn weight_of(&self, name: &str) -> f64 {
        self.weight_by_name.get(name).copied().unwrap_or(0.0)
    }

    /// Whether the pool carries `name` at or above `min_weight` (summed).
    pub fn contains(&self, name: &str, min_weight: f64) -> bool {
        self.weight_of(name) >= min_weight
    }

    /// How many distinct origins contributed tokens with this name.
    pub fn source_diversity(&self, name: &str) -> usize {
        self.origins_by_name.get(name).map_or(0, |s| s.len())
    }

    /// Highest-weighted name in a category, with its summed weight.
    pub fn dominant_in(&self, category: TokenCategory) -> Option<(&str, f64)> {
        self.dominant_by_category
            .get(category_key(category))
            .map(|(name, weight)| (name.as_str(), *weight))
    }

    /// Highest-weighted name overall, with its summed weight.
    pub fn dominant(&self) -> Option<(&str, f64)> {
        let mut best: Option<(&str, f64)> = None;
        for (name, &weight) in &self.weight_by_name {
            if best.is_none_or(|(_, w)| weight > w) {
                best = Some((name, weight));
            }
        }
        best
    }

    /// Summed weight per category.
    pub fn category_weight(&self, category: TokenCategory) -> f64 {
        self.weight_by_category
            .get(category_key(category))
            .copied()
            .unwrap_or(0.0)
    }

    /// Summed weight per origin, for confidence assessment.
    pub fn weight_by_origin(&self) -> &[(Origin, f64)] {
        &self.weight_by_origin
    }

    /// Total weight across the pool.
    pub fn total_weight(&self) -> f64 {
        self.total_weight
    }

    /// Mean weight per (non-inert) token entry, zero for an empty pool.
    pub fn average_weight(&self) -> f64 {
        if self.token_count == 0 {
            0.0
        } else {
            self.total_weight / self.token_count as f64
        }
    }

    /// Whether the pool has no usable tokens.
    pub fn is_empty(&self) -> bool {
        self.token_count == 0
    }
}

/// Assess how clearly one origin dominates the pool.
///
/// An empty pool has no dominant origin and reads as Moderate.
pub fn assess_confidence(analysis: &TokenAnalysis, tuning: &EngineTuning) -> ConfidenceLevel {
    if analysis.total_weight() <= 0.0 {
        return ConfidenceLevel::Moderate;
    }
    let top_share = analysis
        .weight_by_origin()
        .iter()
        .map(|(_, w)| w / analysis.total_weight())
        .fold(0.0, f64::max);
    if top_share > tuning.high_confidence_share {
        ConfidenceLevel::High
    } else if top_share > tuning.medium_confidence_share {
        ConfidenceLevel::Medium
    } else {
        ConfidenceLevel::Moderate
    }
}
