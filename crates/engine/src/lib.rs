//! Astrobrief engine — token weighting, energy allocation, and narrative
//! selection.
//!
//! Turns astrological and environmental inputs into a short style brief
//! plus structured scores. Chart math, weather fetching, and persistence
//! live elsewhere; this crate is one pure computation per call.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐   ┌────────────┐   ┌─────────────┐
//! │  Generators   │──▶│ Freshness  │──▶│  Aggregator │
//! │ (thin adapters)│   │  Adjuster  │   │ (wtd merge) │
//! └──────────────┘   └────────────┘   └──────┬──────┘
//!                                            │
//!                         ┌──────────────────┼─────────────────┐
//!                         ▼                  ▼                 ▼
//!                  ┌────────────┐    ┌──────────────┐  ┌────────────┐
//!                  │   Energy   │    │  Narrative   │  │ Confidence │
//!                  │  Allocator │    │   Selector   │  │  Assessor  │
//!                  └──────┬─────┘    └──────┬───────┘  └──────┬─────┘
//!                         └─────────────────┼─────────────────┘
//!                                           ▼
//!                                  ┌────────────────┐
//!                                  │    Content     │
//!                                  │   Assembler    │
//!                                  └────────────────┘
//! ```
//!
//! The engine is stateless between invocations: no shared mutable state,
//! no I/O, no suspension points. Concurrent calls need no locking.

pub mod adjust;
pub mod aggregate;
pub mod allocate;
pub mod analysis;
pub mod assemble;
pub mod generators;
pub mod narrative;
pub mod seed;

pub use adjust::apply_freshness_boost;
pub use aggregate::{TokenPools, aggregate};
pub use allocate::{BonusPredicate, BonusRule, CategoryProfile, EnergyAllocator};
pub use analysis::{TokenAnalysis, assess_confidence};
pub use narrative::{EnergyDirection, NarrativeSelector, energy_direction};
pub use seed::daily_seed;

use astrobrief_config::{ConfigError, EngineTuning, WeightingModel};
use astrobrief_core::aspect::TransitAspect;
use astrobrief_core::astro::{DignityLevel, assess_dignity, sign_index};
use astrobrief_core::content::{ConfidenceLevel, OutputContent, WeatherFacts};
use astrobrief_core::signature::DailySignature;
use astrobrief_core::token::Token;
use chrono::{NaiveDate, Utc};
use tracing::debug;

/// All inputs for a single generation call.
///
/// Missing pieces degrade gracefully: empty pools are fine, a missing
/// date means today, a missing identity falls back to stable natal facts.
#[derive(Debug, Clone, Default)]
pub struct GenerationInput {
    pub natal_tokens: Vec<Token>,
    pub progressed_tokens: Vec<Token>,
    pub transit_aspects: Vec<TransitAspect>,
    pub weather: Option<WeatherFacts>,
    /// Lunar phase angle in degrees, 0 = new, 180 = full.
    pub lunar_phase_degrees: f64,
    pub identity: Option<String>,
    pub date: Option<NaiveDate>,
    /// Per-call weighting model override. Negative fractions in an
    /// unvalidated override degrade to zero contribution rather than
    /// failing — token weights clamp non-negative by construction.
    pub weighting_model: Option<WeightingModel>,
}

/// The engine. Configuration is fixed at construction; every `generate`
/// call is an independent pure computation.
#[derive(Debug, Clone)]
pub struct BriefEngine {
    model: WeightingModel,
    tuning: EngineTuning,
    allocator: EnergyAllocator,
    selector: NarrativeSelector,
}

impl Default for BriefEngine {
    fn default() -> Self {
        Self::new(WeightingModel::balanced(), EngineTuning::default())
            .expect("built-in presets validate")
    }
}

impl BriefEngine {
    /// Create an engine, validating the configuration up front. This is
    /// the only failure point — `generate` itself is total.
    pub fn new(model: WeightingModel, tuning: EngineTuning) -> Result<Self, ConfigError> {
        model.validate()?;
        tuning.validate()?;
        let allocator = EnergyAllocator::with_defaults(&tuning);
        let selector = NarrativeSelector::new(tuning.clone());
        Ok(Self {
            model,
            tuning,
            allocator,
            selector,
        })
    }

    /// The engine's default weighting model.
    pub fn model(&self) -> &WeightingModel {
        &self.model
    }

    /// Generate one style brief. Total: every defined input produces a
    /// defined output.
    pub fn generate(&self, input: &GenerationInput) -> OutputContent {
        let date = input.date.unwrap_or_else(|| Utc::now().date_naive());
        let sun_sign = natal_sun_sign(&input.natal_tokens);
        let signature = DailySignature::derive(input.lunar_phase_degrees, date, sun_sign.clone());

        let identity = match input.identity.as_deref() {
            Some(id) if !id.is_empty() => id.to_string(),
            // Stable natal fact, never anything time-varying.
            _ => sun_sign
                .as_deref()
                .and_then(sign_index)
                .map(|i| format!("sun-{i}"))
                .unwrap_or_else(|| "anonymous".to_string()),
        };
        let seed = daily_seed(&identity, date);

        let pools = TokenPools {
            natal: input.natal_tokens.clone(),
            progressed: input.progressed_tokens.clone(),
            transit: adjust::boost_pool(&generators::transit_tokens(&input.transit_aspects)),
            weather: input
                .weather
                .as_ref()
                .map(|w| generators::weather_tokens(w))
                .unwrap_or_default(),
            temporal: generators::temporal_tokens(&signature),
        };

        let model = input.weighting_model.as_ref().unwrap_or(&self.model);
        let merged = aggregate(&pools, model, &self.tuning);
        let analysis = TokenAnalysis::analyze(&merged);

        let confidence = modulate_by_dignity(
            assess_confidence(&analysis, &self.tuning),
            dominant_dignity(&merged),
        );
        let breakdown = self.allocator.allocate(&merged);
        let narrative = self.selector.select(&analysis, &signature, seed, confidence);
        debug!(seed, ?confidence, "generated brief");

        assemble::assemble(
            narrative,
            &analysis,
            breakdown,
            confidence,
            input.weather.as_ref(),
            seed,
        )
    }
}

/// Sun sign from the natal pool, when a Sun-sourced token carries one.
fn natal_sun_sign(natal_tokens: &[Token]) -> Option<String> {
    natal_tokens
        .iter()
        .find(|t| t.planet_source.as_deref() == Some("Sun") && t.sign_source.is_some())
        .and_then(|t| t.sign_source.clone())
}

/// Dignity of the heaviest token that carries full planetary provenance.
/// Ties keep the earlier token, so the result is deterministic.
fn dominant_dignity(tokens: &[Token]) -> Option<DignityLevel> {
    let mut best: Option<&Token> = None;
    for token in tokens {
        if token.planet_source.is_none() || token.sign_source.is_none() {
            continue;
        }
        if best.is_none_or(|b| token.weight > b.weight) {
            best = Some(token);
        }
    }
    best.map(|t| {
        assess_dignity(
            t.planet_source.as_deref().unwrap_or_default(),
            t.sign_source.as_deref().unwrap_or_default(),
        )
    })
}

/// Dignity modulates phrasing confidence only — never numeric weights. A
/// challenged placement softens the voice one level; a strong one firms
/// up a Medium read.
fn modulate_by_dignity(
    confidence: ConfidenceLevel,
    dignity: Option<DignityLevel>,
) -> ConfidenceLevel {
    match (confidence, dignity) {
        (ConfidenceLevel::High, Some(DignityLevel::Challenged)) => ConfidenceLevel::Medium,
        (ConfidenceLevel::Medium, Some(DignityLevel::Challenged)) => ConfidenceLevel::Moderate,
        (ConfidenceLevel::Medium, Some(DignityLevel::Strong)) => ConfidenceLevel::High,
        (level, _) => level,
    }
}
