//! The tiered narrative selector — an ordered decision list.
//!
//! Rules are evaluated top to bottom and the first satisfied tier wins,
//! even when a later tier would also match. The declared order is part of
//! the contract: reordering changes observable output for the same
//! inputs. Five tiers, narrowing:
//!
//! 1. Specific token combinations, optionally gated on signature facts
//! 2. A single dominant token above the high single-token threshold
//! 3. Primary characteristic per category, filled into a template
//! 4. Overall energy direction
//! 5. The absolute fallback
//!
//! Selection within a tier's bank is `(seed * multiplier) % len`, so the
//! whole path is deterministic given (analysis, signature, seed).

use crate::analysis::TokenAnalysis;
use crate::narrative::banks::{self, PhraseBank};
use astrobrief_config::EngineTuning;
use astrobrief_core::content::ConfidenceLevel;
use astrobrief_core::signature::{DailySignature, MoonPhase, PlanetaryDay};
use astrobrief_core::token::TokenCategory;
use tracing::debug;

/// The qualitative direction of the day, derived when nothing louder
/// matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnergyDirection {
    Flowing,
    Grounded,
    Innovative,
    Nurturing,
    Intense,
    Balanced,
}

/// A Tier-1 rule: every listed token must be present at or above the
/// combination threshold, and any signature gates must hold.
struct ComboRule {
    required: &'static [&'static str],
    moon_phase: Option<MoonPhase>,
    planetary_day: Option<PlanetaryDay>,
    sun_sign: Option<&'static str>,
    bank: PhraseBank,
}

/// Tier-1 rules in contract order. First match wins.
const COMBO_RULES: &[ComboRule] = &[
    ComboRule {
        required: &["luxurious", "sensual"],
        moon_phase: None,
        planetary_day: None,
        sun_sign: None,
        bank: banks::VELVET_EVENING,
    },
    ComboRule {
        required: &["dramatic", "bold"],
        moon_phase: Some(MoonPhase::Full),
        planetary_day: None,
        sun_sign: None,
        bank: banks::FULL_MOON_DRAMA,
    },
    ComboRule {
        required: &["sensual", "plush"],
        moon_phase: None,
        planetary_day: Some(PlanetaryDay::Venus),
        sun_sign: None,
        bank: banks::VENUS_TOUCH,
    },
    ComboRule {
        required: &["bold", "gold"],
        moon_phase: None,
        planetary_day: None,
        sun_sign: Some("Leo"),
        bank: banks::GOLDEN_HOUR,
    },
    ComboRule {
        required: &["crisp", "tailored"],
        moon_phase: None,
        planetary_day: None,
        sun_sign: None,
        bank: banks::SHARP_UTILITY,
    },
    ComboRule {
        required: &["dreamy", "silky"],
        moon_phase: None,
        planetary_day: None,
        sun_sign: None,
        bank: banks::ROMANTIC_DRIFT,
    },
    ComboRule {
        required: &["electric", "experimental"],
        moon_phase: None,
        planetary_day: None,
        sun_sign: None,
        bank: banks::LIVE_WIRE,
    },
    ComboRule {
        required: &["grounded", "matte"],
        moon_phase: None,
        planetary_day: Some(PlanetaryDay::Saturn),
        sun_sign: None,
        bank: banks::QUIET_AUTHORITY,
    },
    ComboRule {
        required: &["playful", "saturated"],
        moon_phase: None,
        planetary_day: None,
        sun_sign: None,
        bank: banks::COLOR_POP,
    },
];

/// Tier-2 dominant-token banks, by token name.
const DOMINANT_BANKS: &[(&str, PhraseBank)] = &[
    ("bold", banks::DOMINANT_BOLD),
    ("dramatic", banks::DOMINANT_DRAMATIC),
    ("silky", banks::DOMINANT_SILKY),
    ("crisp", banks::DOMINANT_CRISP),
    ("restless", banks::DOMINANT_RESTLESS),
    ("sensual", banks::DOMINANT_SENSUAL),
    ("dreamy", banks::DOMINANT_DREAMY),
    ("grounded", banks::DOMINANT_GROUNDED),
];

/// Tier-4 direction markers: names whose weight votes for a direction.
const DIRECTION_MARKERS: &[(EnergyDirection, &[&str])] = &[
    (
        EnergyDirection::Flowing,
        &["silky", "draped", "dreamy", "serene", "airy"],
    ),
    (
        EnergyDirection::Grounded,
        &["grounded", "matte", "crisp", "tailored", "slate"],
    ),
    (
        EnergyDirection::Innovative,
        &["experimental", "electric", "sculptural", "indigo"],
    ),
    (
        EnergyDirection::Nurturing,
        &["tender", "plush", "soft", "ivory", "breathable"],
    ),
    (
        EnergyDirection::Intense,
        &["bold", "dramatic", "restless", "crimson", "saturated"],
    ),
];

/// Derive the day's energy direction from marker-token weights. The
/// heaviest direction wins; declaration order breaks ties; an empty or
/// markerless pool is Balanced.
pub fn energy_direction(analysis: &TokenAnalysis) -> EnergyDirection {
    let mut best = EnergyDirection::Balanced;
    let mut best_weight = 0.0;
    for (direction, markers) in DIRECTION_MARKERS {
        let weight: f64 = markers.iter().map(|m| analysis.weight_of(m)).sum();
        if weight > best_weight {
            best = *direction;
            best_weight = weight;
        }
    }
    best
}

fn direction_bank(direction: EnergyDirection) -> PhraseBank {
    match direction {
        EnergyDirection::Flowing => banks::DIRECTION_FLOWING,
        EnergyDirection::Grounded => banks::DIRECTION_GROUNDED,
        EnergyDirection::Innovative => banks::DIRECTION_INNOVATIVE,
        EnergyDirection::Nurturing => banks::DIRECTION_NURTURING,
        EnergyDirection::Intense => banks::DIRECTION_INTENSE,
        EnergyDirection::Balanced => banks::DIRECTION_BALANCED,
    }
}

fn fill_template(template: &str, analysis: &TokenAnalysis) -> String {
    let slot = |category: TokenCategory| {
        analysis
            .dominant_in(category)
            .map(|(name, _)| name.to_string())
            .unwrap_or_default()
    };
    template
        .replace("{texture}", &slot(TokenCategory::Texture))
        .replace("{color}", &slot(TokenCategory::Color))
        .replace("{mood}", &slot(TokenCategory::Mood))
}

/// The narrative selector. Stateless apart from its tuning thresholds.
#[derive(Debug, Clone)]
pub struct NarrativeSelector {
    tuning: EngineTuning,
}

impl NarrativeSelector {
    pub fn new(tuning: EngineTuning) -> Self {
        Self { tuning }
    }

    /// Select the narrative for one generation pass. Total: always
    /// returns non-empty text.
    pub fn select(
        &self,
        analysis: &TokenAnalysis,
        signature: &DailySignature,
        seed: u64,
        confidence: ConfidenceLevel,
    ) -> String {
        let body = self.select_body(analysis, signature, seed);
        match confidence {
            ConfidenceLevel::High => body,
            ConfidenceLevel::Medium => {
                format!("{}{}", banks::SOFTENER_MEDIUM.pick(seed), body)
            }
            ConfidenceLevel::Moderate => {
                format!("{}{}", banks::SOFTENER_MODERATE.pick(seed), body)
            }
        }
    }

    fn select_body(
        &self,
        analysis: &TokenAnalysis,
        signature: &DailySignature,
        seed: u64,
    ) -> String {
        // Tier 1: specific combinations.
        for rule in COMBO_RULES {
            let tokens_present = rule
                .required
                .iter()
                .all(|name| analysis.contains(name, self.tuning.combination_weight_threshold));
            let phase_ok = rule.moon_phase.is_none_or(|p| p == signature.moon_phase);
            let day_ok = rule
                .planetary_day
                .is_none_or(|d| d == signature.planetary_day);
            let sign_ok = rule.sun_sign.is_none_or(|s| {
                signature
                    .sun_sign
                    .as_deref()
                    .is_some_and(|sig| sig.eq_ignore_ascii_case(s))
            });
            if tokens_present && phase_ok && day_ok && sign_ok {
                debug!(required = ?rule.required, "tier-1 combination matched");
                return rule.bank.pick(seed).to_string();
            }
        }

        // Tier 2: one clearly dominant token.
        if let Some((name, weight)) = analysis.dominant() {
            if weight >= self.tuning.dominant_weight_threshold {
                if let Some((_, bank)) = DOMINANT_BANKS.iter().find(|(n, _)| *n == name) {
                    debug!(token = name, weight, "tier-2 dominant token matched");
                    return bank.pick(seed).to_string();
                }
            }
        }

        // Tier 3: primary characteristic per category.
        let texture = analysis.dominant_in(TokenCategory::Texture);
        let color = analysis.dominant_in(TokenCategory::Color);
        let mood = analysis.dominant_in(TokenCategory::Mood);
        let template = match (texture.is_some(), color.is_some(), mood.is_some()) {
            (true, true, true) => Some(banks::PRIMARY_FULL),
            (true, _, _) => Some(banks::PRIMARY_TEXTURE),
            (_, true, _) => Some(banks::PRIMARY_COLOR),
            (_, _, true) => Some(banks::PRIMARY_MOOD),
            (false, false, false) => None,
        };
        if let Some(bank) = template {
            debug!("tier-3 primary characteristic matched");
            return fill_template(bank.pick(seed), analysis);
        }

        // Tier 4: energy direction. Reachable when the pool has only
        // structure/expression/color-quality tokens.
        if !analysis.is_empty() {
            let direction = energy_direction(analysis);
            debug!(?direction, "tier-4 energy direction");
            return direction_bank(direction).pick(seed).to_string();
        }

        // Tier 5: the absolute fallback.
        debug!("tier-5 fallback");
        banks::FALLBACK.pick(seed).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use astrobrief_core::token::{Origin, Token};
    use chrono::NaiveDate;

    fn selector() -> NarrativeSelector {
        NarrativeSelector::new(EngineTuning::default())
    }

    fn signature() -> DailySignature {
        // 2024-03-06 was a Wednesday; 90° is a first-quarter moon.
        DailySignature::derive(90.0, NaiveDate::from_ymd_opt(2024, 3, 6).unwrap(), None)
    }

    fn token(name: &str, category: TokenCategory, weight: f64) -> Token {
        Token::new(name, category, weight, Origin::Transit)
    }

    fn in_bank(bank: &PhraseBank, text: &str) -> bool {
        bank.phrases.iter().any(|p| text.ends_with(p))
    }

    #[test]
    fn combination_tier_matches_first() {
        let tokens = vec![
            token("luxurious", TokenCategory::Texture, 1.0),
            token("sensual", TokenCategory::Expression, 1.0),
        ];
        let analysis = TokenAnalysis::analyze(&tokens);
        let text = selector().select(&analysis, &signature(), 3, ConfidenceLevel::High);
        assert!(in_bank(&banks::VELVET_EVENING, &text), "got: {text}");
    }

    #[test]
    fn earlier_tier_wins_over_later_combination() {
        // Satisfies both the velvet-evening combo and the crisp+tailored
        // combo; the declared order says velvet wins.
        let tokens = vec![
            token("luxurious", TokenCategory::Texture, 1.0),
            token("sensual", TokenCategory::Expression, 1.0),
            token("crisp", TokenCategory::Texture, 1.0),
            token("tailored", TokenCategory::Structure, 1.0),
        ];
        let analysis = TokenAnalysis::analyze(&tokens);
        let text = selector().select(&analysis, &signature(), 9, ConfidenceLevel::High);
        assert!(in_bank(&banks::VELVET_EVENING, &text), "got: {text}");
    }

    #[test]
    fn combination_outranks_dominant_token() {
        // A huge dominant token would satisfy tier 2, but the tier-1
        // combination still wins.
        let tokens = vec![
            token("luxurious", TokenCategory::Texture, 1.0),
            token("sensual", TokenCategory::Expression, 1.0),
            token("bold", TokenCategory::Mood, 10.0),
        ];
        let analysis = TokenAnalysis::analyze(&tokens);
        let text = selector().select(&analysis, &signature(), 1, ConfidenceLevel::High);
        assert!(in_bank(&banks::VELVET_EVENING, &text), "got: {text}");
    }

    #[test]
    fn moon_phase_gate_blocks_combination() {
        let tokens = vec![
            token("dramatic", TokenCategory::Expression, 1.0),
            token("bold", TokenCategory::Mood, 1.0),
        ];
        let analysis = TokenAnalysis::analyze(&tokens);
        // First-quarter moon: the full-moon drama combo must not fire.
        let text = selector().select(&analysis, &signature(), 2, ConfidenceLevel::High);
        assert!(!in_bank(&banks::FULL_MOON_DRAMA, &text));

        // Full moon: now it does.
        let full = DailySignature::derive(180.0, NaiveDate::from_ymd_opt(2024, 3, 6).unwrap(), None);
        let text = selector().select(&analysis, &full, 2, ConfidenceLevel::High);
        assert!(in_bank(&banks::FULL_MOON_DRAMA, &text), "got: {text}");
    }

    #[test]
    fn sun_sign_gate_blocks_combination() {
        let tokens = vec![
            token("bold", TokenCategory::Mood, 1.0),
            token("gold", TokenCategory::Color, 1.0),
        ];
        let analysis = TokenAnalysis::analyze(&tokens);
        let date = NaiveDate::from_ymd_opt(2024, 3, 6).unwrap();

        // No sun sign known: the Leo-gated combo must not fire.
        let text = selector().select(&analysis, &signature(), 2, ConfidenceLevel::High);
        assert!(!in_bank(&banks::GOLDEN_HOUR, &text));

        // A Virgo sun fails the gate too.
        let virgo = DailySignature::derive(90.0, date, Some("Virgo".into()));
        let text = selector().select(&analysis, &virgo, 2, ConfidenceLevel::High);
        assert!(!in_bank(&banks::GOLDEN_HOUR, &text));

        // A Leo sun opens it, case-insensitively.
        let leo = DailySignature::derive(90.0, date, Some("leo".into()));
        let text = selector().select(&analysis, &leo, 2, ConfidenceLevel::High);
        assert!(in_bank(&banks::GOLDEN_HOUR, &text), "got: {text}");
    }

    #[test]
    fn dominant_token_tier_fires_above_threshold() {
        let tokens = vec![
            token("restless", TokenCategory::Mood, 2.5),
            token("slate", TokenCategory::Color, 0.3),
        ];
        let analysis = TokenAnalysis::analyze(&tokens);
        let text = selector().select(&analysis, &signature(), 4, ConfidenceLevel::High);
        assert!(in_bank(&banks::DOMINANT_RESTLESS, &text), "got: {text}");
    }

    #[test]
    fn below_threshold_falls_to_primary_characteristics() {
        let tokens = vec![
            token("silky", TokenCategory::Texture, 1.0),
            token("gold", TokenCategory::Color, 0.5),
            token("serene", TokenCategory::Mood, 0.4),
        ];
        let analysis = TokenAnalysis::analyze(&tokens);
        let text = selector().select(&analysis, &signature(), 5, ConfidenceLevel::High);
        assert!(text.contains("silky") || text.contains("gold") || text.contains("serene"));
    }

    #[test]
    fn template_slots_are_filled() {
        let tokens = vec![
            token("silky", TokenCategory::Texture, 1.0),
            token("indigo", TokenCategory::Color, 0.9),
            token("serene", TokenCategory::Mood, 0.8),
        ];
        let analysis = TokenAnalysis::analyze(&tokens);
        let text = selector().select(&analysis, &signature(), 7, ConfidenceLevel::High);
        assert!(!text.contains('{'), "unfilled template: {text}");
    }

    #[test]
    fn direction_tier_for_expression_only_pool() {
        let tokens = vec![token("experimental", TokenCategory::Expression, 0.5)];
        let analysis = TokenAnalysis::analyze(&tokens);
        let text = selector().select(&analysis, &signature(), 6, ConfidenceLevel::High);
        assert!(in_bank(&banks::DIRECTION_INNOVATIVE, &text), "got: {text}");
    }

    #[test]
    fn empty_pool_reaches_fallback() {
        let analysis = TokenAnalysis::analyze(&[]);
        let text = selector().select(&analysis, &signature(), 8, ConfidenceLevel::High);
        assert!(in_bank(&banks::FALLBACK, &text), "got: {text}");
        assert!(!text.is_empty());
    }

    #[test]
    fn selection_is_deterministic() {
        let tokens = vec![token("crisp", TokenCategory::Texture, 1.0)];
        let analysis = TokenAnalysis::analyze(&tokens);
        let a = selector().select(&analysis, &signature(), 99, ConfidenceLevel::Medium);
        let b = selector().select(&analysis, &signature(), 99, ConfidenceLevel::Medium);
        assert_eq!(a, b);
    }

    #[test]
    fn confidence_softens_the_lead_in() {
        let analysis = TokenAnalysis::analyze(&[]);
        let high = selector().select(&analysis, &signature(), 1, ConfidenceLevel::High);
        let moderate = selector().select(&analysis, &signature(), 1, ConfidenceLevel::Moderate);
        assert!(moderate.len() > high.len());
        assert!(moderate.ends_with(&high));
    }

    #[test]
    fn direction_derivation() {
        let flowing = TokenAnalysis::analyze(&[
            token("silky", TokenCategory::Texture, 2.0),
            token("bold", TokenCategory::Mood, 0.5),
        ]);
        assert_eq!(energy_direction(&flowing), EnergyDirection::Flowing);

        let none = TokenAnalysis::analyze(&[token("ineffable", TokenCategory::Mood, 1.0)]);
        assert_eq!(energy_direction(&none), EnergyDirection::Balanced);
    }
}
