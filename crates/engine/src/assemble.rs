//! Final assembly: narrative plus auxiliary derived fields, packaged into
//! one immutable [`OutputContent`]. Pure — no side effects, no I/O.

use crate::analysis::TokenAnalysis;
use crate::narrative::banks;
use astrobrief_core::content::{ConfidenceLevel, OutputContent, WeatherFacts};
use astrobrief_core::energy::{EnergyBreakdown, EnergyCategory};
use astrobrief_core::token::TokenCategory;

/// Per-name contributions to the brightness score, scaled by weight.
const BRIGHTNESS_WEIGHTS: &[(&str, f64)] = &[
    ("luminous", 30.0),
    ("soft", 15.0),
    ("airy", 10.0),
    ("ivory", 10.0),
    ("gold", 8.0),
    ("muted", -25.0),
    ("slate", -15.0),
    ("indigo", -12.0),
    ("matte", -10.0),
];

/// Per-name contributions to the vibrancy score, scaled by weight.
const VIBRANCY_WEIGHTS: &[(&str, f64)] = &[
    ("saturated", 30.0),
    ("crimson", 12.0),
    ("electric", 10.0),
    ("gold", 8.0),
    ("dramatic", 6.0),
    ("muted", -25.0),
    ("soft", -12.0),
    ("slate", -10.0),
    ("understated", -8.0),
];

fn weighted_score(analysis: &TokenAnalysis, table: &[(&str, f64)]) -> u32 {
    let mut score = 50.0;
    for (name, contribution) in table {
        score += analysis.weight_of(name) * contribution;
    }
    score.clamp(0.0, 100.0).round() as u32
}

fn shape_phrase(structure: &str) -> Option<&'static str> {
    match structure {
        "tailored" => Some("a sharp, fitted silhouette"),
        "structured" => Some("clean architectural lines"),
        "draped" => Some("a loose, fluid drape"),
        "relaxed" => Some("an easy, unforced shape"),
        "sculptural" => Some("one deliberate, sculptural volume"),
        _ => None,
    }
}

fn pattern_phrase(expression: &str) -> Option<&'static str> {
    match expression {
        "dramatic" => Some("high-contrast statement prints"),
        "understated" => Some("quiet tonal micro-patterns"),
        "playful" => Some("irregular dots and loose doodles"),
        "sensual" => Some("blurred watercolor florals"),
        "polished" => Some("fine pinstripes"),
        "experimental" => Some("clashing prints, worn deliberately"),
        _ => None,
    }
}

fn accessory_phrase(category: EnergyCategory) -> &'static str {
    match category {
        EnergyCategory::Classic => "a single heirloom piece",
        EnergyCategory::Playful => "stacked color, nothing matching",
        EnergyCategory::Romantic => "something that catches the light at the collarbone",
        EnergyCategory::Utility => "a good belt and a better bag",
        EnergyCategory::Drama => "one oversized statement",
        EnergyCategory::Edge => "metal hardware and intentional asymmetry",
    }
}

fn takeaway_bank(category: EnergyCategory) -> banks::PhraseBank {
    match category {
        EnergyCategory::Classic => banks::TAKEAWAY_CLASSIC,
        EnergyCategory::Playful => banks::TAKEAWAY_PLAYFUL,
        EnergyCategory::Romantic => banks::TAKEAWAY_ROMANTIC,
        EnergyCategory::Utility => banks::TAKEAWAY_UTILITY,
        EnergyCategory::Drama => banks::TAKEAWAY_DRAMA,
        EnergyCategory::Edge => banks::TAKEAWAY_EDGE,
    }
}

/// Package one generation call's results into the output record.
pub fn assemble(
    narrative: String,
    analysis: &TokenAnalysis,
    energy_breakdown: EnergyBreakdown,
    confidence: ConfidenceLevel,
    weather: Option<&WeatherFacts>,
    seed: u64,
) -> OutputContent {
    let textiles = analysis
        .dominant_in(TokenCategory::Texture)
        .map(|(name, _)| format!("{name} fabrics"));

    let colors = match (
        analysis.dominant_in(TokenCategory::ColorQuality),
        analysis.dominant_in(TokenCategory::Color),
    ) {
        (Some((quality, _)), Some((color, _))) => Some(format!("{quality} {color} tones")),
        (Some((quality, _)), None) => Some(format!("{quality} tones")),
        (None, Some((color, _))) => Some(format!("{color} tones")),
        (None, None) => None,
    };

    let shape = analysis
        .dominant_in(TokenCategory::Structure)
        .and_then(|(name, _)| shape_phrase(name))
        .map(String::from);

    let patterns = analysis
        .dominant_in(TokenCategory::Expression)
        .and_then(|(name, _)| pattern_phrase(name))
        .map(String::from);

    let dominant_energy = energy_breakdown.dominant();
    let accessories = Some(accessory_phrase(dominant_energy).to_string());
    let takeaway = Some(takeaway_bank(dominant_energy).pick(seed).to_string());

    OutputContent {
        narrative,
        energy_breakdown,
        brightness: weighted_score(analysis, BRIGHTNESS_WEIGHTS),
        vibrancy: weighted_score(analysis, VIBRANCY_WEIGHTS),
        confidence,
        textiles,
        colors,
        patterns,
        shape,
        accessories,
        takeaway,
        temperature: weather.and_then(|w| w.temperature),
        weather_condition: weather.and_then(|w| w.condition.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use astrobrief_core::token::{Origin, Token};

    fn token(name: &str, category: TokenCategory, weight: f64) -> Token {
        Token::new(name, category, weight, Origin::Transit)
    }

    fn assemble_for(tokens: &[Token]) -> OutputContent {
        let analysis = TokenAnalysis::analyze(tokens);
        assemble(
            "test narrative".into(),
            &analysis,
            EnergyBreakdown::all_classic(),
            ConfidenceLevel::High,
            None,
            7,
        )
    }

    #[test]
    fn empty_pool_gives_neutral_scores() {
        let content = assemble_for(&[]);
        assert_eq!(content.brightness, 50);
        assert_eq!(content.vibrancy, 50);
        assert!(content.textiles.is_none());
        assert!(content.colors.is_none());
        // Accessories and takeaway always exist — the breakdown always
        // has a dominant category.
        assert!(content.accessories.is_some());
        assert!(content.takeaway.is_some());
    }

    #[test]
    fn luminous_lifts_brightness_muted_drops_it() {
        let bright = assemble_for(&[token("luminous", TokenCategory::ColorQuality, 1.0)]);
        let dim = assemble_for(&[token("muted", TokenCategory::ColorQuality, 1.0)]);
        assert!(bright.brightness > 50);
        assert!(dim.brightness < 50);
    }

    #[test]
    fn scores_clamp_to_range() {
        let blinding = assemble_for(&[token("luminous", TokenCategory::ColorQuality, 50.0)]);
        assert_eq!(blinding.brightness, 100);
        let void = assemble_for(&[token("muted", TokenCategory::ColorQuality, 50.0)]);
        assert_eq!(void.brightness, 0);
        assert_eq!(void.vibrancy, 0);
    }

    #[test]
    fn colors_combine_quality_and_hue() {
        let content = assemble_for(&[
            token("muted", TokenCategory::ColorQuality, 1.0),
            token("crimson", TokenCategory::Color, 1.0),
        ]);
        assert_eq!(content.colors.as_deref(), Some("muted crimson tones"));
    }

    #[test]
    fn colors_degrade_to_single_component() {
        let content = assemble_for(&[token("crimson", TokenCategory::Color, 1.0)]);
        assert_eq!(content.colors.as_deref(), Some("crimson tones"));
    }

    #[test]
    fn textiles_from_dominant_texture() {
        let content = assemble_for(&[
            token("silky", TokenCategory::Texture, 2.0),
            token("crisp", TokenCategory::Texture, 1.0),
        ]);
        assert_eq!(content.textiles.as_deref(), Some("silky fabrics"));
    }

    #[test]
    fn shape_and_patterns_from_structure_and_expression() {
        let content = assemble_for(&[
            token("tailored", TokenCategory::Structure, 1.0),
            token("dramatic", TokenCategory::Expression, 1.0),
        ]);
        assert_eq!(content.shape.as_deref(), Some("a sharp, fitted silhouette"));
        assert_eq!(
            content.patterns.as_deref(),
            Some("high-contrast statement prints")
        );
    }

    #[test]
    fn unknown_structure_name_gives_no_shape() {
        let content = assemble_for(&[token("wobbly", TokenCategory::Structure, 1.0)]);
        assert!(content.shape.is_none());
    }

    #[test]
    fn weather_echo_passes_through() {
        let analysis = TokenAnalysis::analyze(&[]);
        let weather = WeatherFacts {
            temperature: Some(18.5),
            condition: Some("clear".into()),
        };
        let content = assemble(
            "n".into(),
            &analysis,
            EnergyBreakdown::all_classic(),
            ConfidenceLevel::High,
            Some(&weather),
            1,
        );
        assert_eq!(content.temperature, Some(18.5));
        assert_eq!(content.weather_condition.as_deref(), Some("clear"));
    }

    #[test]
    fn takeaway_follows_dominant_energy() {
        let analysis = TokenAnalysis::analyze(&[]);
        let breakdown = EnergyBreakdown::from_values([0, 0, 21, 0, 0, 0]);
        let content = assemble(
            "n".into(),
            &analysis,
            breakdown,
            ConfidenceLevel::High,
            None,
            3,
        );
        let takeaway = content.takeaway.unwrap();
        assert!(
            banks::TAKEAWAY_ROMANTIC
                .phrases
                .iter()
                .any(|p| *p == takeaway)
        );
    }
}
