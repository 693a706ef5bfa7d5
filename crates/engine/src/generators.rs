//! Thin token generators — adapters from external inputs to token pools.
//!
//! Chart math, weather fetching, and phase computation happen elsewhere;
//! these functions only translate their typed outputs (aspect records,
//! weather facts, the daily signature) into weighted tokens. The tables
//! here are the vocabulary the selector and allocator key off.

use astrobrief_core::aspect::TransitAspect;
use astrobrief_core::astro::sign_index;
use astrobrief_core::content::WeatherFacts;
use astrobrief_core::signature::{DailySignature, MoonPhase, PlanetaryDay};
use astrobrief_core::token::{Origin, Token, TokenCategory};
use astrobrief_core::AspectType;

/// Semantic quality of each aspect type: what it says, where it says it,
/// and how loudly when exact.
fn aspect_quality(aspect: AspectType) -> (&'static str, TokenCategory, f64) {
    match aspect {
        AspectType::Conjunction => ("bold", TokenCategory::Mood, 1.2),
        AspectType::Opposition => ("dramatic", TokenCategory::Expression, 1.1),
        AspectType::Square => ("restless", TokenCategory::Mood, 1.1),
        AspectType::Trine => ("silky", TokenCategory::Texture, 1.0),
        AspectType::Sextile => ("playful", TokenCategory::Expression, 0.9),
        AspectType::Quincunx => ("experimental", TokenCategory::Expression, 0.8),
        AspectType::Semisextile => ("soft", TokenCategory::ColorQuality, 0.6),
        AspectType::Semisquare => ("electric", TokenCategory::Mood, 0.7),
        AspectType::Sesquiquadrate => ("sculptural", TokenCategory::Structure, 0.7),
    }
}

/// Weight decay as an aspect drifts from exact. A 10° orb is the edge of
/// relevance but never fully silent.
fn orb_decay(orb: f64) -> f64 {
    (1.0 - orb / 10.0).clamp(0.15, 1.0)
}

/// Translate transit aspect records into transit-origin tokens.
pub fn transit_tokens(aspects: &[TransitAspect]) -> Vec<Token> {
    aspects
        .iter()
        .map(|aspect| {
            let (name, category, base) = aspect_quality(aspect.aspect_type);
            Token::new(name, category, base * orb_decay(aspect.orb), Origin::Transit)
                .with_planet(aspect.transit_planet.clone())
                .with_aspect(aspect.aspect_type.name())
        })
        .collect()
}

/// Translate observed weather into weather-origin tokens.
///
/// Missing facts produce no tokens; an empty pool is not an error.
pub fn weather_tokens(weather: &WeatherFacts) -> Vec<Token> {
    let mut tokens = Vec::new();

    if let Some(temp) = weather.temperature {
        let (name, weight) = match temp {
            t if t < 5.0 => ("plush", 1.0),
            t if t < 15.0 => ("crisp", 0.8),
            t if t < 25.0 => ("breathable", 0.8),
            _ => ("airy", 1.0),
        };
        tokens.push(Token::new(name, TokenCategory::Texture, weight, Origin::Weather));
    }

    if let Some(condition) = weather.condition.as_deref() {
        let c = condition.to_ascii_lowercase();
        let quality = if c.contains("storm") {
            Some(("dramatic", TokenCategory::Expression, 1.0))
        } else if c.contains("rain") || c.contains("drizzle") {
            Some(("muted", TokenCategory::ColorQuality, 0.9))
        } else if c.contains("snow") {
            Some(("soft", TokenCategory::ColorQuality, 0.9))
        } else if c.contains("clear") || c.contains("sun") {
            Some(("luminous", TokenCategory::ColorQuality, 0.9))
        } else if c.contains("cloud") || c.contains("overcast") {
            Some(("slate", TokenCategory::Color, 0.7))
        } else {
            // Unknown condition labels contribute nothing.
            None
        };
        if let Some((name, category, weight)) = quality {
            tokens.push(Token::new(name, category, weight, Origin::Weather));
        }
    }

    tokens
}

fn phase_quality(phase: MoonPhase) -> (&'static str, TokenCategory, f64) {
    match phase {
        MoonPhase::New => ("understated", TokenCategory::Expression, 0.8),
        MoonPhase::WaxingCrescent => ("tender", TokenCategory::Mood, 0.7),
        MoonPhase::FirstQuarter => ("structured", TokenCategory::Structure, 0.8),
        MoonPhase::WaxingGibbous => ("polished", TokenCategory::Expression, 0.8),
        MoonPhase::Full => ("dramatic", TokenCategory::Expression, 1.0),
        MoonPhase::WaningGibbous => ("serene", TokenCategory::Mood, 0.7),
        MoonPhase::LastQuarter => ("grounded", TokenCategory::Mood, 0.8),
        MoonPhase::WaningCrescent => ("dreamy", TokenCategory::Mood, 0.7),
    }
}

fn day_quality(day: PlanetaryDay) -> (&'static str, TokenCategory, f64) {
    match day {
        PlanetaryDay::Sun => ("gold", TokenCategory::Color, 0.6),
        PlanetaryDay::Moon => ("ivory", TokenCategory::Color, 0.6),
        PlanetaryDay::Mars => ("crimson", TokenCategory::Color, 0.6),
        PlanetaryDay::Mercury => ("electric", TokenCategory::Mood, 0.6),
        PlanetaryDay::Jupiter => ("saturated", TokenCategory::ColorQuality, 0.6),
        PlanetaryDay::Venus => ("sensual", TokenCategory::Expression, 0.7),
        PlanetaryDay::Saturn => ("tailored", TokenCategory::Structure, 0.7),
    }
}

/// Elemental undertone of a sun sign, by triplicity.
fn element_quality(sign: &str) -> Option<(&'static str, TokenCategory, f64)> {
    let index = sign_index(sign)?;
    Some(match index % 4 {
        0 => ("bold", TokenCategory::Mood, 0.5),
        1 => ("grounded", TokenCategory::Mood, 0.5),
        2 => ("airy", TokenCategory::Texture, 0.5),
        _ => ("dreamy", TokenCategory::Mood, 0.5),
    })
}

/// Translate the daily signature into temporal-origin tokens. A known sun
/// sign contributes its elemental undertone; unknown sign names are
/// skipped.
pub fn temporal_tokens(signature: &DailySignature) -> Vec<Token> {
    let (phase_name, phase_category, phase_weight) = phase_quality(signature.moon_phase);
    let (day_name, day_category, day_weight) = day_quality(signature.planetary_day);
    let mut tokens = vec![
        Token::new(phase_name, phase_category, phase_weight, Origin::Temporal),
        Token::new(day_name, day_category, day_weight, Origin::Temporal)
            .with_planet(signature.planetary_day.planet()),
    ];
    if let Some(sign) = signature.sun_sign.as_deref() {
        if let Some((name, category, weight)) = element_quality(sign) {
            tokens.push(Token::new(name, category, weight, Origin::Temporal).with_sign(sign));
        }
    }
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn transit_tokens_carry_provenance() {
        let aspects = vec![TransitAspect::new(
            "Moon",
            "Venus",
            AspectType::Square,
            1.0,
        )];
        let tokens = transit_tokens(&aspects);
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].name, "restless");
        assert_eq!(tokens[0].origin, Origin::Transit);
        assert_eq!(tokens[0].planet_source.as_deref(), Some("Moon"));
        assert_eq!(tokens[0].aspect_source.as_deref(), Some("Square"));
    }

    #[test]
    fn tight_orb_outweighs_wide_orb() {
        let tight = transit_tokens(&[TransitAspect::new("Sun", "Moon", AspectType::Trine, 0.5)]);
        let wide = transit_tokens(&[TransitAspect::new("Sun", "Moon", AspectType::Trine, 8.0)]);
        assert!(tight[0].weight > wide[0].weight);
    }

    #[test]
    fn very_wide_orb_never_reaches_zero() {
        let tokens = transit_tokens(&[TransitAspect::new("Sun", "Moon", AspectType::Trine, 30.0)]);
        assert!(tokens[0].weight > 0.0);
    }

    #[test]
    fn weather_cold_and_rainy() {
        let facts = WeatherFacts {
            temperature: Some(2.0),
            condition: Some("Light Rain".into()),
        };
        let tokens = weather_tokens(&facts);
        let names: Vec<&str> = tokens.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["plush", "muted"]);
        assert!(tokens.iter().all(|t| t.origin == Origin::Weather));
    }

    #[test]
    fn weather_unknown_condition_only_yields_temperature_token() {
        let facts = WeatherFacts {
            temperature: Some(20.0),
            condition: Some("haboob".into()),
        };
        let tokens = weather_tokens(&facts);
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].name, "breathable");
    }

    #[test]
    fn empty_weather_yields_no_tokens() {
        assert!(weather_tokens(&WeatherFacts::default()).is_empty());
    }

    #[test]
    fn temporal_tokens_follow_phase_and_day() {
        // 2024-06-21 was a Friday; 180° is a full moon.
        let date = NaiveDate::from_ymd_opt(2024, 6, 21).unwrap();
        let signature = DailySignature::derive(180.0, date, None);
        let tokens = temporal_tokens(&signature);
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].name, "dramatic");
        assert_eq!(tokens[1].name, "sensual");
        assert_eq!(tokens[1].planet_source.as_deref(), Some("Venus"));
        assert!(tokens.iter().all(|t| t.origin == Origin::Temporal));
    }

    #[test]
    fn sun_sign_contributes_elemental_token() {
        let date = NaiveDate::from_ymd_opt(2024, 6, 21).unwrap();

        // Fire sign: a bold undertone carrying the sign provenance.
        let leo = DailySignature::derive(180.0, date, Some("Leo".into()));
        let tokens = temporal_tokens(&leo);
        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[2].name, "bold");
        assert_eq!(tokens[2].sign_source.as_deref(), Some("Leo"));
        assert_eq!(tokens[2].origin, Origin::Temporal);

        // Water sign: dreamy.
        let pisces = DailySignature::derive(180.0, date, Some("Pisces".into()));
        assert_eq!(temporal_tokens(&pisces)[2].name, "dreamy");

        // Unknown sign names are skipped.
        let odd = DailySignature::derive(180.0, date, Some("Ophiuchus".into()));
        assert_eq!(temporal_tokens(&odd).len(), 2);
    }
}
