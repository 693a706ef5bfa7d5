//! Planetary lookup data: essential dignities and orbital speed classes.
//!
//! These are plain tables, not astronomy. Dignity assessment is used only
//! to modulate phrasing confidence downstream — it never changes numeric
//! token weights. Unknown planet or sign names resolve to neutral values
//! rather than erroring; upstream collaborators may send bodies we do not
//! model (asteroids, hypothetical points).

use serde::{Deserialize, Serialize};

/// How well a planet is placed in a given sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DignityLevel {
    /// Domicile or exaltation.
    Strong,
    /// Peregrine — no essential dignity either way.
    Neutral,
    /// Detriment or fall.
    Challenged,
}

/// Orbital speed bucket, coarse. Drives the freshness boost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpeedClass {
    /// The Moon — laps the zodiac in under a month.
    Lunar,
    /// Sun, Mercury, Venus — weeks per sign.
    Fast,
    /// Mars — roughly two months per sign.
    Mid,
    /// Jupiter, Saturn — a year or more per sign.
    Slow,
    /// Uranus, Neptune, Pluto — generational.
    Glacial,
}

/// The twelve signs in zodiacal order.
pub const SIGNS: [&str; 12] = [
    "Aries",
    "Taurus",
    "Gemini",
    "Cancer",
    "Leo",
    "Virgo",
    "Libra",
    "Scorpio",
    "Sagittarius",
    "Capricorn",
    "Aquarius",
    "Pisces",
];

/// Zodiacal index of a sign name, if recognized.
pub fn sign_index(sign: &str) -> Option<usize> {
    SIGNS.iter().position(|s| s.eq_ignore_ascii_case(sign))
}

fn opposite_sign(sign: &str) -> Option<&'static str> {
    sign_index(sign).map(|i| SIGNS[(i + 6) % 12])
}

/// Domicile signs per planet (traditional plus modern rulerships).
fn domiciles(planet: &str) -> &'static [&'static str] {
    match planet {
        "Sun" => &["Leo"],
        "Moon" => &["Cancer"],
        "Mercury" => &["Gemini", "Virgo"],
        "Venus" => &["Taurus", "Libra"],
        "Mars" => &["Aries", "Scorpio"],
        "Jupiter" => &["Sagittarius", "Pisces"],
        "Saturn" => &["Capricorn", "Aquarius"],
        "Uranus" => &["Aquarius"],
        "Neptune" => &["Pisces"],
        "Pluto" => &["Scorpio"],
        _ => &[],
    }
}

/// Exaltation sign per planet, where one is traditionally assigned.
fn exaltation(planet: &str) -> Option<&'static str> {
    match planet {
        "Sun" => Some("Aries"),
        "Moon" => Some("Taurus"),
        "Mercury" => Some("Virgo"),
        "Venus" => Some("Pisces"),
        "Mars" => Some("Capricorn"),
        "Jupiter" => Some("Cancer"),
        "Saturn" => Some("Libra"),
        _ => None,
    }
}

/// Assess the essential dignity of `planet` in `sign`.
///
/// Domicile/exaltation ⇒ `Strong`; detriment (opposite domicile) or fall
/// (opposite exaltation) ⇒ `Challenged`; everything else, including
/// unknown planet or sign names, ⇒ `Neutral`.
pub fn assess_dignity(planet: &str, sign: &str) -> DignityLevel {
    let Some(_) = sign_index(sign) else {
        return DignityLevel::Neutral;
    };
    let homes = domiciles(planet);
    if homes.iter().any(|s| s.eq_ignore_ascii_case(sign)) {
        return DignityLevel::Strong;
    }
    if let Some(exalt) = exaltation(planet) {
        if exalt.eq_ignore_ascii_case(sign) {
            return DignityLevel::Strong;
        }
        if opposite_sign(exalt).is_some_and(|o| o.eq_ignore_ascii_case(sign)) {
            return DignityLevel::Challenged;
        }
    }
    if homes
        .iter()
        .filter_map(|h| opposite_sign(h))
        .any(|o| o.eq_ignore_ascii_case(sign))
    {
        return DignityLevel::Challenged;
    }
    DignityLevel::Neutral
}

/// Speed class of a planet, if recognized.
pub fn speed_class(planet: &str) -> Option<SpeedClass> {
    match planet {
        "Moon" => Some(SpeedClass::Lunar),
        "Sun" | "Mercury" | "Venus" => Some(SpeedClass::Fast),
        "Mars" => Some(SpeedClass::Mid),
        "Jupiter" | "Saturn" => Some(SpeedClass::Slow),
        "Uranus" | "Neptune" | "Pluto" => Some(SpeedClass::Glacial),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domicile_is_strong() {
        assert_eq!(assess_dignity("Venus", "Taurus"), DignityLevel::Strong);
        assert_eq!(assess_dignity("Mars", "Scorpio"), DignityLevel::Strong);
    }

    #[test]
    fn exaltation_is_strong() {
        assert_eq!(assess_dignity("Sun", "Aries"), DignityLevel::Strong);
        assert_eq!(assess_dignity("Saturn", "Libra"), DignityLevel::Strong);
    }

    #[test]
    fn detriment_is_challenged() {
        // Scorpio opposes Taurus, a Venus domicile.
        assert_eq!(assess_dignity("Venus", "Scorpio"), DignityLevel::Challenged);
        // Cancer opposes Capricorn, a Saturn domicile.
        assert_eq!(assess_dignity("Saturn", "Cancer"), DignityLevel::Challenged);
    }

    #[test]
    fn fall_is_challenged() {
        // Libra opposes Aries, the Sun's exaltation.
        assert_eq!(assess_dignity("Sun", "Libra"), DignityLevel::Challenged);
        // Scorpio opposes Taurus, the Moon's exaltation.
        assert_eq!(assess_dignity("Moon", "Scorpio"), DignityLevel::Challenged);
    }

    #[test]
    fn peregrine_is_neutral() {
        assert_eq!(assess_dignity("Venus", "Gemini"), DignityLevel::Neutral);
    }

    #[test]
    fn unknown_names_are_neutral() {
        assert_eq!(assess_dignity("Chiron", "Aries"), DignityLevel::Neutral);
        assert_eq!(assess_dignity("Venus", "Ophiuchus"), DignityLevel::Neutral);
    }

    #[test]
    fn sign_lookup_is_case_insensitive() {
        assert_eq!(sign_index("taurus"), Some(1));
        assert_eq!(assess_dignity("Venus", "taurus"), DignityLevel::Strong);
    }

    #[test]
    fn speed_classes() {
        assert_eq!(speed_class("Moon"), Some(SpeedClass::Lunar));
        assert_eq!(speed_class("Venus"), Some(SpeedClass::Fast));
        assert_eq!(speed_class("Mars"), Some(SpeedClass::Mid));
        assert_eq!(speed_class("Saturn"), Some(SpeedClass::Slow));
        assert_eq!(speed_class("Pluto"), Some(SpeedClass::Glacial));
        assert_eq!(speed_class("Vesta"), None);
    }
}
