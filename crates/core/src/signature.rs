//! The daily signature: temporal facts the selector keys off.
//!
//! Built from inputs the caller already has (a lunar phase angle and a
//! calendar date) — no ephemeris math happens here.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// The eight-fold lunar phase bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoonPhase {
    New,
    WaxingCrescent,
    FirstQuarter,
    WaxingGibbous,
    Full,
    WaningGibbous,
    LastQuarter,
    WaningCrescent,
}

impl MoonPhase {
    /// Bucket a phase angle in degrees (0 = new, 180 = full) into one of
    /// the eight named phases. Angles outside 0..360 are wrapped.
    pub fn from_degrees(degrees: f64) -> Self {
        let d = degrees.rem_euclid(360.0);
        match d {
            d if d < 22.5 => MoonPhase::New,
            d if d < 67.5 => MoonPhase::WaxingCrescent,
            d if d < 112.5 => MoonPhase::FirstQuarter,
            d if d < 157.5 => MoonPhase::WaxingGibbous,
            d if d < 202.5 => MoonPhase::Full,
            d if d < 247.5 => MoonPhase::WaningGibbous,
            d if d < 292.5 => MoonPhase::LastQuarter,
            d if d < 337.5 => MoonPhase::WaningCrescent,
            _ => MoonPhase::New,
        }
    }

    /// Whether the moon is gaining light.
    pub fn is_waxing(&self) -> bool {
        matches!(
            self,
            MoonPhase::New
                | MoonPhase::WaxingCrescent
                | MoonPhase::FirstQuarter
                | MoonPhase::WaxingGibbous
        )
    }
}

/// The traditional planetary ruler of a weekday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanetaryDay {
    Sun,
    Moon,
    Mars,
    Mercury,
    Jupiter,
    Venus,
    Saturn,
}

impl PlanetaryDay {
    pub fn from_weekday(weekday: Weekday) -> Self {
        match weekday {
            Weekday::Sun => PlanetaryDay::Sun,
            Weekday::Mon => PlanetaryDay::Moon,
            Weekday::Tue => PlanetaryDay::Mars,
            Weekday::Wed => PlanetaryDay::Mercury,
            Weekday::Thu => PlanetaryDay::Jupiter,
            Weekday::Fri => PlanetaryDay::Venus,
            Weekday::Sat => PlanetaryDay::Saturn,
        }
    }

    /// The ruling planet's name.
    pub fn planet(&self) -> &'static str {
        match self {
            PlanetaryDay::Sun => "Sun",
            PlanetaryDay::Moon => "Moon",
            PlanetaryDay::Mars => "Mars",
            PlanetaryDay::Mercury => "Mercury",
            PlanetaryDay::Jupiter => "Jupiter",
            PlanetaryDay::Venus => "Venus",
            PlanetaryDay::Saturn => "Saturn",
        }
    }
}

/// Temporal facts for one generation pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailySignature {
    pub moon_phase: MoonPhase,
    pub planetary_day: PlanetaryDay,
    /// The user's sun sign, when natal facts supplied one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sun_sign: Option<String>,
}

impl DailySignature {
    /// Derive the signature from a phase angle and date.
    pub fn derive(lunar_phase_degrees: f64, date: NaiveDate, sun_sign: Option<String>) -> Self {
        Self {
            moon_phase: MoonPhase::from_degrees(lunar_phase_degrees),
            planetary_day: PlanetaryDay::from_weekday(date.weekday()),
            sun_sign,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phase_buckets() {
        assert_eq!(MoonPhase::from_degrees(0.0), MoonPhase::New);
        assert_eq!(MoonPhase::from_degrees(45.0), MoonPhase::WaxingCrescent);
        assert_eq!(MoonPhase::from_degrees(90.0), MoonPhase::FirstQuarter);
        assert_eq!(MoonPhase::from_degrees(180.0), MoonPhase::Full);
        assert_eq!(MoonPhase::from_degrees(270.0), MoonPhase::LastQuarter);
        assert_eq!(MoonPhase::from_degrees(350.0), MoonPhase::New);
    }

    #[test]
    fn phase_wraps_out_of_range_angles() {
        assert_eq!(MoonPhase::from_degrees(540.0), MoonPhase::Full);
        assert_eq!(MoonPhase::from_degrees(-90.0), MoonPhase::LastQuarter);
    }

    #[test]
    fn waxing_vs_waning() {
        assert!(MoonPhase::WaxingGibbous.is_waxing());
        assert!(!MoonPhase::WaningCrescent.is_waxing());
    }

    #[test]
    fn planetary_days() {
        // 2024-03-04 was a Monday.
        let date = NaiveDate::from_ymd_opt(2024, 3, 4).unwrap();
        let sig = DailySignature::derive(0.0, date, None);
        assert_eq!(sig.planetary_day, PlanetaryDay::Moon);
        assert_eq!(sig.planetary_day.planet(), "Moon");

        let friday = NaiveDate::from_ymd_opt(2024, 3, 8).unwrap();
        assert_eq!(
            PlanetaryDay::from_weekday(friday.weekday()),
            PlanetaryDay::Venus
        );
    }
}
