//! Energy allocation — 21 integer points across six categories.
//!
//! Raw per-category scores come from membership sets plus bonus rules,
//! are scaled relative to the pool's average token weight, floored at a
//! noise threshold, then distributed proportionally. Naive rounding of
//! six independently-scaled values does not sum to 21 in general; the
//! largest-remainder pass makes the exact-sum invariant unconditional.

use astrobrief_config::EngineTuning;
use astrobrief_core::energy::{ENERGY_TOTAL, EnergyBreakdown, EnergyCategory};
use astrobrief_core::token::Token;
use tracing::debug;

/// A conditional score increment for one category.
#[derive(Debug, Clone)]
pub struct BonusRule {
    pub predicate: BonusPredicate,
    /// Added to the raw score once per matching token.
    pub increment: f64,
}

/// What a bonus rule matches on.
#[derive(Debug, Clone)]
pub enum BonusPredicate {
    /// Token's planet source equals this planet.
    PlanetSource(String),
    /// Token's sign source equals this sign.
    SignSource(String),
    /// Token's own weight is at least this much.
    MinWeight(f64),
}

impl BonusPredicate {
    fn matches(&self, token: &Token) -> bool {
        match self {
            BonusPredicate::PlanetSource(planet) => {
                token.planet_source.as_deref() == Some(planet.as_str())
            }
            BonusPredicate::SignSource(sign) => {
                token.sign_source.as_deref() == Some(sign.as_str())
            }
            BonusPredicate::MinWeight(min) => token.weight >= *min,
        }
    }
}

/// Membership set and bonus rules for one energy category.
#[derive(Debug, Clone)]
pub struct CategoryProfile {
    pub category: EnergyCategory,
    /// Token names whose weight counts toward this category.
    pub members: Vec<String>,
    pub bonuses: Vec<BonusRule>,
}

/// The allocator: six category profiles plus the tuning thresholds.
#[derive(Debug, Clone)]
pub struct EnergyAllocator {
    profiles: Vec<CategoryProfile>,
    noise_floor: f64,
}

fn names(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

fn planet_bonus(planet: &str, increment: f64) -> BonusRule {
    BonusRule {
        predicate: BonusPredicate::PlanetSource(planet.into()),
        increment,
    }
}

impl EnergyAllocator {
    /// The built-in category vocabulary and bonus rules.
    pub fn with_defaults(tuning: &EngineTuning) -> Self {
        let profiles = vec![
            CategoryProfile {
                category: EnergyCategory::Classic,
                members: names(&[
                    "tailored",
                    "polished",
                    "structured",
                    "ivory",
                    "matte",
                    "understated",
                ]),
                bonuses: vec![planet_bonus("Saturn", 1.5)],
            },
            CategoryProfile {
                category: EnergyCategory::Playful,
                members: names(&["playful", "electric", "saturated", "airy"]),
                bonuses: vec![planet_bonus("Mercury", 1.5)],
            },
            CategoryProfile {
                category: EnergyCategory::Romantic,
                members: names(&["sensual", "tender", "silky", "dreamy", "luminous"]),
                bonuses: vec![planet_bonus("Venus", 2.0)],
            },
            CategoryProfile {
                category: EnergyCategory::Utility,
                members: names(&["crisp", "grounded", "relaxed", "breathable", "slate"]),
                bonuses: vec![BonusRule {
                    predicate: BonusPredicate::SignSource("Virgo".into()),
                    increment: 1.0,
                }],
            },
            CategoryProfile {
                category: EnergyCategory::Drama,
                members: names(&["dramatic", "bold", "crimson", "plush", "luxurious", "gold"]),
                bonuses: vec![
                    planet_bonus("Sun", 1.5),
                    BonusRule {
                        predicate: BonusPredicate::MinWeight(3.0),
                        increment: 1.0,
                    },
                ],
            },
            CategoryProfile {
                category: EnergyCategory::Edge,
                members: names(&["experimental", "restless", "sculptural", "indigo"]),
                bonuses: vec![planet_bonus("Uranus", 2.0), planet_bonus("Pluto", 1.0)],
            },
        ];
        Self {
            profiles,
            noise_floor: tuning.allocation_noise_floor,
        }
    }

    /// Build from custom profiles (used by tests and alternative presets).
    pub fn new(profiles: Vec<CategoryProfile>, noise_floor: f64) -> Self {
        Self {
            profiles,
            noise_floor,
        }
    }

    /// Allocate exactly [`ENERGY_TOTAL`] points across the six categories.
    ///
    /// Total — every input, including an empty pool, produces a breakdown
    /// summing to 21.
    pub fn allocate(&self, tokens: &[Token]) -> EnergyBreakdown {
        let live: Vec<&Token> = tokens.iter().filter(|t| !t.is_inert()).collect();

        // Raw score per category: member weight plus bonus increments.
        let mut raw = [0.0f64; 6];
        for (slot, category) in EnergyCategory::ALL.iter().enumerate() {
            let Some(profile) = self.profiles.iter().find(|p| p.category == *category) else {
                continue;
            };
            for token in &live {
                if profile.members.iter().any(|m| m == &token.name) {
                    raw[slot] += token.weight;
                }
                for bonus in &profile.bonuses {
                    if bonus.predicate.matches(token) {
                        raw[slot] += bonus.increment;
                    }
                }
            }
        }

        // Relative scaling: divide by the average token weight so louder
        // days don't uniformly inflate every category.
        let average = if live.is_empty() {
            0.0
        } else {
            live.iter().map(|t| t.weight).sum::<f64>() / live.len() as f64
        };
        let scale = if average > 0.0 { 1.0 / average } else { 1.0 };
        let mut scaled = raw.map(|r| r * scale);

        // Noise floor.
        for value in &mut scaled {
            if *value < self.noise_floor {
                *value = 0.0;
            }
        }

        let total: f64 = scaled.iter().sum();
        if total <= 0.0 {
            debug!("all category scores zero; falling back to classic");
            return EnergyBreakdown::all_classic();
        }

        // Proportional distribution with largest-remainder residuals.
        let mut values = [0u32; 6];
        let mut remainders = [0.0f64; 6];
        let mut assigned = 0u32;
        for slot in 0..6 {
            let exact = scaled[slot] / total * ENERGY_TOTAL as f64;
            values[slot] = exact.floor() as u32;
            remainders[slot] = exact - exact.floor();
            assigned += values[slot];
        }
        let mut residual = ENERGY_TOTAL.saturating_sub(assigned);
        // Largest fractional remainder first; ties go to the earlier
        // category in declaration order.
        let mut order: Vec<usize> = (0..6).collect();
        order.sort_by(|&a, &b| {
            remainders[b]
                .partial_cmp(&remainders[a])
                .unwrap_or(std::cmp::Ordering::Equal)
                .then(a.cmp(&b))
        });
        for &slot in order.iter().cycle() {
            if residual == 0 {
                break;
            }
            values[slot] += 1;
            residual -= 1;
        }

        let breakdown = EnergyBreakdown::from_values(values);
        debug!(?breakdown, "allocated energy");
        breakdown
    }
}
