//! # Astrobrief Core
//!
//! Domain types, lookup data, and error definitions for the astrobrief
//! style-brief engine. This crate has **zero framework dependencies** — it
//! defines the value types that the config and engine crates operate on.
//!
//! ## Design Philosophy
//!
//! Every record exchanged between stages is an immutable value type here.
//! The engine crate holds the algorithms; this crate holds the vocabulary:
//! - Weighted semantic tokens with provenance
//! - Transit aspects as supplied by chart math collaborators
//! - Dignity and orbital-speed lookup tables (plain data)
//! - The six-category energy breakdown and the output content record

pub mod aspect;
pub mod astro;
pub mod content;
pub mod energy;
pub mod error;
pub mod signature;
pub mod token;

// Re-export key types at crate root for ergonomics
pub use aspect::{AspectType, TransitAspect};
pub use astro::{DignityLevel, SpeedClass, assess_dignity, speed_class};
pub use content::{ConfidenceLevel, OutputContent, WeatherFacts};
pub use energy::{ENERGY_TOTAL, EnergyBreakdown, EnergyCategory};
pub use error::{Error, Result};
pub use signature::{DailySignature, MoonPhase, PlanetaryDay};
pub use token::{Origin, Token, TokenCategory, WEIGHT_EPSILON};
