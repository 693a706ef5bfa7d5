//! Narrative selection: phrase banks (data) and the tier engine (logic).
//!
//! Bank content and selection logic are deliberately separated so new
//! phrasing can be added without touching the decision list.

pub mod banks;
mod tiers;

pub use banks::PhraseBank;
pub use tiers::{EnergyDirection, NarrativeSelector, energy_direction};
