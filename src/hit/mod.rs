// Hit potential module
// Hook, repetition and energy scoring with viral excerpt detection

pub mod analyzer;
pub mod types;

pub use analyzer::{analyze_hit_potential, DEFAULT_BPM, DEFAULT_DURATION_SECONDS};
pub use types::{HitBreakdown, HitPotentialScore, HitVerdict, ViralMoment};
