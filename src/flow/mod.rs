// Rhyme & flow module
// Syllable estimation, rhyme scheme inference, and tempo fit scoring

pub mod analysis;
pub mod rhyme;
pub mod syllables;
pub mod types;

pub use analysis::{
    analyze_flow, analyze_singability, find_rhymes, ideal_syllables_for_bpm, match_to_beat,
    FlowAnalyzer,
};
pub use rhyme::{detect_rhyme_scheme, end_word, rhyme_key};
pub use syllables::{count_syllables, HeuristicSyllableCounter, SyllableCounter};
pub use types::{BeatAlignment, FlowAnalysis, FlowRating, RhymeStrength, RhymeSuggestion};
