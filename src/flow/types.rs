// Flow analysis types
// Result objects returned by the rhyme & flow engine

use serde::{Deserialize, Serialize};

/// Rhythm and rhyme summary for a block of lyrics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlowAnalysis {
    /// Sum of per-line syllable estimates
    pub total_syllables: u32,

    /// Mean syllables per non-empty line, rounded to one decimal
    pub average_syllables_per_line: f64,

    /// One letter per non-empty line; `X` marks a line with no usable end word
    pub rhyme_scheme: String,

    /// Blend of syllable consistency and tempo fit [0, 100]
    pub flow_score: u32,

    pub suggestions: Vec<String>,

    /// Syllable estimate for each non-empty line, in order
    pub syllable_distribution: Vec<u32>,
}

impl FlowAnalysis {
    /// Canonical result for blank input
    pub fn empty() -> Self {
        FlowAnalysis {
            total_syllables: 0,
            average_syllables_per_line: 0.0,
            rhyme_scheme: String::new(),
            flow_score: 0,
            suggestions: Vec::new(),
            syllable_distribution: Vec::new(),
        }
    }

    pub fn rating(&self) -> FlowRating {
        FlowRating::from_score(self.flow_score)
    }
}

/// Display band for a flow score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlowRating {
    Excellent,
    Good,
    Fair,
    NeedsWork,
}

impl FlowRating {
    pub fn from_score(score: u32) -> Self {
        if score >= 80 {
            FlowRating::Excellent
        } else if score >= 60 {
            FlowRating::Good
        } else if score >= 40 {
            FlowRating::Fair
        } else {
            FlowRating::NeedsWork
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FlowRating::Excellent => "Excellent",
            FlowRating::Good => "Good",
            FlowRating::Fair => "Fair",
            FlowRating::NeedsWork => "Needs Work",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            FlowRating::Excellent => "Excellent syllable consistency and rhythm",
            FlowRating::Good => "Good flow with minor variations",
            FlowRating::Fair => "Flow could be more consistent",
            FlowRating::NeedsWork => "Flow needs significant improvement",
        }
    }
}

/// Whether each line's syllable count sits close to the tempo's ideal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BeatAlignment {
    pub aligned: bool,
    pub adjustments: Vec<String>,
}

/// Strength of a rhyme match. Only `Near` is produced by the ending heuristic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RhymeStrength {
    Perfect,
    Near,
    Slant,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RhymeSuggestion {
    pub word: String,
    pub rhyme_strength: RhymeStrength,
    pub syllables: u32,
}
