// Lyric quality types
// Score record, per-dimension verdicts and detected devices

use serde::{Deserialize, Serialize};

/// Literary devices recognized in lyrics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PoeticDevice {
    Metaphor,
    Simile,
    Alliteration,
    Repetition,
    Rhyme,
    Personification,
}

impl PoeticDevice {
    pub fn label(&self) -> &'static str {
        match self {
            PoeticDevice::Metaphor => "Metaphor",
            PoeticDevice::Simile => "Simile",
            PoeticDevice::Alliteration => "Alliteration",
            PoeticDevice::Repetition => "Repetition",
            PoeticDevice::Rhyme => "Rhyme",
            PoeticDevice::Personification => "Personification",
        }
    }
}

impl std::fmt::Display for PoeticDevice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// One-line verdict per scoring dimension
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LyricBreakdown {
    pub emotion: String,
    pub originality: String,
    pub imagery: String,
    pub coherence: String,
}

impl LyricBreakdown {
    fn uniform(message: &str) -> Self {
        LyricBreakdown {
            emotion: message.to_string(),
            originality: message.to_string(),
            imagery: message.to_string(),
            coherence: message.to_string(),
        }
    }
}

/// Lyric quality report, every score in [0, 100]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LyricScore {
    /// Emotional impact
    pub emotion: u32,
    /// Vocabulary diversity and freshness
    pub originality: u32,
    /// Sensory and visual language
    pub imagery: u32,
    /// Structure and connectedness
    pub coherence: u32,
    /// Rounded mean of the four dimensions
    pub overall: u32,
    pub breakdown: LyricBreakdown,
    /// Devices in detection order, no duplicates
    pub poetic_devices: Vec<PoeticDevice>,
}

impl LyricScore {
    /// Report for blank input
    pub fn empty() -> Self {
        LyricScore {
            emotion: 0,
            originality: 0,
            imagery: 0,
            coherence: 0,
            overall: 0,
            breakdown: LyricBreakdown::uniform("No lyrics to analyze"),
            poetic_devices: Vec::new(),
        }
    }

    pub fn grade(&self) -> LyricGrade {
        LyricGrade::from_score(self.overall)
    }
}

/// Coarse grade for an overall lyric score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LyricGrade {
    Excellent,
    Strong,
    Good,
    Fair,
    NeedsWork,
}

impl LyricGrade {
    pub fn from_score(score: u32) -> Self {
        match score {
            85.. => LyricGrade::Excellent,
            70..=84 => LyricGrade::Strong,
            55..=69 => LyricGrade::Good,
            40..=54 => LyricGrade::Fair,
            _ => LyricGrade::NeedsWork,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            LyricGrade::Excellent => "Excellent",
            LyricGrade::Strong => "Strong",
            LyricGrade::Good => "Good",
            LyricGrade::Fair => "Fair",
            LyricGrade::NeedsWork => "Needs Work",
        }
    }
}
