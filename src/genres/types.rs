// Genre types
// Static rule records for tempo, structure and prompt guidance

use serde::{Deserialize, Serialize};

/// Placeholder in prompt templates replaced by the caller's prompt
pub const PROMPT_PLACEHOLDER: &str = "{prompt}";

/// Inclusive tempo range in BPM
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BpmRange {
    pub min: u32,
    pub max: u32,
}

impl BpmRange {
    pub fn contains(&self, bpm: f64) -> bool {
        bpm >= self.min as f64 && bpm <= self.max as f64
    }
}

/// Rules for one genre
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenreRule {
    /// Table key, e.g. "Kompa (Haiti)"
    pub key: String,
    /// Display name, e.g. "Kompa"
    pub name: String,
    pub bpm_range: BpmRange,
    pub ideal_bpm: u32,
    pub themes: Vec<String>,
    /// Typical section order
    pub structure: Vec<String>,
    pub musical_characteristics: Vec<String>,
    pub vocal_style: Vec<String>,
    /// Lyric prompt wrapper containing [`PROMPT_PLACEHOLDER`] once
    #[serde(skip)]
    pub prompt_template: String,
}

impl GenreRule {
    pub fn bpm_in_range(&self, bpm: f64) -> bool {
        self.bpm_range.contains(bpm)
    }

    /// Wrap a lyric prompt with this genre's guidance
    pub fn enhance_prompt(&self, base_prompt: &str) -> String {
        self.prompt_template
            .replacen(PROMPT_PLACEHOLDER, base_prompt, 1)
    }

    /// Get a summary of this genre for listings
    pub fn summary(&self) -> GenreSummary {
        GenreSummary {
            key: self.key.clone(),
            name: self.name.clone(),
            bpm_range: self.bpm_range,
            ideal_bpm: self.ideal_bpm,
            vocal_style: self.vocal_style.clone(),
        }
    }
}

/// Genre summary for listings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenreSummary {
    pub key: String,
    pub name: String,
    pub bpm_range: BpmRange,
    pub ideal_bpm: u32,
    pub vocal_style: Vec<String>,
}

pub(crate) fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> GenreRule {
        GenreRule {
            key: "Test".to_string(),
            name: "Test".to_string(),
            bpm_range: BpmRange { min: 90, max: 110 },
            ideal_bpm: 100,
            themes: strings(&["Joy"]),
            structure: strings(&["Verse", "Chorus"]),
            musical_characteristics: Vec::new(),
            vocal_style: strings(&["Smooth"]),
            prompt_template: "Write it. {prompt}. Keep it short.".to_string(),
        }
    }

    #[test]
    fn test_bpm_in_range_is_inclusive() {
        let rule = sample();
        assert!(rule.bpm_in_range(90.0));
        assert!(rule.bpm_in_range(110.0));
        assert!(!rule.bpm_in_range(110.5));
        assert!(!rule.bpm_in_range(f64::NAN));
    }

    #[test]
    fn test_enhance_prompt_substitutes_once() {
        let rule = sample();
        assert_eq!(
            rule.enhance_prompt("a song about {prompt} tokens"),
            "Write it. a song about {prompt} tokens. Keep it short."
        );
    }

    #[test]
    fn test_prompt_template_not_serialized() {
        let value = serde_json::to_value(sample()).unwrap();
        assert!(value.get("promptTemplate").is_none());
        assert_eq!(value["bpmRange"]["min"], 90);
        assert_eq!(value["idealBpm"], 100);
    }
}
