// Hit potential types
// Score record, viral excerpt and verdicts

use serde::{Deserialize, Serialize};

/// Estimated excerpt most likely to be clipped and shared
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViralMoment {
    /// Start offset in seconds
    pub start: u32,
    /// End offset in seconds, at most 30 after `start`
    pub end: u32,
    pub score: u32,
}

impl ViralMoment {
    /// Time window as `m:ss - m:ss`
    pub fn time_range_label(&self) -> String {
        format!("{} - {}", format_clock(self.start), format_clock(self.end))
    }
}

fn format_clock(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HitBreakdown {
    pub hook_catchiness: String,
    pub hook_timing: String,
    pub repetition: String,
    pub energy: String,
}

/// Commercial potential report, every score in [0, 100]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HitPotentialScore {
    /// Weighted blend of the sub-scores and the viral moment score
    pub overall: u32,
    pub hook_catchiness: u32,
    pub hook_timing: u32,
    pub repetition: u32,
    pub energy: u32,
    /// None when the lyrics have no chorus
    pub viral_moment: Option<ViralMoment>,
    pub breakdown: HitBreakdown,
    pub suggestions: Vec<String>,
}

impl HitPotentialScore {
    /// Report for blank input
    pub fn empty() -> Self {
        let message = "No lyrics to analyze".to_string();
        HitPotentialScore {
            overall: 0,
            hook_catchiness: 0,
            hook_timing: 0,
            repetition: 0,
            energy: 0,
            viral_moment: None,
            breakdown: HitBreakdown {
                hook_catchiness: message.clone(),
                hook_timing: message.clone(),
                repetition: message.clone(),
                energy: message,
            },
            suggestions: Vec::new(),
        }
    }

    /// Recompute the overall score from the sub-scores
    pub fn weighted_overall(&self) -> u32 {
        let viral = self.viral_moment.map(|m| m.score).unwrap_or(0);
        (self.hook_catchiness as f64 * 0.3
            + self.hook_timing as f64 * 0.2
            + self.repetition as f64 * 0.2
            + self.energy as f64 * 0.2
            + viral as f64 * 0.1)
            .round() as u32
    }

    pub fn verdict(&self) -> HitVerdict {
        HitVerdict::from_score(self.overall)
    }
}

/// Headline verdict for an overall hit score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HitVerdict {
    VeryStrong,
    Strong,
    Good,
    Fair,
    NeedsWork,
}

impl HitVerdict {
    pub fn from_score(score: u32) -> Self {
        match score {
            80.. => HitVerdict::VeryStrong,
            65..=79 => HitVerdict::Strong,
            50..=64 => HitVerdict::Good,
            35..=49 => HitVerdict::Fair,
            _ => HitVerdict::NeedsWork,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            HitVerdict::VeryStrong => "VERY STRONG",
            HitVerdict::Strong => "STRONG",
            HitVerdict::Good => "GOOD",
            HitVerdict::Fair => "FAIR",
            HitVerdict::NeedsWork => "NEEDS WORK",
        }
    }
}
