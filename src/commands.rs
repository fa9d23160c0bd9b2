// Command handlers
// Pure request handlers behind the command-line front end

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::config::AnalysisSettings;
use crate::flow::{
    analyze_flow, analyze_singability, find_rhymes, match_to_beat, BeatAlignment, FlowAnalysis,
    RhymeSuggestion,
};
use crate::genres::{
    enhance_lyric_prompt_with_genre, get_genre_rules, list_genres, recommend_new_genres,
    GenreSummary,
};
use crate::hit::{analyze_hit_potential, HitPotentialScore};
use crate::lyrics::{analyze_lyrics, LyricScore};
use crate::pipeline::{analyze_song, SongReport};

#[derive(Debug, Serialize)]
pub struct CommandError {
    message: String,
}

impl<E: std::fmt::Display> From<E> for CommandError {
    fn from(error: E) -> Self {
        CommandError {
            message: error.to_string(),
        }
    }
}

impl CommandError {
    pub fn message(&self) -> &str {
        &self.message
    }
}

pub type CommandResult<T> = Result<T, CommandError>;

/// Settings overrides supplied on the command line
#[derive(Debug, Clone, Default)]
pub struct SettingsOverrides {
    pub bpm: Option<f64>,
    pub duration_seconds: Option<f64>,
    /// Replaces the file's genres when non-empty
    pub genres: Vec<String>,
}

/// Load settings from an optional file and apply command-line overrides
pub fn resolve_settings(
    settings_path: Option<&Path>,
    overrides: SettingsOverrides,
) -> CommandResult<AnalysisSettings> {
    let mut settings = match settings_path {
        Some(path) => AnalysisSettings::load(path)?,
        None => AnalysisSettings::default(),
    };

    if overrides.bpm.is_some() {
        settings.bpm = overrides.bpm;
    }
    if let Some(duration) = overrides.duration_seconds {
        settings.duration_seconds = duration;
    }
    if !overrides.genres.is_empty() {
        settings.genres = overrides.genres;
    }

    settings.validate()?;
    Ok(settings)
}

// ==================== ANALYSIS COMMANDS ====================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlowCommandOutput {
    pub bpm: f64,
    pub flow: FlowAnalysis,
    pub rating: String,
    pub rating_description: String,
    pub beat_alignment: BeatAlignment,
    pub singability: u32,
}

pub fn flow_command(lyrics: &str, settings: &AnalysisSettings) -> FlowCommandOutput {
    let bpm = settings.resolved_bpm();
    let flow = analyze_flow(lyrics, bpm);
    let rating = flow.rating();

    FlowCommandOutput {
        bpm,
        rating: rating.label().to_string(),
        rating_description: rating.description().to_string(),
        beat_alignment: match_to_beat(lyrics, bpm),
        singability: analyze_singability(lyrics),
        flow,
    }
}

pub fn lyrics_command(lyrics: &str) -> LyricScore {
    analyze_lyrics(lyrics)
}

pub fn hit_command(lyrics: &str, settings: &AnalysisSettings) -> HitPotentialScore {
    analyze_hit_potential(lyrics, settings.resolved_bpm(), settings.duration_seconds)
}

pub fn report_command(lyrics: &str, settings: &AnalysisSettings) -> SongReport {
    analyze_song(lyrics, settings)
}

pub fn rhymes_command(word: &str, candidates: &[String]) -> Vec<RhymeSuggestion> {
    let candidates: Vec<&str> = candidates.iter().map(String::as_str).collect();
    find_rhymes(word, &candidates)
}

// ==================== GENRE COMMANDS ====================

pub fn genres_command() -> Vec<GenreSummary> {
    list_genres()
}

pub fn recommend_command(prompt: &str, selected: &[String]) -> Vec<String> {
    recommend_new_genres(prompt, selected)
}

/// Enhance a lyric prompt with the first genre's template.
/// Fails when no genre is given or the first one is unknown.
pub fn enhance_command(prompt: &str, genres: &[String]) -> CommandResult<String> {
    let primary = genres
        .first()
        .ok_or_else(|| CommandError::from("At least one genre is required"))?;

    if get_genre_rules(primary).is_none() {
        return Err(CommandError::from(format!("Unknown genre: {}", primary)));
    }

    Ok(enhance_lyric_prompt_with_genre(prompt, genres))
}
