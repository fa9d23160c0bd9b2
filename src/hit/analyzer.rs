// Hit potential analyzer
// Scores the chorus as the hook and estimates where a viral clip would land

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::hit::types::{HitBreakdown, HitPotentialScore, ViralMoment};
use crate::sections::{parse_sections, Section, TagVocabulary};
use crate::text::{clamp_score, count_substring_hits, non_empty_lines};

pub const DEFAULT_BPM: f64 = 120.0;
pub const DEFAULT_DURATION_SECONDS: f64 = 180.0;

/// Longest excerpt reported as a viral moment
const MAX_VIRAL_WINDOW_SECONDS: u32 = 30;

/// Suggestions fire below this sub-score
const SUGGESTION_THRESHOLD: u32 = 60;

const SIMPLE_HOOK_WORDS: &[&str] = &[
    "love", "you", "me", "we", "go", "get", "want", "need", "feel", "know",
];

const ENERGY_WORDS: &[&str] = &[
    "go", "up", "high", "loud", "jump", "dance", "move", "run", "fly", "fire", "burn", "blaze",
    "wild", "crazy", "alive", "power", "strong", "yeah", "oh", "whoa", "hey", "come on",
];

/// Two words on one line, a coarse stand-in for rhythmic content
static RHYTHMIC_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\w+\b.*\b\w+").unwrap());

static SHOUTED_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[A-Z]{3,}").unwrap());

/// Score commercial potential of lyrics at a tempo and estimated song length.
///
/// Only `[Chorus]` sections count as the hook; a `[Hook]` tag starts a
/// section but is not treated as a chorus. Blank input yields
/// [`HitPotentialScore::empty`].
pub fn analyze_hit_potential(lyrics: &str, bpm: f64, duration_seconds: f64) -> HitPotentialScore {
    if lyrics.trim().is_empty() {
        return HitPotentialScore::empty();
    }

    let sections = parse_sections(lyrics, &TagVocabulary::hook_analysis());
    let choruses: Vec<&Section> = sections.iter().filter(|s| s.is_chorus()).collect();

    let hook_catchiness = clamp_score(score_hook_catchiness(choruses.first().copied()));
    let hook_timing = score_hook_timing(&sections);
    let repetition = clamp_score(score_repetition(&choruses));
    let energy = clamp_score(score_energy(lyrics, bpm));
    let viral_moment = detect_viral_moment(&sections, duration_seconds);

    let mut score = HitPotentialScore {
        overall: 0,
        hook_catchiness,
        hook_timing,
        repetition,
        energy,
        viral_moment,
        breakdown: HitBreakdown {
            hook_catchiness: catchiness_verdict(hook_catchiness).to_string(),
            hook_timing: timing_verdict(hook_timing).to_string(),
            repetition: repetition_verdict(repetition).to_string(),
            energy: energy_verdict(energy).to_string(),
        },
        suggestions: Vec::new(),
    };
    score.overall = score.weighted_overall();
    score.suggestions = generate_suggestions(&score);

    log::debug!(
        "Hit potential: {} sections, {} choruses, overall {}",
        sections.len(),
        choruses.len(),
        score.overall
    );

    score
}

fn score_hook_catchiness(first_chorus: Option<&Section>) -> f64 {
    let Some(chorus) = first_chorus else {
        return 30.0;
    };

    let text = chorus.text.to_lowercase();
    let words: Vec<&str> = text.split_whitespace().collect();
    let mut score = 50.0;

    if (4..=12).contains(&words.len()) {
        score += 20.0;
    } else if words.len() > 20 {
        score -= 15.0;
    }

    if !words.is_empty() {
        let unique: HashSet<&str> = words.iter().copied().collect();
        score += (1.0 - unique.len() as f64 / words.len() as f64) * 20.0;
    }

    score += (count_substring_hits(&text, SIMPLE_HOOK_WORDS) as f64 * 5.0).min(15.0);

    if RHYTHMIC_RE.is_match(&text) {
        score += 10.0;
    }
    if text.contains('?') {
        score += 10.0;
    }

    score
}

/// Earlier first chorus scores higher, by position among all sections
fn score_hook_timing(sections: &[Section]) -> u32 {
    if sections.is_empty() {
        return 0;
    }
    let Some(index) = sections.iter().position(Section::is_chorus) else {
        return 30;
    };

    let ratio = index as f64 / sections.len() as f64;
    if ratio <= 0.2 {
        100
    } else if ratio <= 0.3 {
        90
    } else if ratio <= 0.4 {
        70
    } else if ratio <= 0.5 {
        50
    } else {
        30
    }
}

fn score_repetition(choruses: &[&Section]) -> f64 {
    let mut score = match choruses.len() {
        0 => return 20.0,
        1 => 40.0,
        2 => 70.0,
        3 | 4 => 100.0,
        _ => 60.0,
    };

    let distinct: HashSet<String> = choruses
        .iter()
        .map(|s| s.text.trim().to_lowercase())
        .collect();
    if distinct.len() == 2 {
        score -= 10.0;
    }

    score
}

fn score_energy(lyrics: &str, bpm: f64) -> f64 {
    let lower = lyrics.to_lowercase();
    let mut score = 50.0;

    score += (count_substring_hits(&lower, ENERGY_WORDS) as f64 * 3.0).min(30.0);

    score += if bpm >= 120.0 {
        20.0
    } else if bpm >= 100.0 {
        10.0
    } else {
        -10.0
    };

    score += (lyrics.matches('!').count() as f64 * 5.0).min(15.0);

    let lines = non_empty_lines(lyrics);
    if !lines.is_empty() {
        let total: usize = lines.iter().map(|l| l.chars().count()).sum();
        if (total as f64 / lines.len() as f64) < 40.0 {
            score += 10.0;
        }
    }

    score
}

/// Anchor the excerpt on the first chorus, spreading the duration evenly over sections
fn detect_viral_moment(sections: &[Section], duration_seconds: f64) -> Option<ViralMoment> {
    let index = sections.iter().position(Section::is_chorus)?;
    let chorus = &sections[index];

    let section_seconds = duration_seconds / sections.len() as f64;
    let start_seconds = (index as f64 * section_seconds).floor();
    let end_seconds = ((index + 1) as f64 * section_seconds)
        .floor()
        .min(start_seconds + MAX_VIRAL_WINDOW_SECONDS as f64);

    // float to int casts saturate, so very long durations pin at u32::MAX
    let start = start_seconds as u32;
    let end = (end_seconds as u32)
        .max(start)
        .min(start.saturating_add(MAX_VIRAL_WINDOW_SECONDS));

    let words = chorus.words();
    let unique: HashSet<&str> = words.iter().copied().collect();
    let mut score = 60;

    if (5..=15).contains(&words.len()) {
        score += 20;
    }
    if (unique.len() as f64) < words.len() as f64 * 0.7 {
        score += 15;
    }
    if chorus.text.contains('!') || SHOUTED_RE.is_match(&chorus.text) {
        score += 5;
    }

    Some(ViralMoment {
        start,
        end,
        score: score.min(100),
    })
}

fn generate_suggestions(score: &HitPotentialScore) -> Vec<String> {
    let viral = score.viral_moment.map(|m| m.score).unwrap_or(0);
    let mut suggestions = Vec::new();

    if score.hook_catchiness < SUGGESTION_THRESHOLD {
        suggestions.push("Make your hook shorter and more repetitive");
        suggestions.push("Use simpler, more relatable words in the chorus");
    }
    if score.hook_timing < SUGGESTION_THRESHOLD {
        suggestions.push("Move your hook/chorus earlier in the song (within first 30 seconds)");
    }
    if score.repetition < SUGGESTION_THRESHOLD {
        suggestions.push("Repeat your chorus 3-4 times throughout the song");
    }
    if score.energy < SUGGESTION_THRESHOLD {
        suggestions.push("Add more energetic words and exclamations");
    }
    if viral < SUGGESTION_THRESHOLD {
        suggestions.push("Create a standout 15-30 second section with a catchy hook");
    }

    if suggestions.is_empty() {
        suggestions.push("Great work! Your song has strong hit potential");
    }

    suggestions.into_iter().map(String::from).collect()
}

fn catchiness_verdict(score: u32) -> &'static str {
    match score {
        80.. => "Excellent - Very catchy hook",
        60..=79 => "Good - Hook has potential",
        40..=59 => "Fair - Hook needs work",
        _ => "Poor - Hook is not memorable",
    }
}

fn timing_verdict(score: u32) -> &'static str {
    match score {
        90.. => "Perfect! Hook appears within 30 seconds",
        70..=89 => "Good - Hook comes early enough",
        50..=69 => "Acceptable - Hook timing could be better",
        _ => "Poor - Hook comes too late",
    }
}

fn repetition_verdict(score: u32) -> &'static str {
    match score {
        90.. => "Optimal - Perfect amount of repetition",
        70..=89 => "Good - Decent repetition",
        50..=69 => "Fair - Could use more repetition",
        _ => "Poor - Not enough or too much repetition",
    }
}

fn energy_verdict(score: u32) -> &'static str {
    match score {
        80.. => "High energy throughout",
        60..=79 => "Good energy level",
        40..=59 => "Moderate energy",
        _ => "Low energy - needs more excitement",
    }
}
