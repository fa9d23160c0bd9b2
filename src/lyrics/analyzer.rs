// Lyric quality analyzer
// Scores emotion, originality, imagery and coherence from keyword heuristics

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::lyrics::devices::detect_poetic_devices;
use crate::lyrics::types::{LyricBreakdown, LyricScore};
use crate::lyrics::vocabulary::{
    CLICHES, COLOR_WORDS, CONNECTIVES, INTENSE_EMOTIONS, NATURE_WORDS, PERSONAL_PRONOUNS,
    POSITIVE_EMOTIONS, SENSORY_WORDS, VIVID_ADJECTIVES,
};
use crate::text::{
    clamp_score, count_pattern_hits, count_substring_hits, non_empty_lines, variance,
    word_patterns,
};

static PRONOUN_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| word_patterns(PERSONAL_PRONOUNS));
static SENSORY_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| word_patterns(SENSORY_WORDS));
static CONNECTIVE_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| word_patterns(CONNECTIVES));

static HYPHENATED_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)[a-z]+-[a-z]+").unwrap());

/// Section markers anywhere in the text, not only at line start
static SECTION_MARKER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\[(Verse|Chorus|Bridge|Intro|Outro|Pre-Chorus|Hook).*?\]").unwrap()
});

/// Score lyric quality. Blank input yields [`LyricScore::empty`].
pub fn analyze_lyrics(lyrics: &str) -> LyricScore {
    if lyrics.trim().is_empty() {
        return LyricScore::empty();
    }

    let emotion = clamp_score(score_emotion(lyrics));
    let originality = clamp_score(score_originality(lyrics));
    let imagery = clamp_score(score_imagery(lyrics));
    let coherence = clamp_score(score_coherence(lyrics));
    let overall = ((emotion + originality + imagery + coherence) as f64 / 4.0).round() as u32;

    log::debug!(
        "Lyric scores: emotion {}, originality {}, imagery {}, coherence {}",
        emotion,
        originality,
        imagery,
        coherence
    );

    LyricScore {
        emotion,
        originality,
        imagery,
        coherence,
        overall,
        breakdown: LyricBreakdown {
            emotion: emotion_verdict(emotion).to_string(),
            originality: originality_verdict(originality).to_string(),
            imagery: imagery_verdict(imagery).to_string(),
            coherence: coherence_verdict(coherence).to_string(),
        },
        poetic_devices: detect_poetic_devices(lyrics),
    }
}

fn score_emotion(lyrics: &str) -> f64 {
    let lower = lyrics.to_lowercase();
    let mut score = 50.0;

    let keywords = count_substring_hits(&lower, POSITIVE_EMOTIONS)
        + count_substring_hits(&lower, INTENSE_EMOTIONS);
    score += keywords as f64 * 3.0;

    // figurative comparison
    if lower.contains("like") || lower.contains("as") {
        score += 10.0;
    }

    score += count_pattern_hits(lyrics, &PRONOUN_PATTERNS) as f64 * 2.0;
    score += lyrics.matches('?').count() as f64 * 5.0;

    score
}

fn score_originality(lyrics: &str) -> f64 {
    let lower = lyrics.to_lowercase();
    let words: Vec<&str> = lower.split_whitespace().collect();
    let mut score = 50.0;

    if !words.is_empty() {
        let unique: HashSet<&str> = words.iter().copied().collect();
        score += unique.len() as f64 / words.len() as f64 * 40.0;
    }

    score -= count_substring_hits(&lower, CLICHES) as f64 * 5.0;

    if lyrics.chars().count() > 100 && !words.is_empty() {
        let letters: usize = words.iter().map(|w| w.chars().count()).sum();
        if letters as f64 / words.len() as f64 > 5.0 {
            score += 10.0;
        }
    }

    score += HYPHENATED_RE.find_iter(lyrics).count() as f64 * 5.0;

    score
}

fn score_imagery(lyrics: &str) -> f64 {
    let lower = lyrics.to_lowercase();
    let mut score = 50.0;

    score += count_pattern_hits(lyrics, &SENSORY_PATTERNS) as f64 * 4.0;
    score += count_substring_hits(&lower, COLOR_WORDS) as f64 * 5.0;
    score += count_substring_hits(&lower, NATURE_WORDS) as f64 * 4.0;
    score += count_substring_hits(&lower, VIVID_ADJECTIVES) as f64 * 6.0;

    score
}

fn score_coherence(lyrics: &str) -> f64 {
    let lines = non_empty_lines(lyrics);
    let mut score = 70.0;

    if SECTION_MARKER_RE.find_iter(lyrics).count() >= 2 {
        score += 15.0;
    }

    let lengths: Vec<f64> = lines.iter().map(|l| l.chars().count() as f64).collect();
    if variance(&lengths) < 500.0 {
        score += 10.0;
    }

    if !lines.is_empty() {
        let unique: HashSet<&str> = lines.iter().copied().collect();
        let repetition = 1.0 - unique.len() as f64 / lines.len() as f64;
        if repetition > 0.2 && repetition < 0.5 {
            score += 10.0;
        } else if repetition > 0.5 {
            score -= 10.0;
        }
    }

    let connectives = count_pattern_hits(lyrics, &CONNECTIVE_PATTERNS) as f64;
    score += (connectives * 2.0).min(15.0);

    score
}

fn emotion_verdict(score: u32) -> &'static str {
    match score {
        85.. => "Very strong emotional impact",
        70..=84 => "Strong emotional connection",
        55..=69 => "Good emotional depth",
        40..=54 => "Moderate emotional content",
        _ => "Could use more emotional depth",
    }
}

fn originality_verdict(score: u32) -> &'static str {
    match score {
        85.. => "Highly original and unique",
        70..=84 => "Fresh perspective",
        55..=69 => "Good creativity",
        40..=54 => "Somewhat conventional",
        _ => "Contains common phrases",
    }
}

fn imagery_verdict(score: u32) -> &'static str {
    match score {
        85.. => "Vivid and engaging imagery",
        70..=84 => "Strong visual elements",
        55..=69 => "Good descriptive language",
        40..=54 => "Some imagery present",
        _ => "Could use more vivid descriptions",
    }
}

fn coherence_verdict(score: u32) -> &'static str {
    match score {
        85.. => "Excellent structure and flow",
        70..=84 => "Well-organized and clear",
        55..=69 => "Good coherence",
        40..=54 => "Some lines could connect better",
        _ => "Structure needs improvement",
    }
}
