// Text helpers
// Line splitting and keyword counting shared by the analyzers

use regex::Regex;

/// Lines that contain something other than whitespace, untrimmed
pub fn non_empty_lines(text: &str) -> Vec<&str> {
    text.split('\n')
        .filter(|line| !line.trim().is_empty())
        .collect()
}

/// Number of keywords that occur anywhere in `haystack` as a substring.
/// Each keyword counts once however often it appears.
pub fn count_substring_hits(haystack: &str, keywords: &[&str]) -> usize {
    keywords.iter().filter(|k| haystack.contains(*k)).count()
}

/// Case-insensitive whole-word patterns, one per keyword
pub fn word_patterns(keywords: &[&str]) -> Vec<Regex> {
    keywords
        .iter()
        .map(|k| Regex::new(&format!(r"(?i)\b{}\b", regex::escape(k))).unwrap())
        .collect()
}

/// Number of patterns that match somewhere in `text`
pub fn count_pattern_hits(text: &str, patterns: &[Regex]) -> usize {
    patterns.iter().filter(|p| p.is_match(text)).count()
}

/// Clamp a raw heuristic score to [0, 100] and round to an integer
pub fn clamp_score(score: f64) -> u32 {
    score.clamp(0.0, 100.0).round() as u32
}

/// Population variance
pub fn variance(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n
}
