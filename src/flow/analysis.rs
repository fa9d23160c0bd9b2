// Flow analysis
// Scores how well per-line syllable counts fit a tempo and each other

use once_cell::sync::Lazy;
use regex::Regex;

use crate::flow::rhyme::{detect_rhyme_scheme, rhyme_key};
use crate::flow::syllables::{HeuristicSyllableCounter, SyllableCounter};
use crate::flow::types::{BeatAlignment, FlowAnalysis, RhymeStrength, RhymeSuggestion};
use crate::text::{clamp_score, non_empty_lines, variance};

static CONSONANT_CLUSTER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)[bcdfghjklmnpqrstvwxyz]{4,}").unwrap());

/// Lines deviating from the tempo ideal by more than this are flagged
const BEAT_TOLERANCE_SYLLABLES: u32 = 3;

/// Ideal syllables per line for a tempo.
/// Faster tempos fit more syllables per bar.
pub fn ideal_syllables_for_bpm(bpm: f64) -> u32 {
    if bpm < 90.0 {
        6
    } else if bpm < 120.0 {
        8
    } else if bpm < 140.0 {
        10
    } else {
        12
    }
}

/// Flow analyzer over a pluggable syllable counter
#[derive(Debug, Clone, Default)]
pub struct FlowAnalyzer<C: SyllableCounter = HeuristicSyllableCounter> {
    counter: C,
}

impl FlowAnalyzer {
    /// Create an analyzer using the heuristic syllable counter
    pub fn new() -> Self {
        FlowAnalyzer {
            counter: HeuristicSyllableCounter,
        }
    }
}

impl<C: SyllableCounter> FlowAnalyzer<C> {
    /// Create an analyzer with a custom syllable counter
    pub fn with_counter(counter: C) -> Self {
        FlowAnalyzer { counter }
    }

    pub fn count_syllables(&self, text: &str) -> u32 {
        self.counter.count(text)
    }

    /// Analyze the flow of lyrics at the given tempo.
    ///
    /// Blank lines are dropped before scoring, so stanza breaks never incur the
    /// blank-line penalty. Section tag lines are scored like any other line.
    pub fn analyze_flow(&self, lyrics: &str, bpm: f64) -> FlowAnalysis {
        let lines = non_empty_lines(lyrics);
        if lines.is_empty() {
            log::warn!("Flow analysis requested for blank lyrics");
            return FlowAnalysis::empty();
        }

        let syllable_counts: Vec<u32> = lines.iter().map(|l| self.counter.count(l)).collect();
        let total_syllables: u32 = syllable_counts.iter().sum();
        let average = total_syllables as f64 / lines.len() as f64;

        let rhyme_scheme = detect_rhyme_scheme(&lines);
        let flow_score = calculate_flow_score(&syllable_counts, bpm, &lines);
        let suggestions = generate_suggestions(&syllable_counts, average, flow_score);

        log::debug!(
            "Flow: {} lines, {} syllables, scheme {}, score {}",
            lines.len(),
            total_syllables,
            rhyme_scheme,
            flow_score
        );

        FlowAnalysis {
            total_syllables,
            average_syllables_per_line: (average * 10.0).round() / 10.0,
            rhyme_scheme,
            flow_score,
            suggestions,
            syllable_distribution: syllable_counts,
        }
    }

    /// Flag every line whose syllable count strays from the tempo's ideal
    pub fn match_to_beat(&self, lyrics: &str, bpm: f64) -> BeatAlignment {
        let ideal = ideal_syllables_for_bpm(bpm);

        let adjustments: Vec<String> = non_empty_lines(lyrics)
            .iter()
            .map(|line| self.counter.count(line))
            .filter(|count| count.abs_diff(ideal) > BEAT_TOLERANCE_SYLLABLES)
            .map(|count| {
                format!(
                    "Line with {} syllables should be closer to {}",
                    count, ideal
                )
            })
            .collect();

        BeatAlignment {
            aligned: adjustments.is_empty(),
            adjustments,
        }
    }

    /// Candidates sharing the target word's rhyme key, excluding the word itself
    pub fn find_rhymes(&self, word: &str, candidates: &[&str]) -> Vec<RhymeSuggestion> {
        let Some(key) = rhyme_key(word) else {
            return Vec::new();
        };
        let target: String = word
            .to_lowercase()
            .chars()
            .filter(|c| c.is_ascii_lowercase())
            .collect();

        candidates
            .iter()
            .filter(|candidate| {
                let lowered = candidate.to_lowercase();
                lowered != target && lowered.ends_with(key.as_str())
            })
            .map(|candidate| RhymeSuggestion {
                word: candidate.to_string(),
                rhyme_strength: RhymeStrength::Near,
                syllables: self.counter.count(candidate),
            })
            .collect()
    }
}

/// Analyze flow with the default heuristic counter
pub fn analyze_flow(lyrics: &str, bpm: f64) -> FlowAnalysis {
    FlowAnalyzer::new().analyze_flow(lyrics, bpm)
}

/// Check beat alignment with the default heuristic counter
pub fn match_to_beat(lyrics: &str, bpm: f64) -> BeatAlignment {
    FlowAnalyzer::new().match_to_beat(lyrics, bpm)
}

/// Find near rhymes with the default heuristic counter
pub fn find_rhymes(word: &str, candidates: &[&str]) -> Vec<RhymeSuggestion> {
    FlowAnalyzer::new().find_rhymes(word, candidates)
}

/// Score how easy lyrics are to sing [0, 100].
///
/// Penalizes dense consonant clusters, an unbalanced vowel ratio, and very
/// long words. Blank input scores 0.
pub fn analyze_singability(lyrics: &str) -> u32 {
    if lyrics.trim().is_empty() {
        return 0;
    }

    let mut score: i64 = 100;

    let clusters = CONSONANT_CLUSTER_RE.find_iter(lyrics).count() as i64;
    score -= clusters * 5;

    let total_chars = lyrics.chars().count();
    let vowels = lyrics
        .chars()
        .filter(|c| matches!(c.to_ascii_lowercase(), 'a' | 'e' | 'i' | 'o' | 'u'))
        .count();
    let vowel_ratio = vowels as f64 / total_chars as f64;
    if !(0.3..=0.6).contains(&vowel_ratio) {
        score -= 20;
    }

    let long_words = lyrics
        .split_whitespace()
        .filter(|w| w.chars().count() > 10)
        .count() as i64;
    score -= long_words * 3;

    score.clamp(0, 100) as u32
}

/// 60% syllable consistency, 40% tempo fit, minus 10 per blank line in `lines`
fn calculate_flow_score(syllable_counts: &[u32], bpm: f64, lines: &[&str]) -> u32 {
    if syllable_counts.is_empty() {
        return 0;
    }

    let counts: Vec<f64> = syllable_counts.iter().map(|&c| c as f64).collect();
    let average = counts.iter().sum::<f64>() / counts.len() as f64;
    let consistency = (100.0 - variance(&counts) * 5.0).max(0.0);

    let ideal = ideal_syllables_for_bpm(bpm) as f64;
    let tempo_match = (100.0 - (average - ideal).abs() * 10.0).max(0.0);

    let blank_penalty = lines.iter().filter(|l| l.trim().is_empty()).count() as f64 * 10.0;

    clamp_score(consistency * 0.6 + tempo_match * 0.4 - blank_penalty)
}

fn generate_suggestions(syllable_counts: &[u32], average: f64, flow_score: u32) -> Vec<String> {
    let mut suggestions = Vec::new();

    if flow_score < 50 {
        suggestions.push("Consider making line lengths more consistent".to_string());
    }

    let max_deviation = syllable_counts
        .iter()
        .map(|&c| (c as f64 - average).abs())
        .fold(0.0, f64::max);
    if max_deviation > 4.0 {
        suggestions.push("Some lines are too long or too short - try to balance them".to_string());
    }

    if average > 15.0 {
        suggestions.push("Lines are too dense - try shorter, punchier phrases".to_string());
    }
    if average < 4.0 {
        suggestions.push("Lines are very short - consider adding more detail".to_string());
    }

    suggestions
}

#[cfg(test)]
mod tests {
    use super::*;

    const EIGHT: &str = "la la la la la la la la";

    fn repeat_lines(line: &str, n: usize) -> String {
        vec![line; n].join("\n")
    }

    #[test]
    fn test_ideal_syllables_buckets() {
        assert_eq!(ideal_syllables_for_bpm(60.0), 6);
        assert_eq!(ideal_syllables_for_bpm(89.9), 6);
        assert_eq!(ideal_syllables_for_bpm(90.0), 8);
        assert_eq!(ideal_syllables_for_bpm(120.0), 10);
        assert_eq!(ideal_syllables_for_bpm(119.0), 8);
        assert_eq!(ideal_syllables_for_bpm(140.0), 12);
    }

    #[test]
    fn test_perfect_flow_at_matching_tempo() {
        // 8 syllables per line is ideal for 90..120 bpm
        let lyrics = repeat_lines(EIGHT, 4);
        let analysis = analyze_flow(&lyrics, 100.0);

        assert_eq!(analysis.flow_score, 100);
        assert_eq!(analysis.total_syllables, 32);
        assert_eq!(analysis.average_syllables_per_line, 8.0);
        assert_eq!(analysis.syllable_distribution, vec![8, 8, 8, 8]);
        assert_eq!(analysis.rhyme_scheme, "AAAA");
        assert!(analysis.suggestions.is_empty());
    }

    #[test]
    fn test_consistent_lines_off_tempo() {
        // ideal at 120 bpm is 10: tempo match = 100 - 2*10 = 80
        let lyrics = repeat_lines(EIGHT, 4);
        let analysis = analyze_flow(&lyrics, 120.0);
        assert_eq!(analysis.flow_score, 92); // 100*0.6 + 80*0.4
    }

    #[test]
    fn test_blank_lines_do_not_penalize() {
        let tight = repeat_lines(EIGHT, 4);
        let spaced = format!("{}\n{}\n\n   \n{}\n\n{}", EIGHT, EIGHT, EIGHT, EIGHT);

        let a = analyze_flow(&tight, 100.0);
        let b = analyze_flow(&spaced, 100.0);
        assert_eq!(a.flow_score, b.flow_score);
        assert_eq!(b.syllable_distribution.len(), 4);
        assert_eq!(b.rhyme_scheme.len(), 4);
    }

    #[test]
    fn test_empty_lyrics_flow() {
        let analysis = analyze_flow("", 120.0);
        assert_eq!(analysis, FlowAnalysis::empty());

        let analysis = analyze_flow(" \n\t\n", 120.0);
        assert_eq!(analysis.flow_score, 0);
        assert!(analysis.suggestions.is_empty());
    }

    #[test]
    fn test_short_lines_suggestion() {
        let analysis = analyze_flow("go\nrun\nfly", 120.0);
        assert!(analysis
            .suggestions
            .contains(&"Lines are very short - consider adding more detail".to_string()));
        // avg 1 vs ideal 10: tempo match 10, consistency 100
        assert_eq!(analysis.flow_score, 64);
    }

    #[test]
    fn test_unbalanced_lines_suggestion() {
        let long = "la ".repeat(20);
        let lyrics = format!("go\n{}\ngo\n{}", long.trim(), long.trim());
        let analysis = analyze_flow(&lyrics, 120.0);
        assert!(analysis
            .suggestions
            .contains(&"Some lines are too long or too short - try to balance them".to_string()));
        assert!(analysis
            .suggestions
            .contains(&"Consider making line lengths more consistent".to_string()));
    }

    #[test]
    fn test_dense_lines_suggestion() {
        let dense = "la ".repeat(18);
        let lyrics = repeat_lines(dense.trim(), 3);
        let analysis = analyze_flow(&lyrics, 150.0);
        assert!(analysis
            .suggestions
            .contains(&"Lines are too dense - try shorter, punchier phrases".to_string()));
    }

    #[test]
    fn test_average_rounded_to_one_decimal() {
        // 1, 2, 2 -> 1.666...
        let analysis = analyze_flow("go\nhello\nhello", 120.0);
        assert_eq!(analysis.average_syllables_per_line, 1.7);
    }

    #[test]
    fn test_match_to_beat_aligned() {
        let lyrics = repeat_lines(EIGHT, 3);
        let alignment = match_to_beat(&lyrics, 100.0);
        assert!(alignment.aligned);
        assert!(alignment.adjustments.is_empty());
    }

    #[test]
    fn test_match_to_beat_flags_every_line() {
        let lyrics = format!("go\n{}\nrun", EIGHT);
        let alignment = match_to_beat(&lyrics, 100.0);
        assert!(!alignment.aligned);
        assert_eq!(alignment.adjustments.len(), 2);
        assert_eq!(
            alignment.adjustments[0],
            "Line with 1 syllables should be closer to 8"
        );
    }

    #[test]
    fn test_singability_clean_lyrics() {
        assert_eq!(analyze_singability("oh la la mama"), 100);
    }

    #[test]
    fn test_singability_penalties() {
        // "strengths": one cluster "ngths", vowel ratio far below 0.3
        assert_eq!(analyze_singability("strengths"), 75);
        // two 11-letter words, no clusters, vowel ratio 20/23 is too high
        assert_eq!(analyze_singability("aeaeaeaeaeb aeaeaeaeaeb"), 74);
    }

    #[test]
    fn test_singability_blank() {
        assert_eq!(analyze_singability(""), 0);
        assert_eq!(analyze_singability("  \n "), 0);
    }

    #[test]
    fn test_find_rhymes() {
        let rhymes = find_rhymes("day", &["way", "night", "Say", "day", "play"]);
        let words: Vec<&str> = rhymes.iter().map(|r| r.word.as_str()).collect();
        assert_eq!(words, vec!["way", "Say", "play"]);
        assert!(rhymes.iter().all(|r| r.rhyme_strength == RhymeStrength::Near));
        assert_eq!(rhymes[0].syllables, 1);
    }

    #[test]
    fn test_find_rhymes_no_letters() {
        assert!(find_rhymes("123", &["way"]).is_empty());
        assert!(find_rhymes("", &["way"]).is_empty());
    }

    #[test]
    fn test_custom_counter() {
        struct WordCounter;
        impl SyllableCounter for WordCounter {
            fn count(&self, text: &str) -> u32 {
                text.split_whitespace().count() as u32
            }
        }

        let analyzer = FlowAnalyzer::with_counter(WordCounter);
        let analysis = analyzer.analyze_flow("one two three\nfour five six", 60.0);
        assert_eq!(analysis.syllable_distribution, vec![3, 3]);
    }

    #[test]
    fn test_analysis_is_deterministic() {
        let lyrics = "I wake up every day\nand go along my way\n\ndreaming through the night";
        assert_eq!(analyze_flow(lyrics, 110.0), analyze_flow(lyrics, 110.0));
    }
}
