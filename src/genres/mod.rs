// Genres Module
// Tempo, structure and prompt rules per genre, plus prompt-based recommendations

mod catalog;
pub mod types;

use once_cell::sync::Lazy;

pub use types::{BpmRange, GenreRule, GenreSummary};

/// Tempo used when no genre resolves
pub const DEFAULT_IDEAL_BPM: u32 = 120;

/// Cap on the number of recommended genres
const MAX_RECOMMENDATIONS: usize = 3;

const FALLBACK_RECOMMENDATIONS: &[&str] = &["Pop", "Hip-Hop", "R&B"];

/// Prompt keywords and the genres they suggest, checked in order
const RECOMMENDATION_RULES: &[(&[&str], &[&str])] = &[
    (&["love", "romantic", "heart"], &["R&B", "Pop", "Kompa (Haiti)"]),
    (&["dance", "party", "club"], &["Afrobeats", "Electronic", "Pop"]),
    (&["street", "struggle", "real"], &["Hip-Hop", "Drill"]),
    (&["faith", "god", "worship"], &["Gospel"]),
    (&["peace", "unity", "freedom"], &["Reggae", "Gospel"]),
    (&["haiti", "haitian", "creole"], &["Kompa (Haiti)", "Rabòday", "Zouk"]),
];

static GENRES: Lazy<Vec<GenreRule>> = Lazy::new(catalog::all_genres);

/// Look up a genre by fuzzy name.
///
/// Matches when the lowercased table key contains the query, or the query
/// contains the genre's display name. The first match in table order wins.
/// A blank query matches nothing.
pub fn get_genre_rules(name: &str) -> Option<&'static GenreRule> {
    let normalized = name.trim().to_lowercase();
    if normalized.is_empty() {
        return None;
    }

    GENRES.iter().find(|rule| {
        rule.key.to_lowercase().contains(&normalized)
            || normalized.contains(&rule.name.to_lowercase())
    })
}

/// Rounded mean ideal tempo of the genres that resolve, or 120
pub fn get_ideal_bpm_for_genres<S: AsRef<str>>(genres: &[S]) -> u32 {
    let bpms: Vec<u32> = genres
        .iter()
        .filter_map(|g| get_genre_rules(g.as_ref()))
        .map(|rule| rule.ideal_bpm)
        .collect();

    if bpms.is_empty() {
        return DEFAULT_IDEAL_BPM;
    }
    (bpms.iter().sum::<u32>() as f64 / bpms.len() as f64).round() as u32
}

/// Apply the first genre's prompt template; later genres are ignored.
/// Returns the prompt unchanged when the first genre does not resolve.
pub fn enhance_lyric_prompt_with_genre<S: AsRef<str>>(base_prompt: &str, genres: &[S]) -> String {
    match genres.first().and_then(|g| get_genre_rules(g.as_ref())) {
        Some(rule) => rule.enhance_prompt(base_prompt),
        None => base_prompt.to_string(),
    }
}

/// Suggest up to three genres from keywords in a prompt
pub fn get_genre_recommendations(prompt: &str) -> Vec<String> {
    let lower = prompt.to_lowercase();

    let recommendations: Vec<String> = RECOMMENDATION_RULES
        .iter()
        .filter(|(keywords, _)| keywords.iter().any(|k| lower.contains(k)))
        .flat_map(|(_, genres)| genres.iter())
        .take(MAX_RECOMMENDATIONS)
        .map(|g| g.to_string())
        .collect();

    if recommendations.is_empty() {
        return FALLBACK_RECOMMENDATIONS.iter().map(|g| g.to_string()).collect();
    }
    recommendations
}

/// Recommendations for a prompt, minus genres already selected
pub fn recommend_new_genres<S: AsRef<str>>(prompt: &str, selected: &[S]) -> Vec<String> {
    get_genre_recommendations(prompt)
        .into_iter()
        .filter(|genre| {
            !selected
                .iter()
                .any(|s| s.as_ref().trim().eq_ignore_ascii_case(genre))
        })
        .collect()
}

/// List all genres with summaries
pub fn list_genres() -> Vec<GenreSummary> {
    GENRES.iter().map(GenreRule::summary).collect()
}

/// Get all genre keys
pub fn list_genre_names() -> Vec<String> {
    GENRES.iter().map(|rule| rule.key.clone()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const NO_GENRES: &[&str] = &[];

    #[test]
    fn test_get_genre_rules() {
        assert_eq!(get_genre_rules("Kompa (Haiti)").unwrap().name, "Kompa");
        assert_eq!(get_genre_rules("kompa").unwrap().key, "Kompa (Haiti)");
        assert_eq!(get_genre_rules("  HIP-HOP ").unwrap().ideal_bpm, 95);
        assert_eq!(get_genre_rules("uk drill").unwrap().name, "Drill");
        assert!(get_genre_rules("Polka").is_none());
        assert!(get_genre_rules("").is_none());
        assert!(get_genre_rules("   ").is_none());
    }

    #[test]
    fn test_lookup_first_match_wins() {
        // "b" is contained in the Afrobeats key before R&B
        assert_eq!(get_genre_rules("b").unwrap().key, "Afrobeats");
    }

    #[test]
    fn test_ideal_bpm_for_genres() {
        assert_eq!(get_ideal_bpm_for_genres(&["Kompa (Haiti)"]), 100);
        assert_eq!(get_ideal_bpm_for_genres(NO_GENRES), 120);
        assert_eq!(get_ideal_bpm_for_genres(&["Polka", "Sea shanty"]), 120);
        // (145 + 75) / 2
        assert_eq!(get_ideal_bpm_for_genres(&["Drill", "Reggae"]), 110);
        // (115 + 90) / 2 = 102.5
        assert_eq!(get_ideal_bpm_for_genres(&["Afrobeats", "R&B", "Polka"]), 103);
        let owned = vec!["Pop".to_string()];
        assert_eq!(get_ideal_bpm_for_genres(&owned), 120);
    }

    #[test]
    fn test_enhance_prompt_uses_first_genre_only() {
        let enhanced = enhance_lyric_prompt_with_genre("A song about the sea", &["Kompa", "Drill"]);
        assert_eq!(
            enhanced,
            "Write romantic Kompa song lyrics with a smooth, flowing style. A song about the sea. Use themes of love, dancing, and connection. Keep it melodic and singable."
        );
    }

    #[test]
    fn test_enhance_prompt_passthrough() {
        assert_eq!(enhance_lyric_prompt_with_genre("plain", NO_GENRES), "plain");
        assert_eq!(enhance_lyric_prompt_with_genre("plain", &["Polka", "Pop"]), "plain");
    }

    #[test]
    fn test_recommendations() {
        assert_eq!(
            get_genre_recommendations("A romantic night"),
            vec!["R&B", "Pop", "Kompa (Haiti)"]
        );
        assert_eq!(
            get_genre_recommendations("street life, keep it real, praise God"),
            vec!["Hip-Hop", "Drill", "Gospel"]
        );
        assert_eq!(
            get_genre_recommendations("Haitian roots"),
            vec!["Kompa (Haiti)", "Rabòday", "Zouk"]
        );
        assert_eq!(get_genre_recommendations("a quiet walk"), vec!["Pop", "Hip-Hop", "R&B"]);
    }

    #[test]
    fn test_recommend_new_genres_excludes_selected() {
        assert_eq!(
            recommend_new_genres("love song", &["r&b", "Pop"]),
            vec!["Kompa (Haiti)"]
        );
        assert_eq!(recommend_new_genres("love song", NO_GENRES).len(), 3);
    }

    #[test]
    fn test_list_genres() {
        let genres = list_genres();
        assert_eq!(genres.len(), 9);
        assert_eq!(genres[0].key, "Kompa (Haiti)");
        assert_eq!(genres[8].name, "Reggae");
        assert_eq!(list_genre_names()[4], "Pop");
    }
}
