// Versecraft - Lyric flow, quality and hit-potential scoring
// Module declarations

pub mod commands;
pub mod config;
pub mod flow;
pub mod genres;
pub mod hit;
pub mod lyrics;
pub mod pipeline;
pub mod sections;
mod text;

pub use config::{AnalysisSettings, ConfigError};
pub use flow::{
    analyze_flow, analyze_singability, count_syllables, detect_rhyme_scheme, find_rhymes,
    match_to_beat, BeatAlignment, FlowAnalysis, FlowAnalyzer, FlowRating, RhymeStrength,
    RhymeSuggestion, SyllableCounter,
};
pub use genres::{
    enhance_lyric_prompt_with_genre, get_genre_recommendations, get_genre_rules,
    get_ideal_bpm_for_genres, list_genre_names, list_genres, recommend_new_genres, GenreRule,
    GenreSummary,
};
pub use hit::{analyze_hit_potential, HitPotentialScore, HitVerdict, ViralMoment};
pub use lyrics::{analyze_lyrics, LyricGrade, LyricScore, PoeticDevice};
pub use pipeline::{analyze_song, SongReport, TraceEntry};
pub use sections::{parse_sections, section_outline, Section, SectionKind, TagVocabulary};
