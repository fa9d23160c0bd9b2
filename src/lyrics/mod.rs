// Lyric quality module
// Heuristic emotion, originality, imagery and coherence scoring

pub mod analyzer;
pub mod devices;
pub mod types;
pub mod vocabulary;

pub use analyzer::analyze_lyrics;
pub use devices::detect_poetic_devices;
pub use types::{LyricBreakdown, LyricGrade, LyricScore, PoeticDevice};
