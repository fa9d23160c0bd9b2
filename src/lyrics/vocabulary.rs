// Lyric vocabulary
// Keyword lists behind the lyric quality heuristics

pub const POSITIVE_EMOTIONS: &[&str] = &[
    "love", "happy", "joy", "hope", "dream", "peace", "smile", "heart", "light", "heaven",
    "forever", "beautiful", "amazing", "wonderful",
];

pub const INTENSE_EMOTIONS: &[&str] = &[
    "pain", "cry", "tears", "broken", "hurt", "fear", "rage", "anger", "lost", "alone", "dark",
    "die", "death", "blood", "scream",
];

pub const PERSONAL_PRONOUNS: &[&str] = &["i", "me", "my", "you", "your", "we", "our"];

/// Filler and overused phrases, matched as substrings
pub const CLICHES: &[&str] = &[
    "baby", "yeah", "oh", "la la", "na na", "uh", "ooh", "tonight", "all night", "dance floor",
    "party",
];

pub const SENSORY_WORDS: &[&str] = &[
    // sight
    "see", "look", "watch", "eyes", "bright", "dark", "color", "shine",
    // sound
    "hear", "sound", "loud", "whisper", "voice", "echo", "silence",
    // touch
    "feel", "touch", "warm", "cold", "soft", "rough",
    // taste and smell
    "taste", "sweet", "bitter", "smell", "scent", "fragrance",
];

pub const COLOR_WORDS: &[&str] = &[
    "red", "blue", "green", "yellow", "black", "white", "gold", "silver",
];

pub const NATURE_WORDS: &[&str] = &[
    "sun", "moon", "star", "sky", "ocean", "sea", "mountain", "river", "tree", "flower", "rain",
    "storm", "wind", "fire", "earth",
];

pub const VIVID_ADJECTIVES: &[&str] = &[
    "blazing", "shimmering", "glowing", "frozen", "burning", "soaring", "crashing", "whispered",
    "thundering", "velvet", "crystal",
];

pub const CONNECTIVES: &[&str] = &["and", "but", "so", "then", "now", "when", "if", "because"];
