// Genre catalog
// Rule definitions for every supported genre, in lookup order

use super::types::{strings, BpmRange, GenreRule};

#[allow(clippy::too_many_arguments)]
fn rule(
    key: &str,
    name: &str,
    bpm: (u32, u32, u32),
    themes: &[&str],
    structure: &[&str],
    characteristics: &[&str],
    vocal_style: &[&str],
    prompt_template: &str,
) -> GenreRule {
    let (min, max, ideal) = bpm;
    GenreRule {
        key: key.to_string(),
        name: name.to_string(),
        bpm_range: BpmRange { min, max },
        ideal_bpm: ideal,
        themes: strings(themes),
        structure: strings(structure),
        musical_characteristics: strings(characteristics),
        vocal_style: strings(vocal_style),
        prompt_template: prompt_template.to_string(),
    }
}

/// Haitian Kompa: smooth and romantic, 90-110 BPM
pub fn kompa() -> GenreRule {
    rule(
        "Kompa (Haiti)",
        "Kompa",
        (90, 110, 100),
        &["Romantic love", "Dancing", "Celebration", "Haitian culture", "Passion"],
        &["Intro", "Verse 1", "Chorus", "Verse 2", "Chorus", "Bridge", "Chorus", "Outro"],
        &[
            "Smooth, flowing melodies",
            "Distinctive guitar patterns",
            "Melodic bass lines",
            "Steady 4/4 beat",
            "Romantic horn sections",
        ],
        &["Smooth", "Melodic", "Romantic", "Passionate"],
        "Write romantic Kompa song lyrics with a smooth, flowing style. {prompt}. Use themes of love, dancing, and connection. Keep it melodic and singable.",
    )
}

pub fn afrobeats() -> GenreRule {
    rule(
        "Afrobeats",
        "Afrobeats",
        (100, 128, 115),
        &["Joy", "Celebration", "Love", "Success", "Life", "Dancing"],
        &[
            "Intro", "Verse 1", "Pre-Chorus", "Chorus", "Verse 2", "Chorus", "Bridge", "Chorus",
            "Outro",
        ],
        &[
            "Syncopated rhythms",
            "Call and response patterns",
            "Layered percussion",
            "Infectious grooves",
            "Repetitive hooks",
        ],
        &["Melodic", "Rhythmic", "Energetic", "Catchy"],
        "Write Afrobeats song lyrics with catchy hooks and call-and-response elements. {prompt}. Make it rhythmic, celebratory, and full of energy. Include repetitive, memorable phrases.",
    )
}

/// Drill: dark and rapid, narrow 140-150 BPM band
pub fn drill() -> GenreRule {
    rule(
        "Drill",
        "Drill",
        (140, 150, 145),
        &["Street life", "Struggle", "Authenticity", "Ambition", "Reality"],
        &["Intro", "Verse 1", "Hook", "Verse 2", "Hook", "Verse 3", "Hook", "Outro"],
        &[
            "Dark, menacing beats",
            "Sliding 808s",
            "Rapid hi-hats",
            "Sparse melodies",
            "Heavy bass",
        ],
        &["Aggressive", "Direct", "Rapid", "Intense"],
        "Write Drill rap lyrics with aggressive, direct delivery. {prompt}. Keep it raw, authentic, and street-focused. Use rapid-fire flows and hard-hitting punchlines.",
    )
}

pub fn gospel() -> GenreRule {
    rule(
        "Gospel",
        "Gospel",
        (70, 140, 100),
        &["Faith", "Hope", "Worship", "Praise", "Redemption", "Joy", "Testimony"],
        &[
            "Intro", "Verse 1", "Chorus", "Verse 2", "Chorus", "Bridge", "Vamp", "Chorus", "Outro",
        ],
        &[
            "Uplifting melodies",
            "Powerful vocals",
            "Choir harmonies",
            "Call and response",
            "Piano and organ",
            "Building intensity",
        ],
        &["Powerful", "Emotional", "Uplifting", "Soulful"],
        "Write uplifting Gospel lyrics with themes of faith and hope. {prompt}. Make it powerful, emotional, and spiritually inspiring. Include call-and-response elements.",
    )
}

pub fn pop() -> GenreRule {
    rule(
        "Pop",
        "Pop",
        (110, 130, 120),
        &["Love", "Relationships", "Fun", "Youth", "Dreams", "Emotions"],
        &[
            "Intro", "Verse 1", "Pre-Chorus", "Chorus", "Verse 2", "Pre-Chorus", "Chorus",
            "Bridge", "Chorus", "Outro",
        ],
        &[
            "Catchy melodies",
            "Clear structure",
            "Strong hooks",
            "Polished production",
            "Universal appeal",
        ],
        &["Clear", "Melodic", "Catchy", "Accessible"],
        "Write catchy Pop song lyrics with universal appeal. {prompt}. Make it memorable, relatable, and radio-friendly. Focus on a strong, repetitive hook.",
    )
}

pub fn hip_hop() -> GenreRule {
    rule(
        "Hip-Hop",
        "Hip-Hop",
        (80, 110, 95),
        &["Success", "Struggle", "Authenticity", "Life", "Dreams", "Culture"],
        &["Intro", "Verse 1", "Hook", "Verse 2", "Hook", "Verse 3", "Hook", "Outro"],
        &[
            "Strong drum patterns",
            "Sampled elements",
            "Heavy bass",
            "Rhythmic focus",
            "Layered beats",
        ],
        &["Rhythmic", "Clear", "Confident", "Varied flow"],
        "Write Hip-Hop lyrics with clever wordplay and strong rhythm. {prompt}. Make it authentic, rhythmic, and focused on storytelling or expression.",
    )
}

pub fn r_and_b() -> GenreRule {
    rule(
        "R&B",
        "R&B",
        (70, 110, 90),
        &["Love", "Relationships", "Emotion", "Romance", "Heartbreak", "Desire"],
        &[
            "Intro", "Verse 1", "Pre-Chorus", "Chorus", "Verse 2", "Pre-Chorus", "Chorus",
            "Bridge", "Chorus", "Outro",
        ],
        &[
            "Smooth grooves",
            "Soulful melodies",
            "Rich harmonies",
            "Emotional delivery",
            "Rhythmic sophistication",
        ],
        &["Smooth", "Soulful", "Emotional", "Melodic"],
        "Write smooth R&B lyrics with emotional depth and romantic themes. {prompt}. Make it soulful, intimate, and melodically rich.",
    )
}

/// Electronic dance music: build and drop structure
pub fn electronic() -> GenreRule {
    rule(
        "Electronic",
        "Electronic",
        (120, 140, 128),
        &["Energy", "Night", "Freedom", "Movement", "Escape", "Future"],
        &[
            "Intro", "Build", "Drop", "Verse", "Build", "Drop", "Break", "Build", "Drop", "Outro",
        ],
        &[
            "Synthesized sounds",
            "Build-ups and drops",
            "Repetitive elements",
            "Energy waves",
            "Electronic textures",
        ],
        &["Energetic", "Processed", "Repetitive", "Catchy"],
        "Write Electronic dance music lyrics with repetitive, energetic hooks. {prompt}. Keep it simple, catchy, and focused on energy and movement.",
    )
}

pub fn reggae() -> GenreRule {
    rule(
        "Reggae",
        "Reggae",
        (60, 90, 75),
        &["Peace", "Unity", "Love", "Social justice", "Freedom", "Spirituality"],
        &["Intro", "Verse 1", "Chorus", "Verse 2", "Chorus", "Bridge", "Chorus", "Outro"],
        &[
            "Off-beat rhythms",
            "Bass-heavy grooves",
            "Laid-back feel",
            "Syncopated guitar",
            "Steady one-drop beat",
        ],
        &["Laid-back", "Melodic", "Conscious", "Rhythmic"],
        "Write Reggae lyrics with themes of peace, unity, and consciousness. {prompt}. Make it laid-back, rhythmic, and socially aware with positive messages.",
    )
}

/// Every genre in lookup order
pub fn all_genres() -> Vec<GenreRule> {
    vec![
        kompa(),
        afrobeats(),
        drill(),
        gospel(),
        pop(),
        hip_hop(),
        r_and_b(),
        electronic(),
        reggae(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::genres::types::PROMPT_PLACEHOLDER;

    #[test]
    fn test_kompa_rule() {
        let rule = kompa();
        assert_eq!(rule.key, "Kompa (Haiti)");
        assert_eq!(rule.name, "Kompa");
        assert_eq!(rule.bpm_range, BpmRange { min: 90, max: 110 });
        assert_eq!(rule.ideal_bpm, 100);
        assert_eq!(rule.structure.len(), 8);
    }

    #[test]
    fn test_catalog_is_consistent() {
        let genres = all_genres();
        assert_eq!(genres.len(), 9);
        for rule in &genres {
            assert!(rule.bpm_in_range(rule.ideal_bpm as f64), "{} ideal out of range", rule.key);
            assert_eq!(rule.prompt_template.matches(PROMPT_PLACEHOLDER).count(), 1, "{}", rule.key);
            assert!(!rule.themes.is_empty());
            assert!(!rule.vocal_style.is_empty());
        }
    }
}
