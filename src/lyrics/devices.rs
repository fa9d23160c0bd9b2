// Poetic device detection
// Pattern checks for metaphor, simile, alliteration, repetition, rhyme and personification

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::lyrics::types::PoeticDevice;
use crate::text::non_empty_lines;

static METAPHOR_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)is (a|an|the)").unwrap());

static SIMILE_LIKE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)like (a|an|the)").unwrap());

static SIMILE_AS_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)as .* as").unwrap());

static PERSONIFICATION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(wind|rain|sun|moon|time|death|love|heart) (speaks|cries|laughs|dances|sings|whispers)\b",
    )
    .unwrap()
});

/// Detect devices in a fixed order; each device appears at most once
pub fn detect_poetic_devices(lyrics: &str) -> Vec<PoeticDevice> {
    let mut devices = Vec::new();

    if METAPHOR_RE.is_match(lyrics) {
        devices.push(PoeticDevice::Metaphor);
    }
    if SIMILE_LIKE_RE.is_match(lyrics) || SIMILE_AS_RE.is_match(lyrics) {
        devices.push(PoeticDevice::Simile);
    }
    if has_alliteration(lyrics) {
        devices.push(PoeticDevice::Alliteration);
    }

    let lines: Vec<&str> = non_empty_lines(lyrics).into_iter().map(str::trim).collect();
    if has_duplicate(lines.iter().copied()) {
        devices.push(PoeticDevice::Repetition);
    }
    if has_duplicate(lines.iter().filter_map(|line| line_ending(line))) {
        devices.push(PoeticDevice::Rhyme);
    }

    if PERSONIFICATION_RE.is_match(lyrics) {
        devices.push(PoeticDevice::Personification);
    }

    devices
}

/// Three consecutive words starting with the same letter
fn has_alliteration(lyrics: &str) -> bool {
    let initials: Vec<char> = lyrics
        .split_whitespace()
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_lowercase)
        .collect();

    initials
        .windows(3)
        .any(|w| w[0] == w[1] && w[1] == w[2])
}

/// Last two characters of the line's final word, case preserved
fn line_ending(line: &str) -> Option<String> {
    let chars: Vec<char> = line.split_whitespace().last()?.chars().collect();
    let start = chars.len().saturating_sub(2);
    Some(chars[start..].iter().collect())
}

fn has_duplicate<T, I>(items: I) -> bool
where
    T: std::hash::Hash + Eq,
    I: IntoIterator<Item = T>,
{
    let mut seen = HashSet::new();
    items.into_iter().any(|item| !seen.insert(item))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metaphor_and_simile() {
        assert_eq!(detect_poetic_devices("my heart is a drum"), vec![PoeticDevice::Metaphor]);
        assert_eq!(detect_poetic_devices("you shine like the dawn"), vec![PoeticDevice::Simile]);
        assert_eq!(detect_poetic_devices("cold as ice as ever"), vec![PoeticDevice::Simile]);
    }

    #[test]
    fn test_alliteration() {
        assert!(detect_poetic_devices("silver snakes slide").contains(&PoeticDevice::Alliteration));
        assert!(!detect_poetic_devices("silver blue snakes").contains(&PoeticDevice::Alliteration));
    }

    #[test]
    fn test_repetition_ignores_blank_lines() {
        assert!(!detect_poetic_devices("one line\n\ntwo words\n\n").contains(&PoeticDevice::Repetition));
        assert!(detect_poetic_devices("hold on\nlet go\n  hold on").contains(&PoeticDevice::Repetition));
    }

    #[test]
    fn test_rhyme_on_line_endings() {
        let devices = detect_poetic_devices("walking in the rain\nfeeling all the pain");
        assert_eq!(devices, vec![PoeticDevice::Rhyme]);
    }

    #[test]
    fn test_rhyme_endings_are_case_sensitive() {
        assert!(detect_poetic_devices("walking in the RAIN\nfeeling the pain").is_empty());
    }

    #[test]
    fn test_personification() {
        let devices = detect_poetic_devices("the wind whispers low");
        assert_eq!(devices, vec![PoeticDevice::Personification]);
    }

    #[test]
    fn test_detection_order_is_fixed() {
        let lyrics = "love is a fire\nlove is a fire\nthe moon sings like a bird";
        assert_eq!(
            detect_poetic_devices(lyrics),
            vec![
                PoeticDevice::Metaphor,
                PoeticDevice::Simile,
                PoeticDevice::Repetition,
                PoeticDevice::Rhyme,
                PoeticDevice::Personification,
            ]
        );
    }

    #[test]
    fn test_no_devices_in_empty_text() {
        assert!(detect_poetic_devices("").is_empty());
    }
}
