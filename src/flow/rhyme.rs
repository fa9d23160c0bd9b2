// Rhyme detection
// End-word extraction and the two-letter ending rule used for rhyme keys

use std::collections::HashMap;

/// Last whitespace-separated token of a line
pub fn end_word(line: &str) -> Option<&str> {
    line.split_whitespace().last()
}

/// Rhyme key for a word: its final two letters after lowercasing and
/// dropping everything that is not a-z. `None` when no letters remain.
pub fn rhyme_key(word: &str) -> Option<String> {
    let letters: Vec<char> = word
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase())
        .collect();

    if letters.is_empty() {
        return None;
    }

    let start = letters.len().saturating_sub(2);
    Some(letters[start..].iter().collect())
}

/// Letter-coded rhyme scheme, one letter per line.
///
/// Lines whose end words share a rhyme key share a letter; letters are handed
/// out A, B, C... in order of first appearance and wrap after Z. Lines without
/// an end word get `X`.
pub fn detect_rhyme_scheme(lines: &[&str]) -> String {
    let mut scheme = String::with_capacity(lines.len());
    let mut letters: HashMap<String, char> = HashMap::new();

    for line in lines {
        let key = end_word(line).and_then(rhyme_key);
        match key {
            None => scheme.push('X'),
            Some(key) => {
                let next = scheme_letter(letters.len());
                let letter = *letters.entry(key).or_insert(next);
                scheme.push(letter);
            }
        }
    }

    scheme
}

fn scheme_letter(index: usize) -> char {
    (b'A' + (index % 26) as u8) as char
}
