// Section parser
// One shared scanner parameterized by the tag pattern, so every analyzer
// that needs sections sees the same split

use once_cell::sync::Lazy;
use regex::Regex;

use crate::sections::types::{Section, SectionKind};

/// A full-line tag such as `[Verse 2]` or `[Ad-libs]`
static STANDARD_TAG_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)^\s*\[\s*(intro|verse|pre-chorus|chorus|hook|bridge|outro|ad-libs)(?:\s*\d+)?\s*\]\s*$",
    )
    .unwrap()
});

/// A line that starts with a known tag; anything after the closing bracket is discarded.
/// Ad-libs is not part of this vocabulary.
static HOOK_ANALYSIS_TAG_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^\[(Verse|Chorus|Bridge|Intro|Outro|Pre-Chorus|Hook).*?\]").unwrap()
});

/// Tag pattern used to recognize section header lines.
/// Capture group 1 of the pattern must hold the section label.
#[derive(Debug, Clone, Copy)]
pub struct TagVocabulary {
    name: &'static str,
    pattern: &'static Lazy<Regex>,
}

impl TagVocabulary {
    /// Full-line tags from the lyric editor vocabulary, optional numeric suffix
    pub fn standard() -> Self {
        TagVocabulary {
            name: "standard",
            pattern: &STANDARD_TAG_RE,
        }
    }

    /// Prefix tags as recognized by the hit potential analyzer
    pub fn hook_analysis() -> Self {
        TagVocabulary {
            name: "hook_analysis",
            pattern: &HOOK_ANALYSIS_TAG_RE,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the section kind if `line` is a tag line in this vocabulary
    pub fn match_tag(&self, line: &str) -> Option<SectionKind> {
        self.pattern
            .captures(line)
            .and_then(|caps| caps.get(1))
            .map(|label| SectionKind::from_label(label.as_str()))
    }
}

impl Default for TagVocabulary {
    fn default() -> Self {
        Self::standard()
    }
}

/// Split lyrics into ordered sections.
///
/// Lines before the first tag form an implicit `Verse` section. Tag lines are
/// not part of any body. Sections whose body is blank are dropped, including a
/// trailing tag with nothing under it.
pub fn parse_sections(lyrics: &str, vocabulary: &TagVocabulary) -> Vec<Section> {
    let mut sections = Vec::new();
    let mut current: Option<(SectionKind, Vec<&str>)> = None;

    for raw_line in lyrics.split('\n') {
        let line = raw_line.strip_suffix('\r').unwrap_or(raw_line);

        if let Some(kind) = vocabulary.match_tag(line) {
            if let Some((prev_kind, body)) = current.take() {
                push_section(&mut sections, prev_kind, &body);
            }
            current = Some((kind, Vec::new()));
        } else {
            current
                .get_or_insert_with(|| (SectionKind::Verse, Vec::new()))
                .1
                .push(line);
        }
    }

    if let Some((kind, body)) = current.take() {
        push_section(&mut sections, kind, &body);
    }

    log::debug!(
        "Parsed {} sections with {} vocabulary",
        sections.len(),
        vocabulary.name()
    );

    sections
}

fn push_section(sections: &mut Vec<Section>, kind: SectionKind, body: &[&str]) {
    let text = body.join("\n");
    let text = text.trim();
    if text.is_empty() {
        return;
    }

    sections.push(Section {
        kind,
        text: text.to_string(),
        ordinal_index: sections.len(),
    });
}

/// Ordered labels of the parsed sections, e.g. ["Verse", "Chorus", "Verse"]
pub fn section_outline(sections: &[Section]) -> Vec<String> {
    sections.iter().map(|s| s.kind.label().to_string()).collect()
}
