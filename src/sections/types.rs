// Section types
// A section is one labeled block of lyric text delimited by a bracketed tag line

use serde::{Deserialize, Serialize};

/// Kind of lyric section, derived from the bracketed tag that opened it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionKind {
    Intro,
    Verse,
    Chorus,
    #[serde(rename = "prechorus")]
    PreChorus,
    Bridge,
    Hook,
    Outro,
    #[serde(rename = "adlibs")]
    AdLibs,
    Unlabeled,
}

impl SectionKind {
    /// Map a tag label (without brackets or numeric suffix) to a kind.
    /// Unknown labels fall back to `Unlabeled`.
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "intro" => SectionKind::Intro,
            "verse" => SectionKind::Verse,
            "chorus" => SectionKind::Chorus,
            "pre-chorus" | "prechorus" => SectionKind::PreChorus,
            "bridge" => SectionKind::Bridge,
            "hook" => SectionKind::Hook,
            "outro" => SectionKind::Outro,
            "ad-libs" | "adlibs" => SectionKind::AdLibs,
            _ => SectionKind::Unlabeled,
        }
    }

    /// Human-readable label for structure display
    pub fn label(&self) -> &'static str {
        match self {
            SectionKind::Intro => "Intro",
            SectionKind::Verse => "Verse",
            SectionKind::Chorus => "Chorus",
            SectionKind::PreChorus => "Pre-Chorus",
            SectionKind::Bridge => "Bridge",
            SectionKind::Hook => "Hook",
            SectionKind::Outro => "Outro",
            SectionKind::AdLibs => "Ad-libs",
            SectionKind::Unlabeled => "Unlabeled",
        }
    }
}

/// A labeled block of lyric text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    /// Kind taken from the opening tag (`Verse` for untagged leading lines)
    #[serde(rename = "type")]
    pub kind: SectionKind,

    /// Body lines joined by newline, tag line excluded, surrounding whitespace trimmed
    pub text: String,

    /// Position among the parsed sections, starting at 0
    pub ordinal_index: usize,
}

impl Section {
    /// Whitespace-separated words of the section body
    pub fn words(&self) -> Vec<&str> {
        self.text.split_whitespace().collect()
    }

    pub fn is_chorus(&self) -> bool {
        self.kind == SectionKind::Chorus
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_from_label() {
        assert_eq!(SectionKind::from_label("Verse"), SectionKind::Verse);
        assert_eq!(SectionKind::from_label("CHORUS"), SectionKind::Chorus);
        assert_eq!(SectionKind::from_label("Pre-Chorus"), SectionKind::PreChorus);
        assert_eq!(SectionKind::from_label("ad-libs"), SectionKind::AdLibs);
        assert_eq!(SectionKind::from_label("Drop"), SectionKind::Unlabeled);
    }

    #[test]
    fn test_label_round_trip() {
        for kind in [
            SectionKind::Intro,
            SectionKind::Verse,
            SectionKind::Chorus,
            SectionKind::PreChorus,
            SectionKind::Bridge,
            SectionKind::Hook,
            SectionKind::Outro,
            SectionKind::AdLibs,
        ] {
            assert_eq!(SectionKind::from_label(kind.label()), kind);
        }
    }

    #[test]
    fn test_section_words() {
        let section = Section {
            kind: SectionKind::Chorus,
            text: "oh  we go\nhigher".to_string(),
            ordinal_index: 0,
        };
        assert_eq!(section.words(), vec!["oh", "we", "go", "higher"]);
        assert!(section.is_chorus());
    }

    #[test]
    fn test_section_serializes_kind_as_type() {
        let section = Section {
            kind: SectionKind::PreChorus,
            text: "la".to_string(),
            ordinal_index: 2,
        };
        let json = serde_json::to_value(&section).unwrap();
        assert_eq!(json["type"], "prechorus");
        assert_eq!(json["ordinalIndex"], 2);
    }
}
