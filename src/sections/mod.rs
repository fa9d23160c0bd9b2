// Section parsing module
// Splits raw lyric text into tagged sections (verse, chorus, bridge, ...)

pub mod parser;
pub mod types;

pub use parser::{parse_sections, section_outline, TagVocabulary};
pub use types::{Section, SectionKind};
