// Analysis pipeline module
// Runs every analyzer over one lyric sheet and records a stage trace

pub mod report;
pub mod trace;

pub use report::{analyze_song, GenreFit, ReportHeadline, SongReport};
pub use trace::{TraceBuilder, TraceEntry, TraceError, TraceWriter};
