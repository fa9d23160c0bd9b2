// Analysis progress tracing
// In-memory stage trace with optional append-only JSONL export

use serde::{Deserialize, Serialize};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while exporting a trace
#[derive(Debug, Error)]
pub enum TraceError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

/// A single trace entry in the analysis log
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraceEntry {
    /// Stage name (e.g., "sections", "flow", "hit_potential")
    pub stage: String,

    /// Progress of the whole report [0.0, 1.0]
    pub progress: f32,

    /// Human-readable message describing the stage outcome
    pub message: String,

    /// Optional structured data (e.g., headline scores)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

impl TraceEntry {
    pub fn new(stage: String, progress: f32, message: String) -> Self {
        TraceEntry {
            stage,
            progress: progress.clamp(0.0, 1.0),
            message,
            data: None,
        }
    }

    /// Create a trace entry with structured data
    pub fn with_data(
        stage: String,
        progress: f32,
        message: String,
        data: serde_json::Value,
    ) -> Self {
        TraceEntry {
            data: Some(data),
            ..TraceEntry::new(stage, progress, message)
        }
    }

    /// Serialize to JSON line (with newline)
    pub fn to_json_line(&self) -> Result<String, serde_json::Error> {
        let json = serde_json::to_string(self)?;
        Ok(format!("{}\n", json))
    }
}

/// Trace file writer.
/// Appends entries to a JSONL file, creating it if needed.
pub struct TraceWriter {
    file_path: PathBuf,
}

impl TraceWriter {
    pub fn new(file_path: PathBuf) -> Self {
        TraceWriter { file_path }
    }

    /// Append all entries and flush once
    pub fn write_batch(&self, entries: &[TraceEntry]) -> Result<(), TraceError> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.file_path)?;

        for entry in entries {
            let json_line = entry.to_json_line()?;
            file.write_all(json_line.as_bytes())?;
        }

        file.flush()?;
        log::debug!(
            "Wrote {} trace entries to {}",
            entries.len(),
            self.file_path.display()
        );
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.file_path
    }
}

/// Helper builder for creating trace entries
pub struct TraceBuilder {
    stage: String,
}

impl TraceBuilder {
    /// Start building a trace entry for a stage
    pub fn stage(stage: impl Into<String>) -> Self {
        TraceBuilder {
            stage: stage.into(),
        }
    }

    /// Create a start entry (progress = 0.0)
    pub fn start(self, message: impl Into<String>) -> TraceEntry {
        TraceEntry::new(self.stage, 0.0, message.into())
    }

    pub fn progress(self, progress: f32, message: impl Into<String>) -> TraceEntry {
        TraceEntry::new(self.stage, progress, message.into())
    }

    /// Create a complete entry (progress = 1.0)
    pub fn complete(self, message: impl Into<String>) -> TraceEntry {
        TraceEntry::new(self.stage, 1.0, message.into())
    }

    pub fn with_data(
        self,
        progress: f32,
        message: impl Into<String>,
        data: serde_json::Value,
    ) -> TraceEntry {
        TraceEntry::with_data(self.stage, progress, message.into(), data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn read_lines(path: &Path) -> Vec<TraceEntry> {
        fs::read_to_string(path)
            .unwrap()
            .lines()
            .filter(|l| !l.trim().is_empty())
            .map(|l| serde_json::from_str(l).unwrap())
            .collect()
    }

    #[test]
    fn test_trace_entry_with_data() {
        let entry = TraceEntry::with_data(
            "flow".to_string(),
            0.4,
            "Flow analyzed".to_string(),
            serde_json::json!({ "flowScore": 92 }),
        );

        assert_eq!(entry.stage, "flow");
        assert_eq!(entry.data.unwrap()["flowScore"], 92);
    }

    #[test]
    fn test_progress_clamping() {
        let entry1 = TraceEntry::new("test".to_string(), -0.5, "test".to_string());
        assert_eq!(entry1.progress, 0.0);

        let entry2 = TraceEntry::new("test".to_string(), 1.5, "test".to_string());
        assert_eq!(entry2.progress, 1.0);
    }

    #[test]
    fn test_trace_builder() {
        let entry = TraceBuilder::stage("lyrics").progress(0.5, "Halfway done");
        assert_eq!(entry.stage, "lyrics");
        assert_eq!(entry.progress, 0.5);
        assert_eq!(entry.message, "Halfway done");

        assert_eq!(TraceBuilder::stage("report").start("Starting").progress, 0.0);
        assert_eq!(TraceBuilder::stage("report").complete("Done").progress, 1.0);
    }

    #[test]
    fn test_json_line_format() {
        let entry = TraceEntry::new("sections".to_string(), 0.5, "Parsed".to_string());
        let json_line = entry.to_json_line().unwrap();

        assert!(json_line.ends_with('\n'));
        assert!(!json_line.contains("\"data\""));
        let parsed: TraceEntry = serde_json::from_str(json_line.trim()).unwrap();
        assert_eq!(parsed, entry);
    }

    #[test]
    fn test_trace_writer_appends() {
        let temp_dir = TempDir::new().unwrap();
        let trace_path = temp_dir.path().join("trace.jsonl");
        let writer = TraceWriter::new(trace_path.clone());

        writer
            .write_batch(&[
                TraceBuilder::stage("report").start("Start"),
                TraceBuilder::stage("report").complete("Done"),
            ])
            .unwrap();
        writer
            .write_batch(&[TraceBuilder::stage("report").complete("Again")])
            .unwrap();

        let entries = read_lines(writer.path());
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].progress, 0.0);
        assert_eq!(entries[2].message, "Again");
    }
}
