//! JSONL file writer for experiment output records.

use dialectic_application::{ResultSink, ResultSinkError};
use dialectic_domain::DebateRecord;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Writes one [`DebateRecord`] per line, flushing after each.
pub struct JsonlResultWriter {
    writer: BufWriter<File>,
    path: PathBuf,
    written: usize,
}

impl JsonlResultWriter {
    /// Create (truncate) the output file, and its parent directories if needed.
    pub fn create(path: impl AsRef<Path>) -> io::Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        Ok(Self {
            writer: BufWriter::new(File::create(path)?),
            path: path.to_path_buf(),
            written: 0,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Records written so far.
    pub fn written(&self) -> usize {
        self.written
    }
}

impl ResultSink for JsonlResultWriter {
    fn write(&mut self, record: &DebateRecord) -> Result<(), ResultSinkError> {
        let line = serde_json::to_string(record)?;
        writeln!(self.writer, "{}", line)?;
        self.writer.flush()?;
        self.written += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dialectic_domain::{
        DebateOutcome, DebateTranscript, Document, OpeningStatement, QueryContext, Question,
        SeatId, SeatMap,
    };
    use serde_json::Value;

    fn context() -> QueryContext {
        QueryContext::new(
            "q-7",
            Question::new("Où est né Dumas ?"),
            vec![Document::new("d1", "Villers-Cotterêts.")],
        )
        .unwrap()
        .with_gold_answers(vec!["Villers-Cotterêts".into()])
    }

    #[test]
    fn test_each_record_is_one_line() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out").join("ambigdocs_results_20250101_120000.jsonl");
        let mut writer = JsonlResultWriter::create(&path).unwrap();

        let mut transcript = DebateTranscript::new();
        let mut statements: SeatMap<OpeningStatement> = SeatMap::new();
        statements.insert(
            SeatId::from_index(0),
            OpeningStatement::new("Villers-Cotterêts", vec!["d1".into()]),
        );
        transcript.record_opening_statements(statements);
        let aborted = DebateOutcome::Aborted {
            error: "Failed to parse Devil's Advocate challenges.".to_string(),
            transcript,
        };

        writer.write(&DebateRecord::debated(&context(), aborted)).unwrap();
        writer.write(&DebateRecord::failed("q-8", "Gateway error: Timeout")).unwrap();
        assert_eq!(writer.written(), 2);

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<Value> = content
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0]["query_id"], "q-7");
        assert_eq!(lines[0]["final_answer_object"], serde_json::json!({}));
        assert_eq!(lines[1], serde_json::json!({"query_id": "q-8", "error": "Gateway error: Timeout"}));

        // Non-ASCII text is written as-is, not escaped.
        assert!(content.contains("Villers-Cotterêts"));
    }
}
