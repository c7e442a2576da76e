//! JSONL file writer for persona conversation events.
//!
//! Each [`ConversationEvent`] becomes one JSON line: the payload fields plus
//! `type` and an RFC 3339 `timestamp`.

use dialectic_application::{ConversationEvent, ConversationLogger};
use serde_json::Value;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// JSONL conversation logger that writes one JSON object per line.
///
/// Shared by concurrent persona calls through `Mutex<BufWriter<File>>`.
/// Each line is flushed as it is written.
pub struct JsonlConversationLogger {
    writer: Mutex<BufWriter<File>>,
    path: PathBuf,
}

impl JsonlConversationLogger {
    /// Create the log file, and its parent directories if needed.
    pub fn create(path: impl AsRef<Path>) -> io::Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let file = File::create(path)?;
        Ok(Self {
            writer: Mutex::new(BufWriter::new(file)),
            path: path.to_path_buf(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn to_record(event: ConversationEvent, timestamp: String) -> Value {
    match event.payload {
        Value::Object(mut map) => {
            map.insert("type".to_string(), Value::String(event.event_type.to_string()));
            map.insert("timestamp".to_string(), Value::String(timestamp));
            Value::Object(map)
        }
        other => serde_json::json!({
            "type": event.event_type,
            "timestamp": timestamp,
            "data": other,
        }),
    }
}

impl ConversationLogger for JsonlConversationLogger {
    fn log(&self, event: ConversationEvent) {
        let timestamp = chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true);
        let Ok(line) = serde_json::to_string(&to_record(event, timestamp)) else {
            return;
        };

        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", line);
            let _ = writer.flush();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read_lines(path: &Path) -> Vec<Value> {
        std::fs::read_to_string(path)
            .unwrap()
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect()
    }

    #[test]
    fn test_persona_events_become_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("results").join("conversation_20250101_120000.jsonl");
        let logger = JsonlConversationLogger::create(&path).unwrap();

        logger.log(ConversationEvent::persona_response(
            "proponent",
            "openai/gpt-4o-mini",
            "Document (doc_id: d1)",
            r#"{"answer": "1963", "chain_of_thought": []}"#,
        ));
        logger.log(ConversationEvent::persona_error(
            "judge",
            "openai/gpt-4o-mini",
            "Decide.",
            "Timeout",
        ));

        let lines = read_lines(logger.path());
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0]["type"], "persona_response");
        assert_eq!(lines[0]["role"], "proponent");
        assert!(lines[0]["response"].as_str().unwrap().contains("1963"));
        assert_eq!(lines[1]["type"], "persona_error");
        assert_eq!(lines[1]["error"], "Timeout");

        let timestamp = lines[0]["timestamp"].as_str().unwrap();
        assert!(chrono::DateTime::parse_from_rfc3339(timestamp).is_ok());
    }

    #[test]
    fn test_non_object_payload_is_wrapped() {
        let record = to_record(
            ConversationEvent::new("note", serde_json::json!("plain")),
            "2025-01-01T00:00:00.000Z".to_string(),
        );
        assert_eq!(record["type"], "note");
        assert_eq!(record["data"], "plain");
    }

    #[test]
    fn test_create_fails_when_parent_is_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "x").unwrap();
        assert!(JsonlConversationLogger::create(blocker.join("log.jsonl")).is_err());
    }
}
