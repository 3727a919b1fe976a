//! Received-alert audit log.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::PathBuf;

use alert_feed::Alert;
use chrono::Utc;

/// Append-only JSON-lines log of delivered alerts.
#[derive(Debug, Clone)]
pub struct AuditLog {
    path: PathBuf,
}

impl AuditLog {
    /// Create an audit log writing to `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Append one record for a delivered alert.
    pub fn append(&self, alert: &Alert) -> io::Result<()> {
        let record = serde_json::json!({
            "ts": Utc::now().to_rfc3339(),
            "alert": alert.raw,
        });

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{}", record)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_writes_one_json_line_per_alert() {
        let dir = tempfile::tempdir().unwrap();
        let log = AuditLog::new(dir.path().join("received_alerts.jsonl"));

        let alert = Alert::parse(r#"{"id": "1", "title": "t", "data": ["Tel Aviv"]}"#).unwrap();
        log.append(&alert).unwrap();
        log.append(&alert).unwrap();

        let contents = std::fs::read_to_string(dir.path().join("received_alerts.jsonl")).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 2);

        for line in lines {
            let record: serde_json::Value = serde_json::from_str(line).unwrap();
            assert_eq!(record["alert"]["id"], "1");
            assert!(record["ts"].is_string());
        }
    }
}
