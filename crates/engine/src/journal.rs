//! JSON-lines journal of applied events.
//!
//! One record per event the loop applies. Write failures switch the journal
//! off (reported once on stderr); the game keeps running.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::core::LockEvent;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JournalRecord {
    pub seq: u64,
    pub episode_id: u32,
    /// "tick" or the action name
    pub event: &'static str,
    /// Whether the event changed the state
    pub changed: bool,
    pub phase: &'static str,
    pub score: u32,
    pub lines: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lock: Option<LockRecord>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LockRecord {
    pub lines_cleared: u32,
    pub points: u32,
    pub game_over: bool,
}

impl From<LockEvent> for LockRecord {
    fn from(ev: LockEvent) -> Self {
        Self {
            lines_cleared: ev.lines_cleared,
            points: ev.points,
            game_over: ev.game_over,
        }
    }
}

/// Line-oriented record sink
pub struct Journal<W: Write> {
    out: Option<W>,
    buf: Vec<u8>,
}

impl Journal<BufWriter<File>> {
    /// Open (append) the journal file at `path`
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("journal: open {} failed", path.display()))?;
        Ok(Self::new(BufWriter::new(file)))
    }
}

impl<W: Write> Journal<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Some(out),
            buf: Vec::with_capacity(256),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.out.is_some()
    }

    /// Append one record as a JSON line
    pub fn record(&mut self, rec: &JournalRecord) {
        let Some(out) = self.out.as_mut() else {
            return;
        };

        self.buf.clear();
        if let Err(e) = serde_json::to_writer(&mut self.buf, rec) {
            eprintln!("[Journal] encode error: {}", e);
            return;
        }
        self.buf.push(b'\n');

        if let Err(e) = out.write_all(&self.buf) {
            eprintln!("[Journal] write error, journal disabled: {}", e);
            self.out = None;
        }
    }

    /// Flush buffered records
    pub fn flush(&mut self) {
        if let Some(out) = self.out.as_mut() {
            if let Err(e) = out.flush() {
                eprintln!("[Journal] flush error, journal disabled: {}", e);
                self.out = None;
            }
        }
    }

    /// Erase the writer type
    pub fn boxed(self) -> Journal<Box<dyn Write + Send>>
    where
        W: Send + 'static,
    {
        Journal {
            out: self.out.map(|w| Box::new(w) as Box<dyn Write + Send>),
            buf: self.buf,
        }
    }

    /// Recover the writer (tests inspect in-memory output this way)
    pub fn into_inner(mut self) -> Option<W> {
        self.flush();
        self.out.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Phase;
    use std::io;

    fn record(seq: u64, lock: Option<LockRecord>) -> JournalRecord {
        JournalRecord {
            seq,
            episode_id: 0,
            event: "tick",
            changed: true,
            phase: Phase::Playing.as_str(),
            score: 0,
            lines: 0,
            lock,
        }
    }

    #[test]
    fn test_records_are_json_lines() {
        let mut journal = Journal::new(Vec::new());
        journal.record(&record(1, None));
        journal.record(&record(
            2,
            Some(LockRecord {
                lines_cleared: 2,
                points: 300,
                game_over: false,
            }),
        ));

        let bytes = journal.into_inner().unwrap();
        let text = String::from_utf8(bytes).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);

        let first: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(first["seq"], 1);
        assert_eq!(first["event"], "tick");
        assert_eq!(first["phase"], "playing");
        assert!(first.get("lock").is_none());

        let second: serde_json::Value = serde_json::from_str(lines[1]).unwrap();
        assert_eq!(second["lock"]["linesCleared"], 2);
        assert_eq!(second["lock"]["points"], 300);
        assert_eq!(second["episodeId"], 0);
    }

    struct FailingWriter;

    impl Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::Other, "disk full"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_failure_disables_journal() {
        let mut journal = Journal::new(FailingWriter);
        assert!(journal.is_enabled());
        journal.record(&record(1, None));
        assert!(!journal.is_enabled());
        // Further records are silently dropped.
        journal.record(&record(2, None));
    }
}
