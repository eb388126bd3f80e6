//! JSONL event log.
//!
//! One line per [`GameEvent`]:
//!
//! ```text
//! {"ts_ms":1250,"generation":2,"event":{"type":"card_revealed","card":5}}
//! ```
//!
//! A write failure disables the log for the rest of the run; the game never
//! stops because of it.

use std::fs::{File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::types::GameEvent;

/// A single log line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRecord {
    pub ts_ms: u64,
    pub generation: u32,
    pub event: GameEvent,
}

#[derive(Serialize)]
struct EventRecordRef<'a> {
    ts_ms: u64,
    generation: u32,
    event: &'a GameEvent,
}

pub struct EventLog<W: Write> {
    out: W,
    buf: Vec<u8>,
    failed: bool,
}

impl EventLog<BufWriter<File>> {
    /// Open `path` for appending, creating it if needed.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("open event log {}", path.display()))?;
        Ok(Self::new(BufWriter::new(file)))
    }
}

impl<W: Write> EventLog<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            buf: Vec::with_capacity(256),
            failed: false,
        }
    }

    /// True once a write has failed.
    pub fn is_disabled(&self) -> bool {
        self.failed
    }

    pub fn record(&mut self, ts_ms: u64, generation: u32, event: &GameEvent) {
        if self.failed {
            return;
        }
        if let Err(e) = self.write_line(ts_ms, generation, event) {
            eprintln!("[EventLog] write failed, logging disabled: {}", e);
            self.failed = true;
        }
    }

    pub fn record_all<'a, I>(&mut self, ts_ms: u64, generation: u32, events: I)
    where
        I: IntoIterator<Item = &'a GameEvent>,
    {
        for event in events {
            self.record(ts_ms, generation, event);
        }
    }

    fn write_line(&mut self, ts_ms: u64, generation: u32, event: &GameEvent) -> io::Result<()> {
        self.buf.clear();
        serde_json::to_writer(
            &mut self.buf,
            &EventRecordRef {
                ts_ms,
                generation,
                event,
            },
        )?;
        self.buf.push(b'\n');
        self.out.write_all(&self.buf)
    }

    pub fn flush(&mut self) {
        if self.failed {
            return;
        }
        if let Err(e) = self.out.flush() {
            eprintln!("[EventLog] flush failed, logging disabled: {}", e);
            self.failed = true;
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
