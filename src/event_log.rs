//! JSON-lines event log.
//!
//! One object per line, each with a millisecond timestamp relative to the
//! start of the process and an `event` tag. Write errors disable the log
//! instead of interrupting play.

use std::fs::OpenOptions;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::types::{LockEvent, Phase};

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum LogRecord {
    SessionStart {
        seed: u64,
        tick_ms: u32,
    },
    Lock {
        #[serde(flatten)]
        lock: LockEvent,
    },
    Phase {
        from: Phase,
        to: Phase,
        score: u32,
    },
}

#[derive(Serialize)]
struct Line<'a> {
    t_ms: u64,
    #[serde(flatten)]
    record: &'a LogRecord,
}

pub struct EventLog<W: Write> {
    out: Option<W>,
    buf: Vec<u8>,
}

impl EventLog<BufWriter<std::fs::File>> {
    /// Append to `path`, creating it if needed.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("opening event log {}", path.display()))?;
        Ok(Self::new(BufWriter::new(file)))
    }
}

impl<W: Write> EventLog<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Some(out),
            buf: Vec::with_capacity(256),
        }
    }

    /// A log that drops every record.
    pub fn disabled() -> Self {
        Self {
            out: None,
            buf: Vec::new(),
        }
    }

    pub fn record(&mut self, t_ms: u64, record: &LogRecord) {
        let Some(out) = self.out.as_mut() else {
            return;
        };

        self.buf.clear();
        if serde_json::to_writer(&mut self.buf, &Line { t_ms, record }).is_err() {
            return;
        }
        self.buf.push(b'\n');
        if out.write_all(&self.buf).and_then(|_| out.flush()).is_err() {
            self.out = None;
        }
    }

    /// Give back the writer, if it is still healthy.
    pub fn into_inner(self) -> Option<W> {
        self.out
    }
}
