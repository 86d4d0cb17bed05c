//! Hand-off point to the aggregation pipeline.
//!
//! Storage is someone else's job. A sink only has to accept finished
//! snapshots; what it does with them is up to the implementation.

use std::io::Write;

use crate::error::Result;
use crate::stats::ParsedStats;

pub trait StatsSink {
    fn accept(&mut self, stats: &ParsedStats) -> Result<()>;
}

/// Writes one JSON object per line.
pub struct JsonLinesSink<W: Write> {
    writer: W,
    written: usize,
}

impl<W: Write> JsonLinesSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, written: 0 }
    }

    pub fn written(&self) -> usize {
        self.written
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> StatsSink for JsonLinesSink<W> {
    fn accept(&mut self, stats: &ParsedStats) -> Result<()> {
        serde_json::to_writer(&mut self.writer, stats)?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()?;
        self.written += 1;
        Ok(())
    }
}

/// Keeps snapshots in memory.
#[derive(Debug, Default)]
pub struct MemorySink {
    pub received: Vec<ParsedStats>,
}

impl StatsSink for MemorySink {
    fn accept(&mut self, stats: &ParsedStats) -> Result<()> {
        self.received.push(stats.clone());
        Ok(())
    }
}
