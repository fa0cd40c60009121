use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::record::VotingRecord;

/// Persistence boundary. The pipeline emits records; where they go is the
/// sink's concern.
pub trait RecordSink {
    fn write(&mut self, record: &VotingRecord) -> Result<()>;
}

/// Writes each record to `<outdir>/<kan_id>.json`, pretty-printed.
pub struct JsonDirWriter {
    outdir: PathBuf,
    indent: String,
}

impl JsonDirWriter {
    pub fn new(outdir: impl Into<PathBuf>, indent: usize) -> Self {
        Self {
            outdir: outdir.into(),
            indent: " ".repeat(indent),
        }
    }
}

impl RecordSink for JsonDirWriter {
    fn write(&mut self, record: &VotingRecord) -> Result<()> {
        let path = self.outdir.join(format!("{}.json", record.kan_id));
        let file = File::create(&path)
            .with_context(|| format!("Failed to create {}", path.display()))?;
        let formatter = serde_json::ser::PrettyFormatter::with_indent(self.indent.as_bytes());
        let mut ser = serde_json::Serializer::with_formatter(BufWriter::new(file), formatter);
        record
            .serialize(&mut ser)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(())
    }
}

// ── Tests ──
