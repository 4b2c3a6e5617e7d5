//! Cleaned-record writer.
//!
//! Implements [`RecordSink`] over a buffered writer. Each flushed graph
//! becomes a name-and-open marker line, one line per record (three
//! tab-separated canonical terms), and a close marker line. Pass-through
//! lines are written verbatim.
//!
//! Sink methods are infallible by contract, so the first I/O error is
//! stashed and surfaced by [`RecordWriter::finish`].

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use graphwash_ir::{Record, RecordSink};

/// Writes flushed graphs as marker-delimited, tab-separated records.
pub struct RecordWriter<W: Write> {
    out: W,
    io_error: Option<io::Error>,
}

impl RecordWriter<BufWriter<File>> {
    /// Create a writer over a new file at `path`.
    pub fn create(path: &Path) -> io::Result<Self> {
        Ok(Self::new(BufWriter::new(File::create(path)?)))
    }
}

impl<W: Write> RecordWriter<W> {
    /// Create a writer over any `Write` implementation.
    pub fn new(out: W) -> Self {
        Self {
            out,
            io_error: None,
        }
    }

    /// Copy one input line to the output verbatim.
    pub fn passthrough(&mut self, line: &str) {
        self.checked(|out| writeln!(out, "{line}"));
    }

    /// Flush and surface any I/O error stashed by the sink methods.
    pub fn finish(mut self) -> io::Result<W> {
        if let Some(err) = self.io_error.take() {
            return Err(err);
        }
        self.out.flush()?;
        Ok(self.out)
    }

    fn checked(&mut self, write: impl FnOnce(&mut W) -> io::Result<()>) {
        if self.io_error.is_some() {
            return;
        }
        if let Err(err) = write(&mut self.out) {
            self.io_error = Some(err);
        }
    }
}

impl<W: Write> RecordSink for RecordWriter<W> {
    fn begin_graph(&mut self, name: &str) {
        self.checked(|out| writeln!(out, "{name}\t{{"));
    }

    fn record(&mut self, record: &Record) {
        let line = record.to_tsv();
        self.checked(|out| writeln!(out, "{line}"));
    }

    fn end_graph(&mut self) {
        self.checked(|out| writeln!(out, "}}"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_graph_output_shape() {
        let mut writer = RecordWriter::new(Vec::new());
        writer.begin_graph("People");
        writer.record(&Record::new("<s>", "<p>", "\"o\""));
        writer.end_graph();

        let out = writer.finish().unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "People\t{\n<s>\t<p>\t\"o\"\n}\n"
        );
    }

    #[test]
    fn test_passthrough_is_verbatim() {
        let mut writer = RecordWriter::new(Vec::new());
        writer.passthrough("@prefix ex: <http://example.org/> .");
        let out = writer.finish().unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "@prefix ex: <http://example.org/> .\n"
        );
    }
}
