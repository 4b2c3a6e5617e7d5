//! Graph assembly state machine.
//!
//! A graph is a named (or default-named) container of statements delimited
//! by `{` … `}`. The builder resolves the name, drives one statement at a
//! time, and buffers flattened records until the closing delimiter, at
//! which point the whole graph is flushed to the sink and any trailing text
//! is returned to the caller so a new graph can begin on the same line.

use graphwash_ir::{vocab, Record, RecordSink};

use crate::error::{Result, TrigError};
use crate::statement::StatementBuilder;

const GRAPH_OPEN: char = '{';
const GRAPH_CLOSE: char = '}';

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum State {
    Naming,
    Populating,
    Completed,
}

/// Builds one graph across as many `load` calls as needed.
pub struct GraphBuilder {
    state: State,
    name: Option<String>,
    name_buf: String,
    pending: Option<StatementBuilder>,
    records: Vec<Record>,
    statements_emitted: usize,
    statements_skipped: usize,
}

impl GraphBuilder {
    /// Create a builder waiting for a graph name.
    pub fn new() -> Self {
        Self {
            state: State::Naming,
            name: None,
            name_buf: String::new(),
            pending: None,
            records: Vec::new(),
            statements_emitted: 0,
            statements_skipped: 0,
        }
    }

    /// Whether the closing delimiter has been seen and the graph flushed.
    pub fn is_complete(&self) -> bool {
        self.state == State::Completed
    }

    /// Whether the builder has consumed no meaningful input yet.
    pub fn is_idle(&self) -> bool {
        self.state == State::Naming && self.name_buf.trim().is_empty()
    }

    /// Resolved graph name, or the default until naming finishes.
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or(vocab::DEFAULT_GRAPH_NAME)
    }

    /// Statements flattened into the record buffer so far.
    pub fn statements_emitted(&self) -> usize {
        self.statements_emitted
    }

    /// Statements abandoned by classification-failure recovery.
    pub fn statements_skipped(&self) -> usize {
        self.statements_skipped
    }

    /// Feed a line fragment, returning the unconsumed remainder.
    ///
    /// The remainder is non-empty only after the graph completes, in which
    /// case it is the text following the closing delimiter.
    pub fn load<'a>(&mut self, line: &'a str, sink: &mut dyn RecordSink) -> Result<&'a str> {
        let mut rest = line;
        while !rest.trim().is_empty() && !self.is_complete() {
            rest = match self.state {
                State::Naming => self.resolve_name(rest),
                State::Populating => self.populate(rest, sink)?,
                State::Completed => rest,
            };
        }
        Ok(rest)
    }

    /// Accumulate text until the opening delimiter; what precedes it,
    /// trimmed, is the graph name (or the default when empty).
    fn resolve_name<'a>(&mut self, text: &'a str) -> &'a str {
        match text.split_once(GRAPH_OPEN) {
            Some((before, after)) => {
                self.name_buf.push_str(before);
                let name = self.name_buf.trim();
                let name = if name.is_empty() {
                    vocab::DEFAULT_GRAPH_NAME
                } else {
                    name
                };
                tracing::debug!(name, "graph named");
                self.name = Some(name.to_string());
                self.state = State::Populating;
                after
            }
            None => {
                self.name_buf.push_str(text);
                ""
            }
        }
    }

    /// Drive the in-flight statement, watching for the closing delimiter —
    /// either returned unconsumed from a statement's boundary step or found
    /// directly in residual text when no statement is mid-flight.
    fn populate<'a>(&mut self, text: &'a str, sink: &mut dyn RecordSink) -> Result<&'a str> {
        let trimmed = text.trim_start();

        if self.pending.is_none() {
            if let Some(after) = trimmed.strip_prefix(GRAPH_CLOSE) {
                return Ok(self.close(after, sink));
            }
        }

        let mut stmt = self.pending.take().unwrap_or_default();
        match stmt.feed(trimmed) {
            Ok(rest) => {
                if stmt.is_complete() {
                    self.records.extend(stmt.flatten());
                    self.statements_emitted += 1;
                    tracing::debug!(total = self.statements_emitted, "statement appended");
                } else {
                    self.pending = Some(stmt);
                }

                let rest = rest.trim_start();
                if self.pending.is_none() {
                    if let Some(after) = rest.strip_prefix(GRAPH_CLOSE) {
                        return Ok(self.close(after, sink));
                    }
                }
                Ok(rest)
            }
            Err(err @ TrigError::UnrecognizedTerm { .. }) => {
                self.statements_skipped += 1;
                tracing::warn!(%err, "statement abandoned; skipping to the next boundary");
                Ok(self.skip_to_boundary(trimmed, sink))
            }
            Err(err) => Err(err),
        }
    }

    /// Classification-failure recovery: resume after the next statement
    /// terminator, or close the graph if its delimiter comes first. With no
    /// boundary on the fragment, the rest of the fragment is dropped.
    fn skip_to_boundary<'a>(&mut self, text: &'a str, sink: &mut dyn RecordSink) -> &'a str {
        match text.find(['.', GRAPH_CLOSE]) {
            Some(idx) if text[idx..].starts_with(GRAPH_CLOSE) => self.close(&text[idx + 1..], sink),
            Some(idx) => &text[idx + 1..],
            None => "",
        }
    }

    /// Flush the buffered graph to the sink and complete.
    fn close<'a>(&mut self, after: &'a str, sink: &mut dyn RecordSink) -> &'a str {
        sink.begin_graph(self.name());
        for record in &self.records {
            sink.record(record);
        }
        sink.end_graph();
        tracing::debug!(
            name = self.name(),
            statements = self.statements_emitted,
            "graph completed"
        );
        self.records.clear();
        self.state = State::Completed;
        after
    }
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}
