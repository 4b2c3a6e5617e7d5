//! RecordSink trait for event-driven graph emission
//!
//! Graph builders buffer records until their graph closes, then flush the
//! whole graph through a sink. The sink can be:
//! - [`RecordCollectorSink`]: collects flushed graphs in memory (tests,
//!   small inputs)
//! - the CLI's file-backed writer
//!
//! # Example
//!
//! ```
//! use graphwash_ir::{Record, RecordCollectorSink, RecordSink};
//!
//! let mut sink = RecordCollectorSink::new();
//! sink.begin_graph("People");
//! sink.record(&Record::new("<s>", "<p>", "\"o\""));
//! sink.end_graph();
//!
//! let graphs = sink.finish();
//! assert_eq!(graphs.len(), 1);
//! assert_eq!(graphs[0].name, "People");
//! ```

use crate::Record;

/// Event-driven interface for emitting completed graphs.
///
/// Calls arrive strictly as `begin_graph`, zero or more `record`s, then
/// `end_graph`; a builder never interleaves graphs.
pub trait RecordSink {
    /// Called once per graph, with its resolved name, before any records.
    fn begin_graph(&mut self, name: &str);

    /// Called once per flattened statement row.
    fn record(&mut self, record: &Record);

    /// Called once per graph after its last record.
    fn end_graph(&mut self);
}

/// One flushed graph as captured by [`RecordCollectorSink`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CollectedGraph {
    /// Resolved graph name
    pub name: String,
    /// Flattened records in emission order
    pub records: Vec<Record>,
}

/// Sink that collects flushed graphs in memory.
#[derive(Debug, Default)]
pub struct RecordCollectorSink {
    graphs: Vec<CollectedGraph>,
    open: Option<CollectedGraph>,
}

impl RecordCollectorSink {
    /// Create an empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Graphs flushed so far.
    pub fn graphs(&self) -> &[CollectedGraph] {
        &self.graphs
    }

    /// Consume the collector and return the flushed graphs.
    pub fn finish(self) -> Vec<CollectedGraph> {
        self.graphs
    }
}

impl RecordSink for RecordCollectorSink {
    fn begin_graph(&mut self, name: &str) {
        self.open = Some(CollectedGraph {
            name: name.to_string(),
            records: Vec::new(),
        });
    }

    fn record(&mut self, record: &Record) {
        if let Some(graph) = &mut self.open {
            graph.records.push(record.clone());
        }
    }

    fn end_graph(&mut self) {
        if let Some(graph) = self.open.take() {
            self.graphs.push(graph);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collects_in_order() {
        let mut sink = RecordCollectorSink::new();
        sink.begin_graph("A");
        sink.record(&Record::new("<s>", "<p>", "<o1>"));
        sink.record(&Record::new("<s>", "<p>", "<o2>"));
        sink.end_graph();
        sink.begin_graph("B");
        sink.end_graph();

        let graphs = sink.finish();
        assert_eq!(graphs.len(), 2);
        assert_eq!(graphs[0].name, "A");
        assert_eq!(graphs[0].records.len(), 2);
        assert_eq!(graphs[0].records[1].object, "<o2>");
        assert_eq!(graphs[1].name, "B");
        assert!(graphs[1].records.is_empty());
    }

    #[test]
    fn test_record_outside_graph_is_dropped() {
        let mut sink = RecordCollectorSink::new();
        sink.record(&Record::new("<s>", "<p>", "<o>"));
        assert!(sink.finish().is_empty());
    }
}
