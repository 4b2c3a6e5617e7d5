//! Stream driver: the thin boundary between the line source and the graph
//! state machine.
//!
//! Owns the single in-flight graph, feeds it successive pre-filtered lines,
//! and replaces it with a fresh instance whenever the previous one
//! completes — including mid-line, so a new graph can begin immediately
//! after the previous one's closing delimiter.

use graphwash_ir::RecordSink;

use crate::error::Result;
use crate::graph::GraphBuilder;

/// Counters accumulated over one cleaning run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunStats {
    /// Graphs closed and flushed
    pub graphs_completed: usize,
    /// Statements flattened into records
    pub statements_emitted: usize,
    /// Statements abandoned by recovery or graph abort
    pub statements_skipped: usize,
}

/// Drives line fragments through successive graphs into a sink.
pub struct StreamDriver<S> {
    sink: S,
    graph: GraphBuilder,
    stats: RunStats,
}

impl<S: RecordSink> StreamDriver<S> {
    /// Create a driver emitting to `sink`.
    pub fn new(sink: S) -> Self {
        Self {
            sink,
            graph: GraphBuilder::new(),
            stats: RunStats::default(),
        }
    }

    /// Feed one pre-filtered input line to completion.
    ///
    /// On a `MalformedBoundary` error the in-flight graph is left in place;
    /// the caller decides between aborting the stream and
    /// [`abandon_graph`](Self::abandon_graph).
    pub fn feed_line(&mut self, line: &str) -> Result<()> {
        let mut rest = line;
        while !rest.trim().is_empty() {
            rest = self.graph.load(rest, &mut self.sink)?;
            if self.graph.is_complete() {
                self.stats.graphs_completed += 1;
                self.stats.statements_emitted += self.graph.statements_emitted();
                self.stats.statements_skipped += self.graph.statements_skipped();
                self.graph = GraphBuilder::new();
            }
        }
        Ok(())
    }

    /// Drop the in-flight graph after a fatal statement error and start
    /// fresh. Its buffered statements were never flushed, so they count as
    /// skipped, along with the statement that caused the abort.
    pub fn abandon_graph(&mut self) {
        let graph = std::mem::replace(&mut self.graph, GraphBuilder::new());
        self.stats.statements_skipped +=
            graph.statements_emitted() + graph.statements_skipped() + 1;
    }

    /// Counters so far.
    pub fn stats(&self) -> RunStats {
        self.stats
    }

    /// Access the sink, e.g. for verbatim pass-through lines.
    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Signal end of input, returning the sink and final counters.
    ///
    /// A graph left mid-flight means the input was truncated; its buffered
    /// statements are dropped and counted as skipped.
    pub fn finish(mut self) -> (S, RunStats) {
        if !self.graph.is_idle() {
            tracing::warn!(
                name = self.graph.name(),
                "input ended inside an unterminated graph; its statements were dropped"
            );
            self.stats.statements_skipped +=
                self.graph.statements_emitted() + self.graph.statements_skipped();
        }
        (self.sink, self.stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use graphwash_ir::RecordCollectorSink;

    #[test]
    fn test_two_graphs_on_one_line() {
        let mut driver = StreamDriver::new(RecordCollectorSink::new());
        driver
            .feed_line("A{ <s> <p> <o> } B{ <s2> <p2> <o2> }")
            .unwrap();
        let (sink, stats) = driver.finish();
        let graphs = sink.finish();
        assert_eq!(graphs.len(), 2);
        assert_eq!(graphs[0].name, "A");
        assert_eq!(graphs[1].name, "B");
        assert_eq!(stats.graphs_completed, 2);
        assert_eq!(stats.statements_emitted, 2);
    }

    #[test]
    fn test_stats_accumulate_across_graphs() {
        let mut driver = StreamDriver::new(RecordCollectorSink::new());
        driver.feed_line("A{ <s> <p> <o> . <s> <q> <r> }").unwrap();
        driver.feed_line("B{ ???bad . <s> <p> <o> }").unwrap();
        let (_, stats) = driver.finish();
        assert_eq!(stats.graphs_completed, 2);
        assert_eq!(stats.statements_emitted, 3);
        assert_eq!(stats.statements_skipped, 1);
    }

    #[test]
    fn test_truncated_input_counts_skipped() {
        let mut driver = StreamDriver::new(RecordCollectorSink::new());
        driver.feed_line("A{ <s> <p> <o> .").unwrap();
        let (sink, stats) = driver.finish();
        assert!(sink.finish().is_empty());
        assert_eq!(stats.graphs_completed, 0);
        assert_eq!(stats.statements_skipped, 1);
    }

    #[test]
    fn test_abandon_graph_counts_buffered_statements() {
        let mut driver = StreamDriver::new(RecordCollectorSink::new());
        driver.feed_line("A{ <s> <p> <o> .").unwrap();
        let err = driver.feed_line("<s> <p> <o> x").unwrap_err();
        assert!(matches!(
            err,
            crate::error::TrigError::MalformedBoundary { .. }
        ));
        driver.abandon_graph();
        let (_, stats) = driver.finish();
        // One buffered statement plus the one that hit the bad boundary.
        assert_eq!(stats.statements_skipped, 2);
    }
}
