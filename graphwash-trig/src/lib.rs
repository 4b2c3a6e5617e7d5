//! TriG-style graph-stream cleaner core.
//!
//! This crate provides the incremental term tokenizer and the two nested
//! parsing state machines (statement assembly and graph assembly) that
//! consume a named-graph export one line fragment at a time, normalize each
//! term's lexical form, and re-emit every statement as a flattened
//! fixed-arity record through a [`RecordSink`](graphwash_ir::RecordSink).
//!
//! This is a data-cleaning pass over a specific, narrower rule set than any
//! formal grammar for the format: terms match within a single line
//! fragment, normalization applies a fixed fixup list, and no escape
//! sequences are decoded beyond stripping banned bytes.
//!
//! # Example
//!
//! ```
//! use graphwash_ir::RecordCollectorSink;
//! use graphwash_trig::clean;
//!
//! let input = "\
//! People{
//! <http://example.org/a> <http://example.org/name> \"Ada\" .
//! }
//! ";
//!
//! let (sink, stats) = clean(input, RecordCollectorSink::new()).unwrap();
//! let graphs = sink.finish();
//! assert_eq!(graphs[0].name, "People");
//! assert_eq!(stats.statements_emitted, 1);
//! ```

pub mod driver;
pub mod error;
pub mod graph;
pub mod lex;
pub mod normalize;
pub mod statement;

pub use driver::{RunStats, StreamDriver};
pub use error::{Result, TrigError};
pub use graph::GraphBuilder;
pub use lex::{classify, Classified};
pub use normalize::normalize;
pub use statement::StatementBuilder;

use graphwash_ir::RecordSink;

/// Clean a whole in-memory document, feeding it line by line through a
/// [`StreamDriver`] into `sink`.
pub fn clean<S: RecordSink>(input: &str, sink: S) -> Result<(S, RunStats)> {
    let mut driver = StreamDriver::new(sink);
    for line in input.lines() {
        driver.feed_line(line)?;
    }
    Ok(driver.finish())
}
