//! Shared data model for the graphwash cleaning pass
//!
//! This crate provides the types exchanged between the TriG parsing core and
//! the output layer: term kinds and terms, flattened statement records, and
//! the [`RecordSink`] event interface that parsers emit completed graphs to
//! without knowing the concrete writer.
//!
//! # Key Design Principles
//!
//! 1. **Raw and canonical forms travel together** - A [`Term`] keeps the
//!    exact matched span alongside its normalized rendition, so diagnostics
//!    can always show what was actually read.
//!
//! 2. **Fixed-arity records** - A [`Record`] is always exactly three
//!    canonical term strings. Multi-pair statements flatten to one record
//!    per predicate/object pair, all sharing the subject.
//!
//! 3. **Sink-agnostic emission** - Graph builders flush through the
//!    [`RecordSink`] trait. [`RecordCollectorSink`] collects in memory for
//!    tests; the CLI provides a file-backed implementation.

pub mod vocab;

mod record;
mod sink;
mod term;

pub use record::Record;
pub use sink::{CollectedGraph, RecordCollectorSink, RecordSink};
pub use term::{Term, TermKind};
