//! Statement assembly state machine.
//!
//! A statement is one subject plus one or more predicate/object pairs,
//! closed by a single punctuation character. The builder consumes line
//! fragments incrementally: when a fragment runs out before a grammatical
//! unit closes, it returns control with its partial state intact and is
//! re-entered with the next fragment.

use graphwash_ir::{Record, Term, TermKind};

use crate::error::{Result, TrigError};
use crate::lex::{classify, Classified};
use crate::normalize::normalize;

/// Term kinds permitted at the subject position, in match-priority order.
const SUBJECT_KINDS: &[TermKind] = &[TermKind::Reference, TermKind::AnonymousNode];

/// Term kinds permitted at the predicate position.
const PREDICATE_KINDS: &[TermKind] = &[TermKind::Reference];

/// Term kinds permitted at the object position, in match-priority order.
const OBJECT_KINDS: &[TermKind] = &[
    TermKind::Reference,
    TermKind::AnonymousNode,
    TermKind::Literal,
];

/// One slot of a statement: at most one term, bound from a fixed candidate
/// list. Once filled, the term never changes.
#[derive(Clone, Debug)]
struct Section {
    term: Option<Term>,
    allowed: &'static [TermKind],
}

impl Section {
    fn new(allowed: &'static [TermKind]) -> Self {
        Self {
            term: None,
            allowed,
        }
    }

    fn is_complete(&self) -> bool {
        self.term.is_some()
    }

    /// Try to fill this slot from the start of `text`.
    ///
    /// Returns `Ok(Some(remainder))` on a match, `Ok(None)` when the
    /// fragment is exhausted (resume with the next fragment), and an
    /// `UnrecognizedTerm` error when non-empty text matches nothing.
    fn fill<'a>(&mut self, text: &'a str) -> Result<Option<&'a str>> {
        match classify(text, self.allowed) {
            Classified::Matched {
                kind,
                token,
                remainder,
            } => {
                let canonical = normalize(kind, token);
                tracing::debug!(kind = %kind, token, "section filled");
                self.term = Some(Term::new(kind, token, canonical));
                Ok(Some(remainder))
            }
            Classified::NoMatch => {
                let trimmed = text.trim();
                if trimmed.is_empty() {
                    Ok(None)
                } else {
                    Err(TrigError::unrecognized_term(self.allowed, trimmed))
                }
            }
        }
    }

    fn canonical(&self) -> &str {
        self.term.as_ref().map(|t| t.canonical.as_str()).unwrap_or("")
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum State {
    Subject,
    Predicate,
    Object,
    Boundary,
    Done,
}

/// Builds one statement across as many `feed` calls as needed.
#[derive(Clone, Debug)]
pub struct StatementBuilder {
    state: State,
    subject: Section,
    pairs: Vec<(Section, Section)>,
}

impl StatementBuilder {
    /// Create a builder waiting for a subject.
    pub fn new() -> Self {
        Self {
            state: State::Subject,
            subject: Section::new(SUBJECT_KINDS),
            pairs: vec![(Section::new(PREDICATE_KINDS), Section::new(OBJECT_KINDS))],
        }
    }

    /// Whether the statement has been closed and is now immutable.
    pub fn is_complete(&self) -> bool {
        self.state == State::Done
    }

    /// Feed a line fragment, returning the unconsumed remainder.
    ///
    /// An empty remainder with `is_complete() == false` means the fragment
    /// ran out mid-statement; re-enter with the next fragment. A remainder
    /// starting with `}` means the statement was closed by the enclosing
    /// graph's delimiter, handed back unconsumed.
    pub fn feed<'a>(&mut self, text: &'a str) -> Result<&'a str> {
        let mut rest = text;
        while !self.is_complete() {
            if rest.trim().is_empty() {
                return Ok("");
            }
            let last = self.pairs.len() - 1;
            rest = match self.state {
                State::Subject => match self.subject.fill(rest)? {
                    Some(remainder) => {
                        self.state = State::Predicate;
                        remainder
                    }
                    None => return Ok(""),
                },
                State::Predicate => match self.pairs[last].0.fill(rest)? {
                    Some(remainder) => {
                        self.state = State::Object;
                        remainder
                    }
                    None => return Ok(""),
                },
                State::Object => match self.pairs[last].1.fill(rest)? {
                    Some(remainder) => {
                        self.state = State::Boundary;
                        remainder
                    }
                    None => return Ok(""),
                },
                State::Boundary => self.close_pair_or_statement(rest)?,
                State::Done => rest,
            };
        }
        Ok(rest)
    }

    /// Handle the single punctuation character at a boundary position.
    ///
    /// `.` closes the statement, `;` opens a new pair sharing the subject,
    /// `}` closes the statement and is handed back unconsumed so the owning
    /// graph can recognize its own delimiter. Anything else is a grammar
    /// violation: tokenization has drifted and the statement cannot recover.
    fn close_pair_or_statement<'a>(&mut self, text: &'a str) -> Result<&'a str> {
        let trimmed = text.trim_start();
        let mut chars = trimmed.chars();
        match chars.next() {
            Some('.') => {
                self.state = State::Done;
                tracing::debug!(pairs = self.pairs.len(), "statement completed");
                Ok(chars.as_str())
            }
            Some(';') => {
                self.pairs
                    .push((Section::new(PREDICATE_KINDS), Section::new(OBJECT_KINDS)));
                self.state = State::Predicate;
                Ok(chars.as_str())
            }
            Some('}') => {
                self.state = State::Done;
                tracing::debug!(pairs = self.pairs.len(), "statement closed by graph delimiter");
                Ok(trimmed)
            }
            _ => Err(TrigError::malformed_boundary(trimmed)),
        }
    }

    /// Flatten into one record per predicate/object pair, each carrying the
    /// shared subject.
    pub fn flatten(&self) -> Vec<Record> {
        self.pairs
            .iter()
            .map(|(predicate, object)| {
                Record::new(
                    self.subject.canonical(),
                    predicate.canonical(),
                    object.canonical(),
                )
            })
            .collect()
    }
}

impl Default for StatementBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_statement() {
        let mut stmt = StatementBuilder::new();
        let rest = stmt.feed("<s> <p> \"o\" . trailing").unwrap();
        assert!(stmt.is_complete());
        assert_eq!(rest, " trailing");

        let records = stmt.flatten();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].subject, "<s>");
        assert_eq!(records[0].predicate, "<p>");
        assert_eq!(
            records[0].object,
            "\"o\"^^<http://www.w3.org/2001/XMLSchema#string>"
        );
    }

    #[test]
    fn test_flattened_records_have_three_fields() {
        let mut stmt = StatementBuilder::new();
        stmt.feed("<s> <p> 42 .").unwrap();
        for record in stmt.flatten() {
            assert_eq!(record.to_tsv().split('\t').count(), 3);
        }
    }

    #[test]
    fn test_multi_pair_statement_shares_subject() {
        let mut stmt = StatementBuilder::new();
        stmt.feed("<s> <p1> <o1> ; <p2> <o2> .").unwrap();
        assert!(stmt.is_complete());

        let records = stmt.flatten();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].subject, "<s>");
        assert_eq!(records[1].subject, "<s>");
        assert_eq!(records[0].predicate, "<p1>");
        assert_eq!(records[1].predicate, "<p2>");
    }

    #[test]
    fn test_resumes_across_fragments() {
        let mut stmt = StatementBuilder::new();
        assert_eq!(stmt.feed("<s>").unwrap(), "");
        assert!(!stmt.is_complete());
        assert_eq!(stmt.feed("  <p>").unwrap(), "");
        assert_eq!(stmt.feed("\"value\"").unwrap(), "");
        assert!(!stmt.is_complete());
        stmt.feed(" .").unwrap();
        assert!(stmt.is_complete());
        assert_eq!(stmt.flatten().len(), 1);
    }

    #[test]
    fn test_graph_delimiter_handed_back_unconsumed() {
        let mut stmt = StatementBuilder::new();
        let rest = stmt.feed("<s> <p> <o> } after").unwrap();
        assert!(stmt.is_complete());
        assert_eq!(rest, "} after");
    }

    #[test]
    fn test_anonymous_subject_and_object() {
        let mut stmt = StatementBuilder::new();
        stmt.feed("_:a <p> _:b .").unwrap();
        let records = stmt.flatten();
        assert_eq!(records[0].subject, "_:a");
        assert_eq!(records[0].object, "_:b");
    }

    #[test]
    fn test_predicate_rejects_anonymous_node() {
        let mut stmt = StatementBuilder::new();
        let err = stmt.feed("<s> _:p <o> .").unwrap_err();
        assert!(matches!(err, TrigError::UnrecognizedTerm { .. }));
    }

    #[test]
    fn test_bare_a_keyword_is_not_a_predicate() {
        let mut stmt = StatementBuilder::new();
        let err = stmt.feed("<s> a <o> .").unwrap_err();
        assert!(matches!(err, TrigError::UnrecognizedTerm { .. }));
    }

    #[test]
    fn test_malformed_boundary() {
        let mut stmt = StatementBuilder::new();
        let err = stmt.feed("<s> <p> <o> <oops> .").unwrap_err();
        assert!(matches!(err, TrigError::MalformedBoundary { .. }));
    }

    #[test]
    fn test_unrecognized_subject() {
        let mut stmt = StatementBuilder::new();
        let err = stmt.feed("??? <p> <o> .").unwrap_err();
        assert!(matches!(err, TrigError::UnrecognizedTerm { .. }));
    }
}
