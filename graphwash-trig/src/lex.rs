//! Term classifier implemented with winnow.
//!
//! Each term kind has a fixed lexical pattern anchored at the start of the
//! (leading-trimmed) fragment. [`classify`] tries the caller's candidate
//! kinds in order and the first match wins, so candidate order encodes the
//! grammar's disambiguation policy: at an object position a reference is
//! tried before an anonymous node before a literal, because the literal
//! patterns are permissive enough to shadow the more specific forms.
//!
//! Patterns match within a single line fragment only. A literal value that
//! itself spans physical lines cannot be tokenized; it fails classification
//! and is handled by the graph builder's reported-skip recovery.

use graphwash_ir::TermKind;
use winnow::ascii::{digit0, digit1};
use winnow::combinator::{alt, opt};
use winnow::error::{ContextError, ErrMode};
use winnow::token::{one_of, take_till, take_until, take_while};
use winnow::{ModalResult, Parser};

/// Outcome of one classification attempt.
///
/// A candidate not matching is expected control flow, never an error; the
/// caller decides whether `NoMatch` on non-empty text is fatal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Classified<'a> {
    /// The first candidate kind whose pattern matched a prefix of the text.
    Matched {
        /// Which candidate matched
        kind: TermKind,
        /// Exact matched span
        token: &'a str,
        /// Everything after the matched span
        remainder: &'a str,
    },
    /// No candidate kind matched.
    NoMatch,
}

/// Classify the start of `text` against `candidates`, in order.
///
/// `text` gets a single leading-whitespace trim before matching. The first
/// kind whose pattern matches wins.
pub fn classify<'a>(text: &'a str, candidates: &[TermKind]) -> Classified<'a> {
    let trimmed = text.trim_start();
    if trimmed.is_empty() {
        return Classified::NoMatch;
    }

    for &kind in candidates {
        let mut input = trimmed;
        let matched = match kind {
            TermKind::Reference => reference(&mut input),
            TermKind::AnonymousNode => anonymous_node(&mut input),
            TermKind::Literal => literal(&mut input),
        };
        if let Ok(token) = matched {
            return Classified::Matched {
                kind,
                token,
                remainder: input,
            };
        }
    }

    Classified::NoMatch
}

/// Reference: `<` then any characters up to and including the next `>`.
fn reference<'a>(input: &mut &'a str) -> ModalResult<&'a str> {
    ('<', take_till(0.., |c| c == '>'), '>')
        .take()
        .parse_next(input)
}

/// Anonymous node: `_:` followed by word characters.
fn anonymous_node<'a>(input: &mut &'a str) -> ModalResult<&'a str> {
    ("_:", take_while(0.., |c: char| c.is_alphanumeric() || c == '_'))
        .take()
        .parse_next(input)
}

/// Literal: quoted run with optional suffix, bare number, or bare boolean.
fn literal<'a>(input: &mut &'a str) -> ModalResult<&'a str> {
    alt((quoted_literal, number, boolean)).parse_next(input)
}

/// Quoted run with optional `^^<reference>` datatype or `@tag` language
/// suffix. Long delimiters are tried before short ones so `'''` is never
/// read as an empty `'`-quoted value.
fn quoted_literal<'a>(input: &mut &'a str) -> ModalResult<&'a str> {
    (
        alt((
            quoted_run("'''"),
            quoted_run("\"\"\""),
            quoted_run("'"),
            quoted_run("\""),
        )),
        opt(datatype_suffix),
        opt(language_tag),
    )
        .take()
        .parse_next(input)
}

/// A run delimited by `delim` on both ends, content up to the next
/// occurrence of `delim` on the same fragment.
fn quoted_run<'a>(delim: &'static str) -> impl Parser<&'a str, &'a str, ErrMode<ContextError>> {
    (delim, take_until(0.., delim), delim).take()
}

/// Datatype suffix: `^^` followed by a reference.
fn datatype_suffix<'a>(input: &mut &'a str) -> ModalResult<&'a str> {
    ("^^", reference).take().parse_next(input)
}

/// Language tag: `@` followed by letters, digits, or hyphens.
fn language_tag<'a>(input: &mut &'a str) -> ModalResult<&'a str> {
    ('@', take_while(0.., |c: char| c.is_ascii_alphanumeric() || c == '-'))
        .take()
        .parse_next(input)
}

/// Bare signed decimal/exponential number.
fn number<'a>(input: &mut &'a str) -> ModalResult<&'a str> {
    (
        opt(one_of(['+', '-'])),
        alt(((digit0, '.', digit1).take(), digit1)),
        opt((one_of(['e', 'E']), opt(one_of(['+', '-'])), digit1)),
    )
        .take()
        .parse_next(input)
}

/// Bare boolean keyword.
fn boolean<'a>(input: &mut &'a str) -> ModalResult<&'a str> {
    alt(("true", "false")).parse_next(input)
}
