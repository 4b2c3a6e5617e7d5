//! Term types: reference, anonymous node, and literal
//!
//! A term is one recognized token of a statement. It carries both the raw
//! matched span and the canonical form produced by normalization; once
//! built, a term is never mutated.

use serde::{Deserialize, Serialize};

/// The kind of a recognized term.
///
/// Kind also determines which normalization rules apply: references get
/// delimiter/byte cleanup, literals get date and datatype fixups, anonymous
/// nodes pass through unchanged.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TermKind {
    /// Delimited absolute identifier: `<http://example.org/x>`
    Reference,
    /// Locally-scoped unnamed node: `_:b0`
    AnonymousNode,
    /// Quoted value (with optional datatype/language suffix), bare number,
    /// or bare boolean keyword.
    Literal,
}

impl TermKind {
    /// Human-readable label used in diagnostics.
    pub fn label(self) -> &'static str {
        match self {
            TermKind::Reference => "reference",
            TermKind::AnonymousNode => "anonymous node",
            TermKind::Literal => "literal",
        }
    }
}

impl std::fmt::Display for TermKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// One recognized term with its raw and canonical lexical forms.
///
/// # Invariants
///
/// - `raw` is the exact span matched by the classifier, delimiters included.
/// - `canonical` is the normalized rendition emitted into records.
/// - A term is created by one classify+normalize cycle and never changes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Term {
    /// Which kind matched
    pub kind: TermKind,
    /// Exact matched span
    pub raw: String,
    /// Normalized form
    pub canonical: String,
}

impl Term {
    /// Create a term from a classified token and its normalized form.
    pub fn new(kind: TermKind, raw: impl Into<String>, canonical: impl Into<String>) -> Self {
        Self {
            kind,
            raw: raw.into(),
            canonical: canonical.into(),
        }
    }

    /// Check if this is a reference term.
    pub fn is_reference(&self) -> bool {
        self.kind == TermKind::Reference
    }

    /// Check if this is an anonymous node.
    pub fn is_anonymous(&self) -> bool {
        self.kind == TermKind::AnonymousNode
    }

    /// Check if this is a literal.
    pub fn is_literal(&self) -> bool {
        self.kind == TermKind::Literal
    }
}

impl std::fmt::Display for Term {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.canonical)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_labels() {
        assert_eq!(TermKind::Reference.label(), "reference");
        assert_eq!(TermKind::AnonymousNode.label(), "anonymous node");
        assert_eq!(TermKind::Literal.label(), "literal");
    }

    #[test]
    fn test_term_predicates() {
        let r = Term::new(TermKind::Reference, "<http://a>", "<http://a>");
        assert!(r.is_reference());
        assert!(!r.is_literal());

        let b = Term::new(TermKind::AnonymousNode, "_:b0", "_:b0");
        assert!(b.is_anonymous());

        let l = Term::new(TermKind::Literal, "\"x\"", "\"x\"");
        assert!(l.is_literal());
    }

    #[test]
    fn test_term_display_is_canonical() {
        let t = Term::new(
            TermKind::Reference,
            "<http://http://example.org>",
            "<http://example.org>",
        );
        assert_eq!(format!("{}", t), "<http://example.org>");
    }
}
