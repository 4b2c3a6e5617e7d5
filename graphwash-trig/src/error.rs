//! Error types for statement and graph assembly

use graphwash_ir::TermKind;

/// How much offending text an error message carries.
const CONTEXT_CHARS: usize = 40;

/// Error type for the cleaning core.
#[derive(Debug, thiserror::Error)]
pub enum TrigError {
    /// No candidate term kind matched at a required position.
    #[error("no {expected} matches the text starting at: {text}")]
    UnrecognizedTerm {
        /// Candidate kinds that were tried, joined for display
        expected: String,
        /// Prefix of the text that failed to classify
        text: String,
    },

    /// Unexpected content where closing punctuation was required.
    #[error("expected '.', ';' or '}}' after an object, found: {found}")]
    MalformedBoundary {
        /// Prefix of the text found at the boundary position
        found: String,
    },
}

/// Result type for the cleaning core.
pub type Result<T> = std::result::Result<T, TrigError>;

impl TrigError {
    /// Create an unrecognized-term error for a position's candidate kinds.
    pub fn unrecognized_term(candidates: &[TermKind], text: &str) -> Self {
        let expected = match candidates {
            [only] => only.label().to_string(),
            [head @ .., last] => {
                let head = head
                    .iter()
                    .map(|k| k.label())
                    .collect::<Vec<_>>()
                    .join(", ");
                format!("{head} or {}", last.label())
            }
            [] => "term".to_string(),
        };
        Self::UnrecognizedTerm {
            expected,
            text: truncate(text),
        }
    }

    /// Create a malformed-boundary error.
    pub fn malformed_boundary(found: &str) -> Self {
        Self::MalformedBoundary {
            found: truncate(found),
        }
    }
}

fn truncate(text: &str) -> String {
    text.chars().take(CONTEXT_CHARS).collect()
}
