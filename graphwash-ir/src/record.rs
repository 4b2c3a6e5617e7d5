//! Flattened statement records
//!
//! A record is the fixed-arity output unit of the cleaning pass: exactly
//! three canonical term strings, rendered tab-separated.

use serde::{Deserialize, Serialize};

/// One flattened statement row.
///
/// A multi-pair statement (`<s> <p1> <o1> ; <p2> <o2> .`) flattens to one
/// record per predicate/object pair, each carrying the shared subject.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Canonical subject term
    pub subject: String,
    /// Canonical predicate term
    pub predicate: String,
    /// Canonical object term
    pub object: String,
}

impl Record {
    /// Create a record from three canonical term strings.
    pub fn new(
        subject: impl Into<String>,
        predicate: impl Into<String>,
        object: impl Into<String>,
    ) -> Self {
        Self {
            subject: subject.into(),
            predicate: predicate.into(),
            object: object.into(),
        }
    }

    /// Tab-separated rendition: exactly three fields.
    pub fn to_tsv(&self) -> String {
        format!("{}\t{}\t{}", self.subject, self.predicate, self.object)
    }
}

impl std::fmt::Display for Record {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}\t{}\t{}", self.subject, self.predicate, self.object)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tsv_has_three_fields() {
        let r = Record::new("<s>", "<p>", "\"o\"");
        let tsv = r.to_tsv();
        assert_eq!(tsv.split('\t').count(), 3);
        assert_eq!(tsv, "<s>\t<p>\t\"o\"");
    }

    #[test]
    fn test_display_matches_tsv() {
        let r = Record::new("<s>", "<p>", "<o>");
        assert_eq!(format!("{}", r), r.to_tsv());
    }
}
