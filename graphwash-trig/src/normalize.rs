//! Term normalization rules.
//!
//! Pure functions from raw matched token to canonical form. There is no
//! failure mode: a token whose internal structure is not recognized passes
//! through unchanged.

use chrono::NaiveDate;
use graphwash_ir::{vocab, TermKind};

/// Month-name date layout accepted for canonicalization.
const HUMAN_DATE_FORMAT: &str = "%B %d, %Y";

/// Rewrite a raw matched token into its canonical form.
pub fn normalize(kind: TermKind, raw: &str) -> String {
    match kind {
        TermKind::Reference => normalize_reference(raw),
        TermKind::AnonymousNode => raw.to_string(),
        TermKind::Literal => normalize_literal(raw),
    }
}

/// Bytes never allowed inside a reference: all control bytes through space,
/// plus the delimiter/reserved set.
fn is_banned_reference_char(c: char) -> bool {
    c <= '\u{20}' || matches!(c, '<' | '>' | '"' | '{' | '}' | '|' | '^' | '`' | '\\')
}

/// Strip delimiters, drop banned bytes, collapse the duplicated scheme
/// prefix, and re-wrap.
///
/// The `http://http://` collapse is a narrow fixup for a known upstream
/// duplication defect, not a general URL repair.
fn normalize_reference(raw: &str) -> String {
    let Some(interior) = raw.strip_prefix('<').and_then(|s| s.strip_suffix('>')) else {
        return raw.to_string();
    };

    let cleaned: String = interior
        .chars()
        .filter(|&c| !is_banned_reference_char(c))
        .collect();
    let cleaned = cleaned.replace("http://http://", "http://");

    if cleaned != interior {
        tracing::debug!(raw, canonical = %cleaned, "reference cleaned");
    }

    format!("<{cleaned}>")
}

/// Date canonicalization, then default datatype insertion, in that order.
fn normalize_literal(raw: &str) -> String {
    let dated = canonicalize_date(raw);
    insert_default_datatype(dated)
}

/// Rewrite `"<MonthName> <day>, <year>"` values to ISO-8601 midnight,
/// preserving any `^^` suffix verbatim. Non-matching values are left
/// untouched. Only double-quoted values qualify.
fn canonicalize_date(raw: &str) -> String {
    let (value, suffix) = match raw.split_once("^^") {
        Some((value, suffix)) => (value, Some(suffix)),
        None => (raw, None),
    };

    let Some(inner) = value.strip_prefix('"').and_then(|s| s.strip_suffix('"')) else {
        return raw.to_string();
    };
    let Ok(date) = NaiveDate::parse_from_str(inner, HUMAN_DATE_FORMAT) else {
        return raw.to_string();
    };

    let canonical = format!("\"{}T00:00:00\"", date.format("%Y-%m-%d"));
    tracing::debug!(raw = value, canonical = %canonical, "date literal canonicalized");

    match suffix {
        Some(suffix) => format!("{canonical}^^{suffix}"),
        None => canonical,
    }
}

/// A token ending on a closing quote carries neither a datatype nor a
/// language suffix; give it the canonical string datatype.
fn insert_default_datatype(token: String) -> String {
    if token.ends_with('"') || token.ends_with('\'') {
        format!("{token}^^<{}>", vocab::xsd::STRING)
    } else {
        token
    }
}
