//! Line filtering ahead of the cleaning core.
//!
//! Two policies run before any line reaches the parser: an exclusion list
//! of substrings whose presence drops the line entirely, and a set of
//! prefix characters whose lines are copied to the output verbatim.

use std::path::Path;

use crate::error::{CliError, CliResult};

/// Pass-through prefixes used when none are configured: directives and
/// comments.
pub const DEFAULT_IGNORE_PREFIXES: &[char] = &['@', '#'];

/// What to do with one input line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineDisposition {
    /// Feed the line to the cleaning core.
    Process,
    /// Copy the line to the output verbatim; do not parse it.
    PassThrough,
    /// Drop the line entirely.
    Drop,
}

/// Decides which input lines reach the cleaning core.
pub struct LineFilter {
    exclude: Vec<String>,
    ignore_prefixes: Vec<char>,
}

impl LineFilter {
    /// Build from CLI flags, loading `exclude_file` if given. An empty
    /// prefix list falls back to the defaults.
    pub fn from_cli(
        mut exclude: Vec<String>,
        exclude_file: Option<&Path>,
        ignore_prefixes: Vec<char>,
    ) -> CliResult<Self> {
        if let Some(path) = exclude_file {
            let content = std::fs::read_to_string(path).map_err(|e| {
                CliError::Input(format!("cannot read exclude file {}: {e}", path.display()))
            })?;
            for line in content.lines() {
                let line = line.trim();
                if line.is_empty() || line.starts_with('#') {
                    continue;
                }
                exclude.push(line.to_string());
            }
        }

        let ignore_prefixes = if ignore_prefixes.is_empty() {
            DEFAULT_IGNORE_PREFIXES.to_vec()
        } else {
            ignore_prefixes
        };

        Ok(Self {
            exclude,
            ignore_prefixes,
        })
    }

    /// Classify one raw input line.
    pub fn dispose(&self, line: &str) -> LineDisposition {
        if self.exclude.iter().any(|s| line.contains(s.as_str())) {
            LineDisposition::Drop
        } else if line.starts_with(self.ignore_prefixes.as_slice()) {
            LineDisposition::PassThrough
        } else {
            LineDisposition::Process
        }
    }
}
