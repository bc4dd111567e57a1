//! Literal content filter applied before rendering.
//!
//! The check is a plain substring match against the raw source text. It does
//! not parse the champion, so a pattern inside a comment still excludes it.

use tracing::debug;

use crate::collect::Champions;

/// Builds an exclusion pattern that matches `line` as a whole line body,
/// newline terminator included.
#[must_use]
pub fn line_pattern(line: &str) -> String {
    format!("{line}\n")
}

impl Champions {
    /// Removes every champion whose source contains `pattern`.
    ///
    /// Returns the removed names in ascending order. An empty pattern matches
    /// every champion.
    pub fn exclude_containing(&mut self, pattern: &str) -> Vec<String> {
        let mut excluded = Vec::new();
        self.0.retain(|name, content| {
            if content.contains(pattern) {
                debug!(champion = %name, "excluding champion matching pattern");
                excluded.push(name.clone());
                false
            } else {
                true
            }
        });
        excluded
    }
}
