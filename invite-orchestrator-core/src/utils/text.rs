//! Multi-line text input helpers.

use std::collections::HashSet;

/// Splits multi-line input into lines, dropping later duplicates.
///
/// First-occurrence order is preserved. Lines are kept as entered:
/// no trimming, no empty-line filtering. The same list must be sent
/// to the backend and written into the local snapshot, so the split
/// happens exactly once, here.
#[must_use]
pub fn dedup_lines(input: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    input
        .split('\n')
        .filter(|line| seen.insert(*line))
        .map(ToString::to_string)
        .collect()
}
