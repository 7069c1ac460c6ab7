//! First-occurrence deduplication of import rows.

use std::collections::BTreeSet;

/// Keeps the first row for each key, preserving input order.
pub fn dedupe_by_key<T, K, F>(rows: Vec<T>, mut key: F) -> Vec<T>
where
    K: Ord,
    F: FnMut(&T) -> K,
{
    let mut seen = BTreeSet::new();
    let mut kept = Vec::with_capacity(rows.len());
    for row in rows {
        if seen.insert(key(&row)) {
            kept.push(row);
        }
    }
    kept
}

/// Drops exact duplicate rows, keeping first occurrences in order.
pub fn dedupe_rows<T: Ord + Clone>(rows: Vec<T>) -> Vec<T> {
    dedupe_by_key(rows, Clone::clone)
}
