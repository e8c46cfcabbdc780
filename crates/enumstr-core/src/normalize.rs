//! Entry normalization: deduplicate by value, sort ascending.

use crate::ConstantEntry;

/// Deduplicate entries by value and sort them ascending by value.
///
/// Among entries sharing a value, the one with the smallest declaration
/// order is kept; later aliases are dropped. Values are `i128`, so unsigned
/// types sort by their unsigned magnitude.
pub fn normalize(entries: &[ConstantEntry]) -> Vec<ConstantEntry> {
    let mut sorted: Vec<&ConstantEntry> = entries.iter().collect();
    sorted.sort_by_key(|e| (e.value, e.order));
    // Keeps the first of each equal-value group, which has the lowest order.
    sorted.dedup_by_key(|e| e.value);
    sorted.into_iter().cloned().collect()
}
