//! Partitioning of normalized entries into maximal runs of consecutive values.

use crate::ConstantEntry;

/// A maximal block of entries whose values are consecutive integers.
///
/// Borrows its members from the normalized entry list. Never empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Run<'a> {
    members: &'a [ConstantEntry],
}

impl<'a> Run<'a> {
    /// Members in ascending value order.
    pub fn members(&self) -> &'a [ConstantEntry] {
        self.members
    }

    pub fn min(&self) -> i128 {
        self.ensure_first().value
    }

    pub fn max(&self) -> i128 {
        self.ensure_last().value
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn contains(&self, value: i128) -> bool {
        (self.min()..=self.max()).contains(&value)
    }
}

/// Split sorted unique entries into maximal runs, in ascending order.
///
/// Panics if `entries` is not strictly ascending by value; callers must
/// pass the output of [`normalize`](crate::normalize).
pub fn partition(entries: &[ConstantEntry]) -> Vec<Run<'_>> {
    crate::invariants::assert_strictly_ascending(entries);

    let mut runs = Vec::new();
    let mut start = 0;
    for end in 1..=entries.len() {
        let closes = end == entries.len() || entries[end].value != entries[end - 1].value + 1;
        if closes {
            runs.push(Run {
                members: &entries[start..end],
            });
            start = end;
        }
    }
    runs
}
