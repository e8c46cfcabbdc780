//! Invariant checks excluded from coverage reports.

#![cfg_attr(coverage_nightly, coverage(off))]

use crate::{ConstantEntry, Run};

impl<'a> Run<'a> {
    pub(crate) fn ensure_first(&self) -> &'a ConstantEntry {
        self.members()
            .first()
            .unwrap_or_else(|| panic!("Run: empty run (partition must never produce one)"))
    }

    pub(crate) fn ensure_last(&self) -> &'a ConstantEntry {
        self.members()
            .last()
            .unwrap_or_else(|| panic!("Run: empty run (partition must never produce one)"))
    }
}

pub(crate) fn assert_strictly_ascending(entries: &[ConstantEntry]) {
    for pair in entries.windows(2) {
        assert!(
            pair[0].value < pair[1].value,
            "partition: entries not normalized ({} `{}` before {} `{}`)",
            pair[0].value,
            pair[0].name,
            pair[1].value,
            pair[1].name,
        );
    }
}
