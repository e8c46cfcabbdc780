//! In-process lookup over built tables.
//!
//! Mirrors the generated Rust function exactly: range tables are indexed by
//! `value - min`, split ranges are found by binary search over their
//! disjoint bounds, and the map is searched by key. Anything else yields
//! the fallback text `Type(value)`.


use std::borrow::Cow;
use std::cmp::Ordering;

use crate::table::{NameTable, RangeTable, TableSet};

impl NameTable {
    /// Name for `value`, if one was declared.
    pub fn lookup(&self, value: i128) -> Option<&str> {
        if !self.repr.contains(value) {
            return None;
        }
        match &self.tables {
            TableSet::Single(range) => lookup_single(range, value),
            TableSet::Split(ranges) => lookup_split(ranges, value),
            TableSet::Map(map) => map.get(value),
        }
    }

    /// Name for `value`, or the fallback text. Borrowed on a hit.
    pub fn stringify(&self, value: i128) -> Cow<'_, str> {
        match self.lookup(value) {
            Some(name) => Cow::Borrowed(name),
            None => Cow::Owned(self.fallback(value)),
        }
    }

    /// Diagnostic text for a value without a name.
    pub fn fallback(&self, value: i128) -> String {
        format!("{}({})", self.type_name, value)
    }
}

fn lookup_single(range: &RangeTable, value: i128) -> Option<&str> {
    let idx = value - range.min();
    if idx < 0 || idx >= range.len() as i128 {
        return None;
    }
    range.names().get(idx as usize)
}

fn lookup_split(ranges: &[RangeTable], value: i128) -> Option<&str> {
    let pos = ranges
        .binary_search_by(|range| {
            if range.max() < value {
                Ordering::Less
            } else if range.min() > value {
                Ordering::Greater
            } else {
                Ordering::Equal
            }
        })
        .ok()?;
    ranges[pos].get(value)
}
