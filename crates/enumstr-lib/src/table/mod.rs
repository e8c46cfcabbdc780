//! Lookup tables built from an encoding plan.
//!
//! A [`NameTable`] owns everything the emitter and the lookup engine need:
//! one [`RangeTable`] per run for range encodings, or a [`MapTable`] for the
//! map encoding. It no longer borrows the analyzed entries.

mod string_table;


pub use string_table::{StringTable, StringTableBuilder, width_for_len};

use enumstr_core::{IntRepr, Run};

use crate::plan::{EncodingCost, EncodingKind, EncodingPlan};

/// Names of one run, addressed by `value - min`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeTable {
    min: i128,
    max: i128,
    names: StringTable,
}

impl RangeTable {
    pub fn from_run(run: &Run<'_>) -> Self {
        Self {
            min: run.min(),
            max: run.max(),
            names: run.members().iter().map(|e| e.name.as_str()).collect(),
        }
    }

    pub fn min(&self) -> i128 {
        self.min
    }

    pub fn max(&self) -> i128 {
        self.max
    }

    pub fn names(&self) -> &StringTable {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn contains(&self, value: i128) -> bool {
        (self.min..=self.max).contains(&value)
    }

    /// Name for `value`, or `None` outside `[min, max]`.
    pub fn get(&self, value: i128) -> Option<&str> {
        if !self.contains(value) {
            return None;
        }
        self.names.get((value - self.min) as usize)
    }
}

/// Sorted value/name pairs for sparse sets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapTable {
    entries: Vec<(i128, String)>,
}

impl MapTable {
    /// Entries ascending by value.
    pub fn entries(&self) -> &[(i128, String)] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, value: i128) -> Option<&str> {
        self.entries
            .binary_search_by_key(&value, |(v, _)| *v)
            .ok()
            .map(|pos| self.entries[pos].1.as_str())
    }
}

/// The built tables of one encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableSet {
    Single(RangeTable),
    Split(Vec<RangeTable>),
    Map(MapTable),
}

impl TableSet {
    pub fn from_plan(plan: &EncodingPlan<'_>) -> Self {
        match plan {
            EncodingPlan::Single(run) => TableSet::Single(RangeTable::from_run(run)),
            EncodingPlan::Split(runs) => {
                TableSet::Split(runs.iter().map(RangeTable::from_run).collect())
            }
            EncodingPlan::MapTable(map) => {
                let mut entries: Vec<(i128, String)> = map
                    .iter()
                    .map(|(&value, &name)| (value, name.to_string()))
                    .collect();
                entries.sort_by_key(|(value, _)| *value);
                TableSet::Map(MapTable { entries })
            }
        }
    }

    pub fn kind(&self) -> EncodingKind {
        match self {
            TableSet::Single(_) => EncodingKind::Single,
            TableSet::Split(_) => EncodingKind::Split,
            TableSet::Map(_) => EncodingKind::Map,
        }
    }

    /// Range tables in ascending order; empty for the map encoding.
    pub fn ranges(&self) -> &[RangeTable] {
        match self {
            TableSet::Single(table) => std::slice::from_ref(table),
            TableSet::Split(tables) => tables,
            TableSet::Map(_) => &[],
        }
    }
}

/// Lookup tables for one declared type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameTable {
    pub(crate) type_name: String,
    pub(crate) repr: IntRepr,
    pub(crate) tables: TableSet,
    pub(crate) cost: EncodingCost,
    /// Constants before deduplication.
    pub(crate) declared: usize,
}

impl NameTable {
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    pub fn repr(&self) -> IntRepr {
        self.repr
    }

    pub fn tables(&self) -> &TableSet {
        &self.tables
    }

    pub fn kind(&self) -> EncodingKind {
        self.tables.kind()
    }

    pub fn cost(&self) -> &EncodingCost {
        &self.cost
    }

    /// Constants as declared, aliases included.
    pub fn declared(&self) -> usize {
        self.declared
    }

    /// Distinct values with a name.
    pub fn unique(&self) -> usize {
        self.cost.members
    }

    /// Every (value, name) pair, ascending by value.
    pub fn entries(&self) -> Vec<(i128, &str)> {
        match &self.tables {
            TableSet::Map(map) => map
                .entries()
                .iter()
                .map(|(value, name)| (*value, name.as_str()))
                .collect(),
            TableSet::Single(_) | TableSet::Split(_) => self
                .tables
                .ranges()
                .iter()
                .flat_map(|range| {
                    range
                        .names()
                        .iter()
                        .enumerate()
                        .map(move |(k, name)| (range.min() + k as i128, name))
                })
                .collect(),
        }
    }
}
