//! Per-type analysis: from declared constants to built lookup tables.
//!
//! Steps, in order:
//! 1. reject empty declarations and out-of-range values
//! 2. resolve display names (labels, prefix trimming)
//! 3. normalize (dedup by value, sort) and partition into runs
//! 4. select an encoding and build its tables

use enumstr_core::utils::is_rust_identifier;
use enumstr_core::{ConstantEntry, EnumDecl, normalize, partition};

use crate::plan::{EncodingCost, SelectionPolicy, select};
use crate::table::{NameTable, TableSet};
use crate::{Error, Result};

/// How constant names become display names.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NameOptions {
    /// Prefix removed from names that start with it.
    pub trim_prefix: Option<String>,
    /// Use a constant's label, when present, instead of its name.
    pub use_labels: bool,
}

impl NameOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn trim_prefix(mut self, prefix: impl Into<String>) -> Self {
        let prefix = prefix.into();
        self.trim_prefix = (!prefix.is_empty()).then_some(prefix);
        self
    }

    pub fn use_labels(mut self, value: bool) -> Self {
        self.use_labels = value;
        self
    }

    /// Display text for one constant.
    pub fn display_name<'e>(&self, entry: &'e ConstantEntry) -> &'e str {
        if self.use_labels
            && let Some(label) = &entry.label
        {
            return label;
        }
        match &self.trim_prefix {
            Some(prefix) => entry.name.strip_prefix(prefix.as_str()).unwrap_or(&entry.name),
            None => &entry.name,
        }
    }
}

/// Build the lookup tables for one declared type.
pub fn analyze(
    decl: &EnumDecl,
    names: &NameOptions,
    policy: &SelectionPolicy,
) -> Result<NameTable> {
    if !is_rust_identifier(&decl.name) {
        return Err(Error::InvalidTypeName(decl.name.clone()));
    }
    if decl.entries.is_empty() {
        return Err(Error::NoConstants {
            type_name: decl.name.clone(),
        });
    }

    let mut display = Vec::with_capacity(decl.entries.len());
    for entry in &decl.entries {
        if !decl.repr.contains(entry.value) {
            return Err(Error::ValueOutOfRange {
                type_name: decl.name.clone(),
                constant: entry.name.clone(),
                value: entry.value,
                repr: decl.repr,
            });
        }
        let name = names.display_name(entry);
        if name.is_empty() {
            return Err(Error::EmptyName {
                type_name: decl.name.clone(),
                value: entry.value,
            });
        }
        display.push(ConstantEntry {
            name: name.to_string(),
            ..entry.clone()
        });
    }

    let unique = normalize(&display);
    trace_dropped_aliases(decl, &display, &unique);

    let runs = partition(&unique);
    let cost = EncodingCost::of(&runs);
    let plan = select(runs, policy);

    tracing::debug!(
        type_name = %decl.name,
        repr = %decl.repr,
        declared = decl.entries.len(),
        unique = unique.len(),
        runs = cost.runs,
        split_cost = cost.split(),
        map_cost = cost.map(),
        encoding = plan.kind().as_str(),
        "selected encoding"
    );

    Ok(NameTable {
        type_name: decl.name.clone(),
        repr: decl.repr,
        tables: TableSet::from_plan(&plan),
        cost,
        declared: decl.entries.len(),
    })
}

fn trace_dropped_aliases(decl: &EnumDecl, display: &[ConstantEntry], unique: &[ConstantEntry]) {
    if display.len() == unique.len() {
        return;
    }
    for entry in display {
        let Ok(pos) = unique.binary_search_by_key(&entry.value, |e| e.value) else {
            continue;
        };
        let kept = &unique[pos];
        if kept.order != entry.order {
            tracing::trace!(
                type_name = %decl.name,
                alias = %entry.name,
                kept = %kept.name,
                value = %entry.value,
                "dropped duplicate-valued constant"
            );
        }
    }
}
