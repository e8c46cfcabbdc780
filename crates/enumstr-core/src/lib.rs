#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core data structures for enumstr.
//!
//! Two layers:
//! - **Deserialization layer**: 1:1 mapping to the constant-extraction JSON
//! - **Analysis layer**: typed declarations, normalized entries and runs
//!
//! The analysis layer is what the table builder in `enumstr-lib` consumes:
//! [`normalize`] turns raw entries into sorted unique entries, and
//! [`partition`] splits those into maximal runs of consecutive values.

use std::fmt;

pub mod colors;
mod invariants;
mod normalize;
mod runs;
pub mod utils;


pub use colors::Colors;
pub use normalize::normalize;
pub use runs::{Run, partition};

// ============================================================================
// Deserialization Layer
// ============================================================================

/// Raw package as produced by the constant extractor.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct RawPackage {
    pub types: Vec<RawTypeDecl>,
}

/// Raw declared type: display name, representation and constants in
/// declaration order.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct RawTypeDecl {
    pub name: String,
    pub repr: IntRepr,
    #[serde(default)]
    pub constants: Vec<RawConstant>,
}

/// Raw constant definition.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct RawConstant {
    pub name: String,
    pub value: RawValue,
    /// Alternate display text, used instead of `name` when labels are enabled.
    #[serde(default)]
    pub label: Option<String>,
}

/// Integer literal as it appears in JSON.
///
/// JSON integers above `i64::MAX` only fit in `u64`, so both are accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    Signed(i64),
    Unsigned(u64),
}

impl RawValue {
    pub fn as_i128(self) -> i128 {
        match self {
            RawValue::Signed(v) => i128::from(v),
            RawValue::Unsigned(v) => i128::from(v),
        }
    }
}

/// Parse extractor JSON into a raw package.
pub fn parse_package(json: &str) -> Result<RawPackage, serde_json::Error> {
    serde_json::from_str(json)
}

// ============================================================================
// Common Types
// ============================================================================

/// Fixed-width integer representation underlying a declared type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IntRepr {
    I8,
    I16,
    I32,
    I64,
    U8,
    U16,
    U32,
    U64,
}

impl IntRepr {
    /// The Rust primitive type name.
    pub fn as_str(self) -> &'static str {
        match self {
            IntRepr::I8 => "i8",
            IntRepr::I16 => "i16",
            IntRepr::I32 => "i32",
            IntRepr::I64 => "i64",
            IntRepr::U8 => "u8",
            IntRepr::U16 => "u16",
            IntRepr::U32 => "u32",
            IntRepr::U64 => "u64",
        }
    }

    pub fn is_signed(self) -> bool {
        matches!(self, IntRepr::I8 | IntRepr::I16 | IntRepr::I32 | IntRepr::I64)
    }

    pub fn bits(self) -> u32 {
        match self {
            IntRepr::I8 | IntRepr::U8 => 8,
            IntRepr::I16 | IntRepr::U16 => 16,
            IntRepr::I32 | IntRepr::U32 => 32,
            IntRepr::I64 | IntRepr::U64 => 64,
        }
    }

    /// Unsigned type of the same width.
    pub fn to_unsigned(self) -> Self {
        match self {
            IntRepr::I8 | IntRepr::U8 => IntRepr::U8,
            IntRepr::I16 | IntRepr::U16 => IntRepr::U16,
            IntRepr::I32 | IntRepr::U32 => IntRepr::U32,
            IntRepr::I64 | IntRepr::U64 => IntRepr::U64,
        }
    }

    pub fn min_value(self) -> i128 {
        if self.is_signed() {
            -(1i128 << (self.bits() - 1))
        } else {
            0
        }
    }

    pub fn max_value(self) -> i128 {
        if self.is_signed() {
            (1i128 << (self.bits() - 1)) - 1
        } else {
            (1i128 << self.bits()) - 1
        }
    }

    /// Whether `value` is representable in this type.
    pub fn contains(self, value: i128) -> bool {
        (self.min_value()..=self.max_value()).contains(&value)
    }
}

impl fmt::Display for IntRepr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One named constant of a declared type.
///
/// Values are widened to `i128`, which holds every `i64` and `u64` value,
/// so ordering on `value` matches the native ordering of the declared type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstantEntry {
    pub name: String,
    pub value: i128,
    /// Position in the declaration list. Lower wins among same-value aliases.
    pub order: usize,
    /// Alternate display text.
    pub label: Option<String>,
}

impl ConstantEntry {
    pub fn new(name: impl Into<String>, value: i128, order: usize) -> Self {
        Self {
            name: name.into(),
            value,
            order,
            label: None,
        }
    }
}

/// A declared integer type together with its named constants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumDecl {
    pub name: String,
    pub repr: IntRepr,
    pub entries: Vec<ConstantEntry>,
}

impl EnumDecl {
    pub fn new(name: impl Into<String>, repr: IntRepr) -> Self {
        Self {
            name: name.into(),
            repr,
            entries: Vec::new(),
        }
    }

    /// Append a constant; its declaration order is its position.
    pub fn constant(mut self, name: impl Into<String>, value: impl Into<i128>) -> Self {
        let order = self.entries.len();
        self.entries.push(ConstantEntry::new(name, value.into(), order));
        self
    }

    /// Append a constant with alternate display text.
    pub fn labeled(
        mut self,
        name: impl Into<String>,
        value: impl Into<i128>,
        label: impl Into<String>,
    ) -> Self {
        let order = self.entries.len();
        let mut entry = ConstantEntry::new(name, value.into(), order);
        entry.label = Some(label.into());
        self.entries.push(entry);
        self
    }
}

impl From<RawTypeDecl> for EnumDecl {
    fn from(raw: RawTypeDecl) -> Self {
        let entries = raw
            .constants
            .into_iter()
            .enumerate()
            .map(|(order, c)| ConstantEntry {
                name: c.name,
                value: c.value.as_i128(),
                order,
                label: c.label,
            })
            .collect();
        Self {
            name: raw.name,
            repr: raw.repr,
            entries,
        }
    }
}
