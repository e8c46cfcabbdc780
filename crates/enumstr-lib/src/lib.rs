//! enumstr: value-to-name lookup tables for integer enumerations.
//!
//! This crate provides the table-building pipeline:
//! - `analyze` - validation, display names, normalization and run partitioning
//! - `plan` - encoding selection (single range, split ranges, or map)
//! - `table` - string blobs, offset indexes and map tables
//! - `engine` - in-process lookup with the generated function's semantics
//! - `emit` - Rust code emission
//! - `dump` - human-readable plan dump
//! - `generator` - whole-file generation for several types

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod analyze;
pub mod dump;
pub mod emit;
pub mod engine;
pub mod generator;
pub mod plan;
pub mod table;

#[cfg(test)]
pub mod test_utils;

pub use analyze::{NameOptions, analyze};
pub use emit::{RustEmitConfig, Visibility, emit_rust};
pub use enumstr_core::{ConstantEntry, EnumDecl, IntRepr};
pub use generator::Generator;
pub use plan::{EncodingCost, EncodingKind, EncodingPlan, SelectionPolicy};
pub use table::{NameTable, RangeTable, StringTable, TableSet};

/// Errors reported while building lookup tables.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A declared type has nothing to look up.
    #[error("type `{type_name}` has no constants")]
    NoConstants { type_name: String },

    /// A constant's value does not fit the type's representation.
    #[error("constant `{constant}` of type `{type_name}` has value {value}, outside the range of {repr}")]
    ValueOutOfRange {
        type_name: String,
        constant: String,
        value: i128,
        repr: IntRepr,
    },

    /// A display name is empty after prefix trimming or labeling.
    #[error("constant of type `{type_name}` with value {value} has an empty name")]
    EmptyName { type_name: String, value: i128 },

    /// A type name cannot be spliced into generated code.
    #[error("type name `{0}` is not a Rust identifier")]
    InvalidTypeName(String),

    /// A configured lookup function name cannot be emitted.
    #[error("function name `{name}` for type `{type_name}` is not a Rust identifier")]
    InvalidFnName { type_name: String, name: String },

    /// Two generated items would share a name in one file.
    #[error("`{ident}` is generated for both `{first}` and `{second}`")]
    DuplicateIdentifier {
        ident: String,
        first: String,
        second: String,
    },

    /// A requested type is not declared in the input.
    #[error("type `{0}` is not declared in the input")]
    UnknownType(String),

    /// The input declares no types at all.
    #[error("no types to generate")]
    NoTypes,
}

/// Result type for table building.
pub type Result<T> = std::result::Result<T, Error>;
