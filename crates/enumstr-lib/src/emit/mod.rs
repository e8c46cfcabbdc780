//! Code emission for built name tables.

pub mod rust;


pub use rust::{RustEmitConfig, Visibility, emit_rust, item_names};
