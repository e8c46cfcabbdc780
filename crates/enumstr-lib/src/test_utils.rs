//! Reference declarations shared by tests.

use enumstr_core::{EnumDecl, IntRepr};

use crate::analyze::{NameOptions, analyze};
use crate::plan::SelectionPolicy;
use crate::table::NameTable;

/// Contiguous, zero-based.
pub fn day() -> EnumDecl {
    EnumDecl::new("Day", IntRepr::I64)
        .constant("Monday", 0)
        .constant("Tuesday", 1)
        .constant("Wednesday", 2)
        .constant("Thursday", 3)
        .constant("Friday", 4)
        .constant("Saturday", 5)
        .constant("Sunday", 6)
}

/// Starts at 1, with a duplicate of `One` declared last.
pub fn number() -> EnumDecl {
    EnumDecl::new("Number", IntRepr::I64)
        .constant("One", 1)
        .constant("Two", 2)
        .constant("Three", 3)
        .constant("AnotherOne", 1)
}

/// Three blocks: `[2,3]`, `[5,9]`, `{11}`.
pub fn gap() -> EnumDecl {
    EnumDecl::new("Gap", IntRepr::I64)
        .constant("Two", 2)
        .constant("Three", 3)
        .constant("Five", 5)
        .constant("Six", 6)
        .constant("Seven", 7)
        .constant("Eight", 8)
        .constant("Nine", 9)
        .constant("Eleven", 11)
}

/// Signed, spanning zero.
pub fn num() -> EnumDecl {
    EnumDecl::new("Num", IntRepr::I64)
        .constant("m_2", -2)
        .constant("m_1", -1)
        .constant("m0", 0)
        .constant("m1", 1)
        .constant("m2", 2)
}

/// Unsigned, one block near the top of `u8` declared before one at zero.
pub fn unum() -> EnumDecl {
    EnumDecl::new("Unum", IntRepr::U8)
        .constant("m_2", 253)
        .constant("m_1", 254)
        .constant("m0", 0)
        .constant("m1", 1)
        .constant("m2", 2)
}

/// Irregular spacing, with `p77` duplicating `p7`.
pub fn prime() -> EnumDecl {
    EnumDecl::new("Prime", IntRepr::I64)
        .constant("p2", 2)
        .constant("p3", 3)
        .constant("p5", 5)
        .constant("p7", 7)
        .constant("p77", 7)
        .constant("p11", 11)
        .constant("p13", 13)
        .constant("p17", 17)
        .constant("p19", 19)
        .constant("p23", 23)
        .constant("p29", 29)
        .constant("p37", 31)
        .constant("p41", 41)
        .constant("p43", 43)
}

/// Analyze with default naming and policy.
pub fn build(decl: &EnumDecl) -> NameTable {
    analyze(decl, &NameOptions::default(), &SelectionPolicy::default())
        .expect("reference declaration must analyze")
}
