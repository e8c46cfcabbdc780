//! Rust code emitter for name tables.
//!
//! Emits the data declarations and the lookup function for one type. Range
//! encodings become a `&str` blob plus an offset array per run and a `match`
//! over inclusive range patterns; the map encoding becomes a sorted static
//! array searched by key.

use std::fmt::Write as _;

use enumstr_core::IntRepr;
use enumstr_core::utils::{to_screaming_snake_case, to_snake_case};

use crate::table::{MapTable, NameTable, RangeTable, TableSet};

/// Visibility of the emitted lookup function.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Visibility {
    Private,
    Crate,
    #[default]
    Public,
}

impl Visibility {
    fn prefix(self) -> &'static str {
        match self {
            Visibility::Private => "",
            Visibility::Crate => "pub(crate) ",
            Visibility::Public => "pub ",
        }
    }
}

/// Configuration for Rust emission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RustEmitConfig {
    pub visibility: Visibility,
    /// Lookup function name (default: `<type_in_snake_case>_name`).
    pub fn_name: Option<String>,
    /// Also emit `impl Display for Type`, assuming `struct Type(repr)`.
    pub display_impl: bool,
}

impl RustEmitConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn visibility(mut self, value: Visibility) -> Self {
        self.visibility = value;
        self
    }

    pub fn fn_name(mut self, name: impl Into<String>) -> Self {
        self.fn_name = Some(name.into());
        self
    }

    pub fn display_impl(mut self, value: bool) -> Self {
        self.display_impl = value;
        self
    }

    /// Lookup function name for `type_name`.
    pub fn resolve_fn_name(&self, type_name: &str) -> String {
        match &self.fn_name {
            Some(name) => name.clone(),
            None => format!("{}_name", to_snake_case(type_name)),
        }
    }
}

/// Emit the data declarations and lookup function for one type.
pub fn emit_rust(table: &NameTable, config: &RustEmitConfig) -> String {
    let prefix = to_screaming_snake_case(table.type_name());
    let fn_name = config.resolve_fn_name(table.type_name());

    let mut out = match table.tables() {
        TableSet::Single(range) => emit_range_data(std::slice::from_ref(range), &prefix, false),
        TableSet::Split(ranges) => emit_range_data(ranges, &prefix, true),
        TableSet::Map(map) => emit_map_data(map, table.repr(), &prefix),
    };
    out.push('\n');
    out.push_str(&emit_lookup_fn(table, config, &prefix, &fn_name));

    if config.display_impl {
        out.push_str("\n\n");
        out.push_str(&emit_display_impl(table.type_name(), &fn_name));
    }
    out
}

/// Item names `emit_rust` declares for `table`, data first, function last.
pub fn item_names(table: &NameTable, config: &RustEmitConfig) -> Vec<String> {
    let prefix = to_screaming_snake_case(table.type_name());
    let mut names = Vec::new();
    match table.tables() {
        TableSet::Map(_) => names.push(format!("{prefix}_MAP")),
        TableSet::Single(_) | TableSet::Split(_) => {
            let numbered = matches!(table.tables(), TableSet::Split(_));
            for (k, range) in table.tables().ranges().iter().enumerate() {
                let (name_ident, index_ident) = range_idents(&prefix, k, numbered);
                names.push(name_ident);
                if range.len() > 1 {
                    names.push(index_ident);
                }
            }
        }
    }
    names.push(config.resolve_fn_name(table.type_name()));
    names
}

/// Names of the blob and index constants of range `k`.
fn range_idents(prefix: &str, k: usize, numbered: bool) -> (String, String) {
    if numbered {
        (format!("{prefix}_NAME_{k}"), format!("{prefix}_INDEX_{k}"))
    } else {
        (format!("{prefix}_NAME"), format!("{prefix}_INDEX"))
    }
}

fn emit_range_data(ranges: &[RangeTable], prefix: &str, numbered: bool) -> String {
    let mut out = String::new();
    for (k, range) in ranges.iter().enumerate() {
        let (name_ident, _) = range_idents(prefix, k, numbered);
        writeln!(out, "const {name_ident}: &str = {:?};", range.names().blob()).unwrap();
    }
    for (k, range) in ranges.iter().enumerate() {
        // A single name is returned whole; it needs no offsets.
        if range.len() == 1 {
            continue;
        }
        let (_, index_ident) = range_idents(prefix, k, numbered);
        let offsets: Vec<String> = range
            .names()
            .offsets()
            .iter()
            .map(|o| o.to_string())
            .collect();
        writeln!(
            out,
            "const {index_ident}: [{}; {}] = [{}];",
            range.names().index_width(),
            offsets.len(),
            offsets.join(", ")
        )
        .unwrap();
    }
    out
}

fn emit_map_data(map: &MapTable, repr: IntRepr, prefix: &str) -> String {
    let mut out = String::new();
    writeln!(out, "static {prefix}_MAP: [({repr}, &str); {}] = [", map.len()).unwrap();
    for (value, name) in map.entries() {
        writeln!(out, "    ({}, {:?}),", literal(*value, repr), name).unwrap();
    }
    out.push_str("];\n");
    out
}

fn emit_lookup_fn(
    table: &NameTable,
    config: &RustEmitConfig,
    prefix: &str,
    fn_name: &str,
) -> String {
    let repr = table.repr();
    let mut out = format!(
        "{}fn {fn_name}(i: {repr}) -> ::std::borrow::Cow<'static, str> {{\n",
        config.visibility.prefix()
    );
    out.push_str("    use ::std::borrow::Cow;\n");
    let fallback = format!("Cow::Owned(format!(\"{}({{i}})\"))", table.type_name());

    match table.tables() {
        TableSet::Map(_) => {
            let map_ident = format!("{prefix}_MAP");
            writeln!(
                out,
                "    match {map_ident}.binary_search_by_key(&i, |&(value, _)| value) {{"
            )
            .unwrap();
            writeln!(out, "        Ok(pos) => Cow::Borrowed({map_ident}[pos].1),").unwrap();
            writeln!(out, "        Err(_) => {fallback},").unwrap();
            out.push_str("    }\n");
        }
        TableSet::Single(_) | TableSet::Split(_) => {
            let ranges = table.tables().ranges();
            let numbered = matches!(table.tables(), TableSet::Split(_));
            out.push_str("    match i {\n");
            for (k, range) in ranges.iter().enumerate() {
                out.push_str(&emit_range_arm(range, repr, prefix, k, numbered));
            }
            if !covers_repr(ranges, repr) {
                writeln!(out, "        _ => {fallback},").unwrap();
            }
            out.push_str("    }\n");
        }
    }
    out.push('}');
    out
}

fn emit_range_arm(
    range: &RangeTable,
    repr: IntRepr,
    prefix: &str,
    k: usize,
    numbered: bool,
) -> String {
    let (name_ident, index_ident) = range_idents(prefix, k, numbered);
    let min = literal(range.min(), repr);

    if range.len() == 1 {
        return format!("        {min} => Cow::Borrowed({name_ident}),\n");
    }

    let max = literal(range.max(), repr);
    let idx = if range.min() == 0 {
        "i as usize".to_string()
    } else if range.min() > 0 {
        format!("(i - {min}) as usize")
    } else {
        format!("i.wrapping_sub({min}) as {} as usize", repr.to_unsigned())
    };

    let mut out = String::new();
    writeln!(out, "        {min}..={max} => {{").unwrap();
    writeln!(out, "            let idx = {idx};").unwrap();
    writeln!(
        out,
        "            Cow::Borrowed(&{name_ident}[{index_ident}[idx] as usize..{index_ident}[idx + 1] as usize])"
    )
    .unwrap();
    out.push_str("        }\n");
    out
}

fn emit_display_impl(type_name: &str, fn_name: &str) -> String {
    let mut out = format!("impl ::std::fmt::Display for {type_name} {{\n");
    out.push_str("    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {\n");
    writeln!(out, "        f.write_str(&{fn_name}(self.0))").unwrap();
    out.push_str("    }\n");
    out.push('}');
    out
}

/// A single range spanning every value of `repr` leaves nothing to fall back on.
fn covers_repr(ranges: &[RangeTable], repr: IntRepr) -> bool {
    matches!(ranges, [range] if range.min() == repr.min_value() && range.max() == repr.max_value())
}

/// Integer literal valid in both expression and pattern position.
///
/// The signed minimum is spelled as `iN::MIN`: its magnitude does not fit the
/// type as a plain literal.
pub(crate) fn literal(value: i128, repr: IntRepr) -> String {
    if repr.is_signed() && value == repr.min_value() {
        format!("{repr}::MIN")
    } else {
        value.to_string()
    }
}
