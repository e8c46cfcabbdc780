//! Human-readable plan dump.
//!
//! One header line per type, then one line per range table (bounds, blob,
//! offsets) or per map entry (value, name). Bounds are padded to a common
//! width so blobs line up.

use std::fmt::Write as _;

use enumstr_core::Colors;

use crate::table::{NameTable, RangeTable, TableSet};

/// Dump the encoding of one type.
pub fn dump(table: &NameTable, colors: Colors) -> String {
    let mut out = String::new();
    dump_header(&mut out, table, colors);
    match table.tables() {
        TableSet::Single(_) | TableSet::Split(_) => {
            dump_ranges(&mut out, table.tables().ranges(), colors)
        }
        TableSet::Map(_) => dump_map(&mut out, table, colors),
    }
    out
}

/// Dump several types, separated by blank lines.
pub fn dump_all(tables: &[NameTable], colors: Colors) -> String {
    tables
        .iter()
        .map(|table| dump(table, colors))
        .collect::<Vec<_>>()
        .join("\n")
}

fn dump_header(out: &mut String, table: &NameTable, colors: Colors) {
    let cost = table.cost();
    writeln!(
        out,
        "{} {} {} {}",
        colors.paint(colors.blue, table.type_name()),
        table.repr(),
        table.kind().as_str(),
        colors.paint(
            colors.dim,
            format_args!(
                "(declared {}, unique {}, runs {}, holes {})",
                table.declared(),
                table.unique(),
                cost.runs,
                cost.holes()
            )
        )
    )
    .unwrap();
}

fn bounds(range: &RangeTable) -> String {
    if range.len() == 1 {
        range.min().to_string()
    } else {
        format!("{}..={}", range.min(), range.max())
    }
}

fn dump_ranges(out: &mut String, ranges: &[RangeTable], colors: Colors) {
    let labels: Vec<String> = ranges.iter().map(bounds).collect();
    let width = labels.iter().map(String::len).max().unwrap_or(0);

    for (range, label) in ranges.iter().zip(&labels) {
        let names = range.names();
        write!(
            out,
            "  {}{} {}",
            colors.paint(colors.blue, label),
            " ".repeat(width - label.len()),
            colors.paint(colors.green, format_args!("{:?}", names.blob()))
        )
        .unwrap();
        if range.len() > 1 {
            let offsets: Vec<String> = names.offsets().iter().map(|o| o.to_string()).collect();
            write!(
                out,
                " {}",
                colors.paint(
                    colors.dim,
                    format_args!("{}[{}]", names.index_width(), offsets.join(", "))
                )
            )
            .unwrap();
        }
        out.push('\n');
    }
}

fn dump_map(out: &mut String, table: &NameTable, colors: Colors) {
    let entries = table.entries();
    let width = entries
        .iter()
        .map(|(value, _)| value.to_string().len())
        .max()
        .unwrap_or(0);

    for (value, name) in entries {
        writeln!(
            out,
            "  {:>width$} {}",
            value,
            colors.paint(colors.green, format_args!("{name:?}"))
        )
        .unwrap();
    }
}
