//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` so `generate` and `plan` declare the
//! input and naming flags identically.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// Declarations file (positional, `-` for stdin).
pub fn input_arg() -> Arg {
    Arg::new("input")
        .value_name("INPUT")
        .value_parser(value_parser!(PathBuf))
        .required(true)
        .help("JSON declarations file, or - for stdin")
}

/// Types to process (-t/--type, repeatable).
pub fn type_arg() -> Arg {
    Arg::new("types")
        .short('t')
        .long("type")
        .value_name("NAME")
        .action(ArgAction::Append)
        .value_delimiter(',')
        .help("Type to process (repeatable or comma-separated; default: all)")
}

/// Prefix removed from constant names (--trim-prefix).
pub fn trim_prefix_arg() -> Arg {
    Arg::new("trim_prefix")
        .long("trim-prefix")
        .value_name("PREFIX")
        .help("Remove PREFIX from the start of constant names")
}

/// Use constant labels as names (--use-labels).
pub fn use_labels_arg() -> Arg {
    Arg::new("use_labels")
        .long("use-labels")
        .action(ArgAction::SetTrue)
        .help("Use a constant's label, when present, instead of its name")
}

/// Split/map threshold (--max-split-runs).
pub fn max_split_runs_arg() -> Arg {
    Arg::new("max_split_runs")
        .long("max-split-runs")
        .value_name("N")
        .value_parser(value_parser!(usize))
        .help("Most runs encoded as separate range tables before switching to a map [default: 10]")
}

/// Lookup function name (--fn-name).
pub fn fn_name_arg() -> Arg {
    Arg::new("fn_name")
        .long("fn-name")
        .value_name("NAME")
        .help("Lookup function name (single type only; default: <type>_name)")
}

/// Lookup function visibility (--visibility).
pub fn visibility_arg() -> Arg {
    Arg::new("visibility")
        .long("visibility")
        .value_name("VIS")
        .default_value("pub")
        .value_parser(["pub", "crate", "private"])
        .help("Visibility of the lookup function")
}

/// Emit a Display impl (--display).
pub fn display_arg() -> Arg {
    Arg::new("display")
        .long("display")
        .action(ArgAction::SetTrue)
        .help("Also emit `impl Display` for a newtype `struct Type(repr)`")
}

/// Output file (-o/--output).
pub fn output_arg() -> Arg {
    Arg::new("output")
        .short('o')
        .long("output")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .conflicts_with("write")
        .help("Write output to FILE instead of stdout")
}

/// Write next to the input (--write).
pub fn write_arg() -> Arg {
    Arg::new("write")
        .short('w')
        .long("write")
        .action(ArgAction::SetTrue)
        .help("Write output to <type>_name.rs next to the input file")
}

/// Color output control (--color).
pub fn color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .value_name("WHEN")
        .default_value("auto")
        .value_parser(["auto", "always", "never"])
        .help("Colorize output")
}
