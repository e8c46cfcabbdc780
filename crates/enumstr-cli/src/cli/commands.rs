//! Command builders for the CLI.

use clap::Command;

use super::args::*;

/// Add the input and naming args shared by every command.
fn with_input_args(cmd: Command) -> Command {
    cmd.arg(input_arg())
        .arg(type_arg())
        .arg(trim_prefix_arg())
        .arg(use_labels_arg())
        .arg(max_split_runs_arg())
}

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("enumstr")
        .about("Generate value-to-name lookup functions for integer enumerations")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(generate_command())
        .subcommand(plan_command())
}

/// Generate Rust lookup functions.
pub fn generate_command() -> Command {
    let cmd = Command::new("generate")
        .about("Generate Rust lookup functions")
        .override_usage(
            "\
  enumstr generate <INPUT> [-t <NAME>]... [-o <FILE>]
  enumstr generate <INPUT> -t <NAME> --write",
        )
        .after_help(
            r#"EXAMPLES:
  enumstr generate types.json                      # every type, to stdout
  enumstr generate types.json -t Pill -w           # writes pill_name.rs
  enumstr generate types.json -t Pill --trim-prefix Pill
  cat types.json | enumstr generate - -o names.rs  # from stdin"#,
        );

    with_input_args(cmd)
        .arg(fn_name_arg())
        .arg(visibility_arg())
        .arg(display_arg())
        .arg(output_arg())
        .arg(write_arg())
}

/// Show the selected encoding of each type.
pub fn plan_command() -> Command {
    let cmd = Command::new("plan")
        .about("Show the selected encoding, runs and tables of each type")
        .after_help(
            r#"EXAMPLES:
  enumstr plan types.json                    # every type
  enumstr plan types.json -t Prime           # one type
  enumstr plan types.json --max-split-runs 0 # force maps"#,
        );

    with_input_args(cmd).arg(color_arg())
}
