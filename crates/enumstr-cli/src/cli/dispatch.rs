//! Dispatch logic: extract params from ArgMatches and convert to command args.
//!
//! `*Params` mirror the raw flags; the `From` impls turn them into the
//! library configuration each command runs with.

use std::path::PathBuf;

use clap::ArgMatches;

use enumstr_lib::{NameOptions, RustEmitConfig, SelectionPolicy, Visibility};

use super::ColorChoice;
use crate::commands::generate::GenerateArgs;
use crate::commands::plan::PlanArgs;

/// Flags shared by every command.
pub struct InputParams {
    pub input: PathBuf,
    pub types: Vec<String>,
    pub trim_prefix: Option<String>,
    pub use_labels: bool,
    pub max_split_runs: Option<usize>,
}

impl InputParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            input: m.get_one::<PathBuf>("input").cloned().unwrap_or_default(),
            types: m
                .get_many::<String>("types")
                .map(|values| values.cloned().collect())
                .unwrap_or_default(),
            trim_prefix: m.get_one::<String>("trim_prefix").cloned(),
            use_labels: m.get_flag("use_labels"),
            max_split_runs: m.get_one::<usize>("max_split_runs").copied(),
        }
    }

    fn names(&self) -> NameOptions {
        let names = NameOptions::new().use_labels(self.use_labels);
        match &self.trim_prefix {
            Some(prefix) => names.trim_prefix(prefix.as_str()),
            None => names,
        }
    }

    fn policy(&self) -> SelectionPolicy {
        match self.max_split_runs {
            Some(value) => SelectionPolicy::new().max_split_runs(value),
            None => SelectionPolicy::default(),
        }
    }
}

pub struct GenerateParams {
    pub input: InputParams,
    pub fn_name: Option<String>,
    pub visibility: Visibility,
    pub display: bool,
    pub output: Option<PathBuf>,
    pub write: bool,
}

impl GenerateParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            input: InputParams::from_matches(m),
            fn_name: m.get_one::<String>("fn_name").cloned(),
            visibility: parse_visibility(m),
            display: m.get_flag("display"),
            output: m.get_one::<PathBuf>("output").cloned(),
            write: m.get_flag("write"),
        }
    }
}

impl From<GenerateParams> for GenerateArgs {
    fn from(p: GenerateParams) -> Self {
        let mut rust = RustEmitConfig::new()
            .visibility(p.visibility)
            .display_impl(p.display);
        if let Some(name) = p.fn_name {
            rust = rust.fn_name(name);
        }
        Self {
            names: p.input.names(),
            policy: p.input.policy(),
            input: p.input.input,
            types: p.input.types,
            rust,
            output: p.output,
            write: p.write,
        }
    }
}

pub struct PlanParams {
    pub input: InputParams,
    pub color: ColorChoice,
}

impl PlanParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            input: InputParams::from_matches(m),
            color: parse_color(m),
        }
    }
}

impl From<PlanParams> for PlanArgs {
    fn from(p: PlanParams) -> Self {
        Self {
            names: p.input.names(),
            policy: p.input.policy(),
            input: p.input.input,
            types: p.input.types,
            color: p.color.should_colorize(),
        }
    }
}

fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}

fn parse_visibility(m: &ArgMatches) -> Visibility {
    match m.get_one::<String>("visibility").map(|s| s.as_str()) {
        Some("crate") => Visibility::Crate,
        Some("private") => Visibility::Private,
        _ => Visibility::Public,
    }
}
