mod cli;
mod commands;
mod tracing_config;

use cli::{GenerateParams, PlanParams, build_cli};

fn main() {
    tracing_config::init_tracing();

    let matches = build_cli().get_matches();

    match matches.subcommand() {
        Some(("generate", m)) => {
            let params = GenerateParams::from_matches(m);
            commands::generate::run(params.into());
        }
        Some(("plan", m)) => {
            let params = PlanParams::from_matches(m);
            commands::plan::run(params.into());
        }
        _ => unreachable!("clap should have caught this"),
    }
}
