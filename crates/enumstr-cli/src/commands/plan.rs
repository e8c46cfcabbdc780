use std::path::PathBuf;

use enumstr_core::Colors;
use enumstr_lib::dump::dump_all;
use enumstr_lib::{Generator, NameOptions, SelectionPolicy};

use super::input_loader::load_declarations;

pub struct PlanArgs {
    pub input: PathBuf,
    pub types: Vec<String>,
    pub names: NameOptions,
    pub policy: SelectionPolicy,
    pub color: bool,
}

pub fn run(args: PlanArgs) {
    let decls = match load_declarations(&args.input) {
        Ok(decls) => decls,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    };

    let tables = Generator::new()
        .policy(args.policy)
        .names(args.names)
        .types(args.types)
        .analyze(&decls);

    match tables {
        Ok(tables) => print!("{}", dump_all(&tables, Colors::new(args.color))),
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    }
}
