use std::fs;
use std::path::{Path, PathBuf};

use enumstr_core::EnumDecl;
use enumstr_core::utils::to_snake_case;
use enumstr_lib::{Generator, NameOptions, RustEmitConfig, SelectionPolicy};

use super::input_loader::load_declarations;

pub struct GenerateArgs {
    pub input: PathBuf,
    pub types: Vec<String>,
    pub names: NameOptions,
    pub policy: SelectionPolicy,
    pub rust: RustEmitConfig,
    pub output: Option<PathBuf>,
    pub write: bool,
}

pub fn run(args: GenerateArgs) {
    let decls = match load_declarations(&args.input) {
        Ok(decls) => decls,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(msg) = validate(&args, &decls) {
        eprintln!("error: {}", msg);
        std::process::exit(1);
    }

    let generator = Generator::new()
        .policy(args.policy)
        .names(args.names.clone())
        .rust_config(args.rust.clone())
        .command_line(command_line())
        .types(args.types.iter().cloned());

    let output = match generator.generate(&decls) {
        Ok(output) => output,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    };

    let target = match output_path(&args, &decls) {
        Ok(target) => target,
        Err(msg) => {
            eprintln!("error: {}", msg);
            std::process::exit(1);
        }
    };

    match target {
        Some(path) => {
            if let Err(e) = fs::write(&path, output) {
                eprintln!("error: failed to write '{}': {}", path.display(), e);
                std::process::exit(1);
            }
            tracing::info!(path = %path.display(), "wrote generated file");
        }
        None => print!("{}", output),
    }
}

/// Flag combinations the generator cannot honor.
pub fn validate(args: &GenerateArgs, decls: &[EnumDecl]) -> Result<(), &'static str> {
    let selected = if args.types.is_empty() {
        decls.len()
    } else {
        args.types.len()
    };
    if args.rust.fn_name.is_some() && selected > 1 {
        return Err("--fn-name requires exactly one type");
    }
    if args.write && args.input.as_os_str() == "-" {
        return Err("--write requires an input file, not stdin");
    }
    Ok(())
}

/// Where to write, or `None` for stdout.
pub fn output_path(args: &GenerateArgs, decls: &[EnumDecl]) -> Result<Option<PathBuf>, String> {
    if let Some(path) = &args.output {
        return Ok(Some(path.clone()));
    }
    if !args.write {
        return Ok(None);
    }
    let first = args
        .types
        .first()
        .map(String::as_str)
        .or_else(|| decls.first().map(|decl| decl.name.as_str()))
        .ok_or_else(|| "no types to generate".to_string())?;
    Ok(Some(default_output_path(&args.input, first)))
}

/// `<snake_case type>_name.rs` in the input's directory.
pub fn default_output_path(input: &Path, type_name: &str) -> PathBuf {
    let dir = input.parent().unwrap_or_else(|| Path::new("."));
    dir.join(format!("{}_name.rs", to_snake_case(type_name)))
}

/// The invocation as recorded in the generated header.
fn command_line() -> String {
    let args: Vec<String> = std::env::args().skip(1).collect();
    format!("enumstr {}", args.join(" "))
}
