use std::fs;
use std::io::{self, Read};
use std::path::Path;

use enumstr_core::{EnumDecl, parse_package};

/// Failure to obtain declarations from the input.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read '{path}': {source}")]
    Read { path: String, source: io::Error },

    #[error("invalid declarations in '{path}': {source}")]
    Parse {
        path: String,
        source: serde_json::Error,
    },
}

/// Load declarations from a JSON file, or from stdin when `path` is `-`.
pub fn load_declarations(path: &Path) -> Result<Vec<EnumDecl>, LoadError> {
    let (display, content) = if path.as_os_str() == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .map_err(|source| LoadError::Read {
                path: "<stdin>".to_string(),
                source,
            })?;
        ("<stdin>".to_string(), buf)
    } else {
        let display = path.display().to_string();
        let content = fs::read_to_string(path).map_err(|source| LoadError::Read {
            path: display.clone(),
            source,
        })?;
        (display, content)
    };
    parse_declarations(&display, &content)
}

/// Parse declarations from JSON text; `path` is only used in errors.
pub fn parse_declarations(path: &str, content: &str) -> Result<Vec<EnumDecl>, LoadError> {
    let package = parse_package(content).map_err(|source| LoadError::Parse {
        path: path.to_string(),
        source,
    })?;
    tracing::debug!(path, types = package.types.len(), "loaded declarations");
    Ok(package.types.into_iter().map(EnumDecl::from).collect())
}
