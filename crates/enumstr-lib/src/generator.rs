//! Whole-file generation for several declared types.

use indexmap::IndexMap;

use enumstr_core::EnumDecl;
use enumstr_core::utils::is_rust_identifier;

use crate::analyze::{NameOptions, analyze};
use crate::emit::{RustEmitConfig, emit_rust, item_names};
use crate::plan::SelectionPolicy;
use crate::table::NameTable;
use crate::{Error, Result};

/// Command line recorded in the header when none is given.
pub const DEFAULT_COMMAND_LINE: &str = "enumstr";

/// Builds one generated Rust file from a set of declarations.
#[derive(Clone, Debug, Default)]
pub struct Generator {
    policy: SelectionPolicy,
    names: NameOptions,
    rust: RustEmitConfig,
    command_line: Option<String>,
    types: Vec<String>,
}

impl Generator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn policy(mut self, policy: SelectionPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn names(mut self, names: NameOptions) -> Self {
        self.names = names;
        self
    }

    pub fn rust_config(mut self, config: RustEmitConfig) -> Self {
        self.rust = config;
        self
    }

    /// Command line quoted in the generated header.
    pub fn command_line(mut self, command_line: impl Into<String>) -> Self {
        self.command_line = Some(command_line.into());
        self
    }

    /// Restrict generation to these types, in this order. Empty means all.
    pub fn types<I, S>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.types = types.into_iter().map(Into::into).collect();
        self
    }

    /// Analyze the requested types.
    pub fn analyze(&self, decls: &[EnumDecl]) -> Result<Vec<NameTable>> {
        if decls.is_empty() {
            return Err(Error::NoTypes);
        }

        let mut by_name: IndexMap<&str, &EnumDecl> = IndexMap::new();
        for decl in decls {
            by_name.entry(decl.name.as_str()).or_insert(decl);
        }

        let selected: Vec<&EnumDecl> = if self.types.is_empty() {
            by_name.values().copied().collect()
        } else {
            self.types
                .iter()
                .map(|name| {
                    by_name
                        .get(name.as_str())
                        .copied()
                        .ok_or_else(|| Error::UnknownType(name.clone()))
                })
                .collect::<Result<_>>()?
        };

        tracing::debug!(types = selected.len(), "analyzing");
        selected
            .into_iter()
            .map(|decl| analyze(decl, &self.names, &self.policy))
            .collect()
    }

    /// Generate the complete file: header, then one fragment per type.
    pub fn generate(&self, decls: &[EnumDecl]) -> Result<String> {
        let tables = self.analyze(decls)?;
        self.check_item_names(&tables)?;

        let command_line = self.command_line.as_deref().unwrap_or(DEFAULT_COMMAND_LINE);
        let mut out = format!("// Code generated by \"{command_line}\"; DO NOT EDIT.\n");
        for table in &tables {
            out.push('\n');
            out.push_str(&emit_rust(table, &self.rust));
            out.push('\n');
        }
        Ok(out)
    }

    /// Every emitted item must be a valid identifier, unique across the file.
    fn check_item_names(&self, tables: &[NameTable]) -> Result<()> {
        let mut owners: IndexMap<String, &str> = IndexMap::new();
        for table in tables {
            let fn_name = self.rust.resolve_fn_name(table.type_name());
            if !is_rust_identifier(&fn_name) {
                return Err(Error::InvalidFnName {
                    type_name: table.type_name().to_string(),
                    name: fn_name,
                });
            }
            for ident in item_names(table, &self.rust) {
                if let Some(first) = owners.insert(ident.clone(), table.type_name()) {
                    return Err(Error::DuplicateIdentifier {
                        ident,
                        first: first.to_string(),
                        second: table.type_name().to_string(),
                    });
                }
            }
        }
        Ok(())
    }
}
