use anyhow::{Context, Result};
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

/// Syntax tree of one source file.
///
/// Units are parsed on demand, handed to a single extraction call and then
/// dropped; nothing caches them across files. A model file referenced by an
/// endpoint is parsed again when the definitions section is rendered.
#[derive(Debug)]
pub struct ParsedUnit {
    /// Path to the source file
    pub path: PathBuf,
    /// The parsed syntax tree
    pub tree: syn::File,
}

/// Reads and parses one source file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or does not parse; callers
/// on the per-file path log the error and move on.
pub fn parse_unit(path: &Path) -> Result<ParsedUnit> {
    debug!("Parsing file {}", path.display());

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read file: {}", path.display()))?;

    let tree = syn::parse_file(&content)
        .with_context(|| format!("Failed to parse syntax in file: {}", path.display()))?;

    Ok(ParsedUnit {
        path: path.to_path_buf(),
        tree,
    })
}
