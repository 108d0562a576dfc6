use anyhow::{Context, Result};
use log::debug;
use std::collections::VecDeque;
use std::fs;
use std::path::PathBuf;

/// Suffix that identifies a source file.
const SOURCE_SUFFIX: &str = ".rs";

/// Index over the source roots given on the command line.
///
/// Both operations walk the tree the same way: a worklist seeded with every
/// root, each visited directory appending its immediate subdirectories to
/// the back while its files are inspected on the spot. The resulting order
/// is level-leaning (files directly under a root are seen before files in
/// any of its subdirectories) and deliberately not lexicographic; callers
/// must not rely on alphabetical ordering.
///
/// Build-artifact `target` directories and hidden directories (leading `.`)
/// are never descended into.
///
/// # Example
///
/// ```no_run
/// use swagger_from_source::scanner::SourceIndex;
/// use std::path::PathBuf;
///
/// let index = SourceIndex::new(vec![PathBuf::from("./api"), PathBuf::from("./models")]);
/// let files = index.enumerate().unwrap();
/// println!("Found {} source files", files.len());
/// ```
pub struct SourceIndex {
    roots: Vec<PathBuf>,
}

/// A discovered source file.
#[derive(Debug, Clone)]
pub struct SourceFile {
    /// Full path to the file
    pub path: PathBuf,
    /// Base filename, used for model lookups
    pub file_name: String,
}

impl SourceIndex {
    /// Creates an index over the given root directories. Seed order is
    /// visit order.
    pub fn new(roots: Vec<PathBuf>) -> Self {
        Self { roots }
    }

    /// Every source file under the roots, in traversal order.
    ///
    /// # Errors
    ///
    /// Returns an error if any directory along the way cannot be listed;
    /// a failed listing is a broken precondition, not a skippable file.
    pub fn enumerate(&self) -> Result<Vec<SourceFile>> {
        let mut files = Vec::new();
        self.walk(|file| {
            files.push(file);
            true
        })?;
        Ok(files)
    }

    /// The first file with exactly this base name, in the same traversal
    /// order as [`enumerate`](Self::enumerate), or `None`.
    ///
    /// A miss is an answer, not an error; only listing failures error.
    pub fn find_by_name(&self, file_name: &str) -> Result<Option<SourceFile>> {
        let mut found = None;
        self.walk(|file| {
            if file.file_name == file_name {
                found = Some(file);
                false
            } else {
                true
            }
        })?;
        Ok(found)
    }

    /// Worklist walk shared by both operations. The callback returns false
    /// to stop early.
    fn walk(&self, mut on_file: impl FnMut(SourceFile) -> bool) -> Result<()> {
        let mut worklist: VecDeque<PathBuf> = self.roots.iter().cloned().collect();

        while let Some(dir) = worklist.pop_front() {
            debug!("Checking folder {}", dir.display());
            let entries = fs::read_dir(&dir)
                .with_context(|| format!("Failed to list directory {}", dir.display()))?;

            for entry in entries {
                let entry = entry
                    .with_context(|| format!("Failed to read an entry of {}", dir.display()))?;
                let path = entry.path();

                if path.is_dir() {
                    if !skip_directory(&path) {
                        worklist.push_back(path);
                    }
                } else if let Some(file) = source_file(path) {
                    if !on_file(file) {
                        return Ok(());
                    }
                }
            }
        }

        Ok(())
    }
}

/// Directories never descended into: build artifacts and hidden trees.
fn skip_directory(path: &std::path::Path) -> bool {
    match path.file_name().and_then(|name| name.to_str()) {
        Some(name) => name.starts_with('.') || name == "target",
        None => false,
    }
}

/// Wraps a path as a [`SourceFile`] if its name carries the source suffix.
fn source_file(path: PathBuf) -> Option<SourceFile> {
    let file_name = path.file_name()?.to_str()?.to_string();
    if file_name.ends_with(SOURCE_SUFFIX) {
        Some(SourceFile { path, file_name })
    } else {
        None
    }
}
