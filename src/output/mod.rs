//! Output file naming and path resolution.
//!
//! File names are unique within one generation pass: the [`FileLedger`]
//! is created per pass and handed to whatever claims names, so separate
//! passes never share state.

use std::{
    collections::HashSet,
    path::{MAIN_SEPARATOR, Path, PathBuf},
};

use crate::model::{TypeId, TypeModel};

/// Names already claimed during one generation pass.
///
/// Comparison ignores ASCII case so that names stay distinct on
/// case-insensitive file systems.
#[derive(Debug, Clone, Default)]
pub struct FileLedger {
    claimed: HashSet<String>,
}

impl FileLedger {
    /// Creates an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Claims `base + ext`, or the first free `base-N + ext` for N = 2, 3, …
    pub fn claim(&mut self, base: &str, ext: &str) -> String {
        let mut candidate = format!("{base}{ext}");
        let mut suffix = 2;
        while !self.claimed.insert(candidate.to_ascii_lowercase()) {
            candidate = format!("{base}-{suffix}{ext}");
            suffix += 1;
        }
        candidate
    }

    /// Whether a name has been claimed.
    pub fn contains(&self, file_name: &str) -> bool {
        self.claimed.contains(&file_name.to_ascii_lowercase())
    }

    /// Number of claimed names.
    pub fn len(&self) -> usize {
        self.claimed.len()
    }

    /// Whether nothing has been claimed yet.
    pub fn is_empty(&self) -> bool {
        self.claimed.is_empty()
    }
}

/// File name stem for a type: its simple name, or its full name with each
/// non-alphanumeric character replaced by `-`.
pub fn base_file_name(model: &TypeModel, id: TypeId, include_namespaces: bool) -> String {
    let descriptor = model.get(id);
    if !include_namespaces {
        return descriptor.name.clone();
    }

    descriptor
        .full_name()
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { '-' })
        .collect()
}

/// Where a pass writes its output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    /// Write into this directory, naming files after their types.
    Directory(PathBuf),
    /// Write exactly this file.
    File(PathBuf),
}

impl OutputTarget {
    /// Directory the output lands in.
    pub fn directory(&self) -> &Path {
        match self {
            OutputTarget::Directory(dir) => dir,
            OutputTarget::File(file) => file.parent().unwrap_or_else(|| Path::new("")),
        }
    }
}

/// Resolves a requested output path.
///
/// Absolute paths are used as-is; relative ones are joined to
/// `project_dir`. The result is a directory when the request ends with a
/// separator, has no extension, or names an existing directory; otherwise
/// it is a file.
pub fn resolve_output(requested: &str, project_dir: &Path) -> OutputTarget {
    let requested_path = Path::new(requested);
    let resolved = if requested_path.is_absolute() {
        requested_path.to_path_buf()
    } else {
        project_dir.join(requested_path)
    };

    let ends_with_separator = requested.ends_with(MAIN_SEPARATOR) || requested.ends_with('/');
    let looks_like_directory =
        ends_with_separator || resolved.extension().is_none() || resolved.is_dir();

    if looks_like_directory {
        OutputTarget::Directory(resolved)
    } else {
        OutputTarget::File(resolved)
    }
}
