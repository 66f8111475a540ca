use crate::config::{FilterConfig, WalkOptions};
use crate::error::{EngineError, Result};
use ignore::{DirEntry, WalkBuilder};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// A file that passed the suffix filter and is about to be counted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub path: PathBuf,
    pub name: String,
}

/// Exact, case-sensitive suffix match on file names.
///
/// `foo.cc` matches `.cc`; `foo.cc.bak` and `foo.hhx` match nothing.
#[derive(Debug, Clone)]
pub struct SuffixFilter {
    suffixes: Vec<String>,
}

impl SuffixFilter {
    pub fn new(filter: &FilterConfig) -> Self {
        Self {
            suffixes: filter.suffixes(),
        }
    }

    pub fn matches(&self, file_name: &str) -> bool {
        self.suffixes.iter().any(|s| file_name.ends_with(s.as_str()))
    }
}

/// Make sure the scan root exists and is a directory.
///
/// # Errors
/// [`EngineError::DirectoryNotFound`], [`EngineError::NotADirectory`],
/// [`EngineError::PermissionDenied`] or [`EngineError::Io`].
pub fn check_root(root: &Path) -> Result<()> {
    let path = root.to_path_buf();
    match fs::metadata(root) {
        Ok(meta) if meta.is_dir() => Ok(()),
        Ok(_) => Err(EngineError::NotADirectory { path }),
        Err(e) => Err(match e.kind() {
            ErrorKind::NotFound => EngineError::DirectoryNotFound { path },
            ErrorKind::PermissionDenied => EngineError::PermissionDenied { path },
            _ => EngineError::Io { path, source: e },
        }),
    }
}

/// Sequential directory walk.
///
/// Calls `on_file` for every qualifying regular file, in listing order, and
/// stops at the first error either side returns.
///
/// # Errors
/// Root validation errors, walk errors, and whatever `on_file` returns.
pub fn walk<F>(options: &WalkOptions, filter: &SuffixFilter, mut on_file: F) -> Result<()>
where
    F: FnMut(Candidate) -> Result<()>,
{
    check_root(&options.root)?;

    let mut builder = WalkBuilder::new(&options.root);
    builder
        .standard_filters(options.respect_ignore)
        .require_git(false)
        .follow_links(false)
        .max_depth(if options.recursive { None } else { Some(1) });

    for entry in builder.build() {
        let entry = entry?;
        if entry.depth() == 0 {
            continue;
        }

        if !filter.matches(&entry.file_name().to_string_lossy()) {
            log::debug!("skipping {}: suffix not recognized", entry.path().display());
            continue;
        }
        if !is_countable(&entry)? {
            log::debug!("skipping {}: not a regular file", entry.path().display());
            continue;
        }

        let name = display_name(&options.root, entry.path());
        on_file(Candidate {
            path: entry.into_path(),
            name,
        })?;
    }

    Ok(())
}

/// Regular files and links to regular files are countable. A dangling link
/// is a read failure.
fn is_countable(entry: &DirEntry) -> Result<bool> {
    match entry.file_type() {
        Some(ft) if ft.is_file() => Ok(true),
        Some(ft) if ft.is_symlink() => fs::metadata(entry.path())
            .map(|meta| meta.is_file())
            .map_err(|e| EngineError::file_read(entry.path().to_path_buf(), e)),
        _ => Ok(false),
    }
}

fn display_name(root: &Path, path: &Path) -> String {
    let rel = path.strip_prefix(root).unwrap_or(path);
    rel.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
