//! Source discovery - expands CLI paths into files a lexer can handle
//!
//! Files named explicitly are kept as-is. Directories are walked
//! recursively, skipping hidden entries, and only files whose names match a
//! registered lexer's filename globs are kept.

use std::path::{Path, PathBuf};

use log::debug;
use thiserror::Error;
use walkdir::WalkDir;

use crate::lexer::LexerRegistry;

/// Errors that can occur while discovering sources
#[derive(Debug, Error)]
pub enum SourceError {
    /// Path does not exist
    #[error("path does not exist: {0}")]
    NotFound(PathBuf),

    /// Error walking directory tree
    #[error("walkdir error: {0}")]
    WalkDir(#[from] walkdir::Error),
}

/// Expand `paths` into the files to lex, without duplicates
///
/// Explicit files keep argument order; each directory contributes its
/// matching files sorted by path.
pub fn expand_paths(paths: &[PathBuf], registry: &LexerRegistry) -> Result<Vec<PathBuf>, SourceError> {
    let mut files = Vec::new();
    for path in paths {
        if path.is_dir() {
            for file in find_sources(path, registry)? {
                if !files.contains(&file) {
                    files.push(file);
                }
            }
        } else if path.exists() {
            if !files.contains(path) {
                files.push(path.clone());
            }
        } else {
            return Err(SourceError::NotFound(path.clone()));
        }
    }
    Ok(files)
}

/// Find every file under `root` some registered lexer can handle
pub fn find_sources(root: &Path, registry: &LexerRegistry) -> Result<Vec<PathBuf>, SourceError> {
    if !root.exists() {
        return Err(SourceError::NotFound(root.to_path_buf()));
    }

    let mut matches = Vec::new();
    for entry in WalkDir::new(root).follow_links(true).into_iter().filter_entry(|e| {
        // Don't filter the root directory itself
        e.path() == root || !is_hidden(e)
    }) {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        if registry.for_filename(entry.path()).is_ok() {
            matches.push(entry.into_path());
        }
    }

    // Sort for deterministic output
    matches.sort();
    debug!("found {} source file(s) under {}", matches.len(), root.display());
    Ok(matches)
}

/// Check if an entry is hidden (starts with .)
fn is_hidden(entry: &walkdir::DirEntry) -> bool {
    entry.file_name().to_str().is_some_and(|s| s.starts_with('.'))
}
