// Copyright (c) 2025 Brian G. Milnes
// SPDX-License-Identifier: MIT

//! File selector: find Swift sources under a root directory
//!
//! Hidden and build-artifact directories are pruned before descent, and
//! files whose root-relative path matches any exclusion glob are skipped
//! without being read. Exclusion globs use shell semantics: `*` may cross
//! `/`, and `**` spans any number of path segments.

use crate::config::{SelectorConfig, PRUNED_DIR_NAMES, SOURCE_SUFFIX};
use crate::error::{AnnotateError, Result};
use globset::{Glob, GlobBuilder, GlobSet, GlobSetBuilder};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::{DirEntry, FilterEntry, WalkDir};

/// Compile exclusion patterns into a single matcher
///
/// Unclosed `[` is taken literally and `\\` is an ordinary character. A
/// pattern that still fails to compile is matched as a literal path.
pub fn compile_excludes(patterns: &[String]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        builder.add(exclude_glob(pattern)?);
    }
    builder.build().map_err(|source| AnnotateError::InvalidPattern {
        pattern: patterns.join(", "),
        source,
    })
}

fn exclude_glob(pattern: &str) -> Result<Glob> {
    let build = |text: &str| {
        GlobBuilder::new(text)
            .literal_separator(false)
            .backslash_escape(false)
            .allow_unclosed_class(true)
            .build()
    };

    match build(pattern) {
        Ok(glob) => Ok(glob),
        Err(err) => {
            warn!("Exclude pattern '{pattern}' is not a valid glob ({err}), matching it literally");
            build(&globset::escape(pattern)).map_err(|source| AnnotateError::InvalidPattern {
                pattern: pattern.to_string(),
                source,
            })
        }
    }
}

/// True for directories that are never descended into
pub fn is_pruned_dir(name: &str) -> bool {
    name.starts_with('.') || PRUNED_DIR_NAMES.contains(&name)
}

fn keep_entry(entry: &DirEntry) -> bool {
    if entry.depth() == 0 || !entry.file_type().is_dir() {
        return true;
    }
    !is_pruned_dir(&entry.file_name().to_string_lossy())
}

/// Lazy iterator over the selected source files
///
/// Yields absolute paths. Order follows the underlying directory walk.
pub struct SourceFiles {
    root: PathBuf,
    excludes: GlobSet,
    walker: FilterEntry<walkdir::IntoIter, fn(&DirEntry) -> bool>,
}

impl SourceFiles {
    /// Start a walk; fails if the root is missing or a pattern is invalid
    pub fn new(config: &SelectorConfig) -> Result<Self> {
        let root = fs::canonicalize(&config.root)
            .map_err(|_| AnnotateError::RootNotFound(config.root.clone()))?;
        if !root.is_dir() {
            return Err(AnnotateError::NotADirectory(config.root.clone()));
        }

        let excludes = compile_excludes(&config.exclude_patterns)?;
        let walker = WalkDir::new(&root)
            .into_iter()
            .filter_entry(keep_entry as fn(&DirEntry) -> bool);

        Ok(Self { root, excludes, walker })
    }

    /// The canonical scan root
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path relative to the scan root, for matching and display
    pub fn relative<'a>(&self, path: &'a Path) -> &'a Path {
        path.strip_prefix(&self.root).unwrap_or(path)
    }

    fn is_excluded(&self, path: &Path) -> bool {
        self.excludes.is_match(self.relative(path))
    }
}

impl Iterator for SourceFiles {
    type Item = PathBuf;

    fn next(&mut self) -> Option<PathBuf> {
        loop {
            let entry = match self.walker.next()? {
                Ok(entry) => entry,
                Err(err) => {
                    warn!("Failed to walk directory: {err}");
                    continue;
                }
            };

            let is_source = entry.path().is_file()
                && entry.file_name().to_string_lossy().ends_with(SOURCE_SUFFIX);
            if !is_source {
                continue;
            }

            if self.is_excluded(entry.path()) {
                debug!("excluded: {}", self.relative(entry.path()).display());
                continue;
            }

            return Some(entry.into_path());
        }
    }
}

/// Collect every selected file
pub fn find_swift_files(config: &SelectorConfig) -> Result<Vec<PathBuf>> {
    Ok(SourceFiles::new(config)?.collect())
}
