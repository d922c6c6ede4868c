// Copyright (c) 2025 Brian G. Milnes
// SPDX-License-Identifier: MIT

//! Run driver: select files, transform each one, write back unless dry run
//!
//! Files are handled one at a time. A read or write failure on one file is
//! logged and counted, and the run moves on to the next file.

use crate::config::RunConfig;
use crate::error::{AnnotateError, Result};
use crate::selector::SourceFiles;
use crate::transform::{Insertion, LineTransformer};
use serde::Serialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{error, info};

/// What happened to one file
#[derive(Debug)]
pub enum FileOutcome {
    Modified,
    /// Dry run: the file would have been rewritten
    WouldModify,
    Unchanged,
    Failed(AnnotateError),
}

/// Per-file result handed to the observer
#[derive(Debug)]
pub struct FileReport {
    pub path: PathBuf,
    /// Path relative to the scan root
    pub relative: PathBuf,
    pub insertions: Vec<Insertion>,
    pub outcome: FileOutcome,
}

impl FileReport {
    /// Annotations this file contributes to the run total
    pub fn changes(&self) -> usize {
        match self.outcome {
            FileOutcome::Modified | FileOutcome::WouldModify => self.insertions.len(),
            FileOutcome::Unchanged | FileOutcome::Failed(_) => 0,
        }
    }
}

/// Run-level counters
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub files_scanned: usize,
    pub files_modified: usize,
    pub annotations_added: usize,
    pub failed_files: usize,
    pub dry_run: bool,
    pub ios_version: String,
}

impl RunSummary {
    /// Fold one file's result into the totals
    pub fn record(mut self, report: &FileReport) -> Self {
        let changes = report.changes();
        self.annotations_added += changes;
        if changes > 0 {
            self.files_modified += 1;
        }
        if matches!(report.outcome, FileOutcome::Failed(_)) {
            self.failed_files += 1;
        }
        self
    }
}

/// Hooks for progress reporting
pub trait RunObserver {
    fn on_discovered(&mut self, _root: &Path, _count: usize) {}
    fn on_file(&mut self, _report: &FileReport) {}
}

/// Observer that ignores everything
pub struct Silent;

impl RunObserver for Silent {}

/// Default writer: replace the file contents in place
pub fn write_file(path: &Path, text: &str) -> io::Result<()> {
    fs::write(path, text)
}

/// Read, transform, and conditionally write one file
pub fn process_file(path: &Path, root: &Path, transformer: &LineTransformer, dry_run: bool) -> FileReport {
    process_file_with(path, root, transformer, dry_run, &mut write_file)
}

/// [`process_file`] with the write step supplied by the caller
pub fn process_file_with<W>(
    path: &Path,
    root: &Path,
    transformer: &LineTransformer,
    dry_run: bool,
    write: &mut W,
) -> FileReport
where
    W: FnMut(&Path, &str) -> io::Result<()>,
{
    let relative = path.strip_prefix(root).unwrap_or(path).to_path_buf();

    // The console report repeats this on stdout; stderr keeps it visible under --json
    let (insertions, outcome) = match rewrite(path, transformer, dry_run, write) {
        Ok((insertions, outcome)) => (insertions, outcome),
        Err(err) => {
            error!("Error processing {}: {err}", path.display());
            (Vec::new(), FileOutcome::Failed(err))
        }
    };

    FileReport {
        path: path.to_path_buf(),
        relative,
        insertions,
        outcome,
    }
}

fn rewrite<W>(path: &Path, transformer: &LineTransformer, dry_run: bool, write: &mut W) -> Result<(Vec<Insertion>, FileOutcome)>
where
    W: FnMut(&Path, &str) -> io::Result<()>,
{
    let content = fs::read_to_string(path).map_err(|source| AnnotateError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let result = transformer.transform(&content);
    if !result.changed() {
        return Ok((result.insertions, FileOutcome::Unchanged));
    }

    if dry_run {
        return Ok((result.insertions, FileOutcome::WouldModify));
    }

    write(path, &result.text).map_err(|source| AnnotateError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    info!("Modified {} - added {} annotations", path.display(), result.insertion_count());

    Ok((result.insertions, FileOutcome::Modified))
}

/// Process every selected file under the configured root
pub fn run(config: &RunConfig, observer: &mut impl RunObserver) -> Result<RunSummary> {
    run_with(config, observer, write_file)
}

/// [`run`] with the write step supplied by the caller
pub fn run_with<W>(config: &RunConfig, observer: &mut impl RunObserver, mut write: W) -> Result<RunSummary>
where
    W: FnMut(&Path, &str) -> io::Result<()>,
{
    let transformer = LineTransformer::new(&config.annotation)?;
    let selector = SourceFiles::new(&config.selector)?;
    let root = selector.root().to_path_buf();
    let files: Vec<PathBuf> = selector.collect();

    observer.on_discovered(&root, files.len());

    let initial = RunSummary {
        files_scanned: files.len(),
        dry_run: config.dry_run,
        ios_version: config.annotation.ios_version.clone(),
        ..RunSummary::default()
    };

    let summary = files.iter().fold(initial, |summary, path| {
        let report = process_file_with(path, &root, &transformer, config.dry_run, &mut write);
        observer.on_file(&report);
        summary.record(&report)
    });

    Ok(summary)
}
