// Copyright (c) 2025 Brian G. Milnes
// SPDX-License-Identifier: MIT

//! Console reporting for annotation runs

use crate::config::RunConfig;
use crate::runner::{FileOutcome, FileReport, RunObserver, RunSummary};
use anyhow::Result;
use std::path::Path;

/// Format a number with comma separators for readability
///
/// Examples:
/// - 1234 -> "1,234"
/// - 1000000 -> "1,000,000"
pub fn format_number(n: usize) -> String {
    let digits = n.to_string();
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result
}

/// Prints progress for each file to stdout
#[derive(Debug, Default)]
pub struct ConsoleReporter;

impl RunObserver for ConsoleReporter {
    fn on_discovered(&mut self, _root: &Path, count: usize) {
        println!("Found {} Swift files to process", format_number(count));
    }

    fn on_file(&mut self, report: &FileReport) {
        println!();
        println!("Processing: {}", report.relative.display());

        for insertion in &report.insertions {
            println!("  Added @available to: {}", insertion.declaration);
        }

        let count = report.insertions.len();
        match &report.outcome {
            FileOutcome::Modified => {
                println!("Modified {} - added {count} @available annotations", report.path.display());
            }
            FileOutcome::WouldModify => {
                println!("Would modify {} - {count} @available annotations", report.path.display());
            }
            FileOutcome::Unchanged => {
                println!("No changes needed for {}", report.path.display());
            }
            FileOutcome::Failed(err) => {
                println!("Error processing {}: {err}", report.path.display());
            }
        }
    }
}

/// Banner printed before the walk starts
pub fn print_banner(config: &RunConfig) {
    println!("Availability Annotator");
    println!("======================");
    println!();
    println!("Scanning for Swift files in: {}", config.selector.root.display());
    if !config.selector.exclude_patterns.is_empty() {
        println!("Excluding patterns: {:?}", config.selector.exclude_patterns);
    }
    if config.dry_run {
        println!("Mode: DRY RUN (no files will be modified)");
    } else {
        println!("Mode: APPLY ANNOTATIONS");
    }
    println!();
}

/// Lines of the closing summary
pub fn summary_lines(summary: &RunSummary) -> Vec<String> {
    let mut lines = vec![
        String::new(),
        "Summary".to_string(),
        "-------".to_string(),
        format!("Files scanned:        {}", format_number(summary.files_scanned)),
        format!("Files modified:       {}", format_number(summary.files_modified)),
        format!("Annotations added:    {}", format_number(summary.annotations_added)),
    ];
    if summary.failed_files > 0 {
        lines.push(format!("Files with errors:    {}", format_number(summary.failed_files)));
    }

    if summary.dry_run {
        lines.push(String::new());
        lines.push("Run without --dry-run to apply changes.".to_string());
    }
    lines
}

pub fn print_summary(summary: &RunSummary) {
    for line in summary_lines(summary) {
        println!("{line}");
    }
}

/// Machine-readable summary
pub fn print_json(summary: &RunSummary) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(summary)?);
    Ok(())
}
