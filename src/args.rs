// Copyright (c) 2025 Brian G. Milnes
// SPDX-License-Identifier: MIT

//! Command line arguments for availability-annotate

use crate::config::{AnnotationConfig, RunConfig, SelectorConfig, DEFAULT_IOS_VERSION};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(name = "availability-annotate")]
#[command(about = "Add @available(iOS 15.0, *) annotations to Swift declarations")]
pub struct AnnotateArgs {
    /// Directory containing Swift files to process
    pub directory: PathBuf,

    /// iOS version for availability annotation (also used for tvOS)
    #[arg(long, default_value = DEFAULT_IOS_VERSION)]
    pub ios_version: String,

    /// Show what would be changed without making actual changes
    #[arg(long)]
    pub dry_run: bool,

    /// Exclude files matching this pattern (can be used multiple times)
    #[arg(long, value_name = "PATTERN")]
    pub exclude: Vec<String>,

    /// Include test files (excluded by default)
    #[arg(long)]
    pub include_tests: bool,

    /// Debug-level diagnostics on stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Print the run summary as JSON
    #[arg(long)]
    pub json: bool,
}

impl AnnotateArgs {
    /// User patterns first, then the default test exclusions unless disabled
    pub fn selector_config(&self) -> SelectorConfig {
        let selector = SelectorConfig::new(&self.directory).with_excludes(self.exclude.iter().cloned());
        if self.include_tests {
            selector
        } else {
            selector.with_default_test_excludes()
        }
    }

    pub fn run_config(&self) -> RunConfig {
        RunConfig {
            selector: self.selector_config(),
            annotation: AnnotationConfig::for_ios(self.ios_version.clone()),
            dry_run: self.dry_run,
        }
    }
}
