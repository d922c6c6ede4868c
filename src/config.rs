// Copyright (c) 2025 Brian G. Milnes
// SPDX-License-Identifier: MIT

//! Run configuration: annotation versions and file selection rules

use std::path::PathBuf;

/// File name suffix of the sources we rewrite
pub const SOURCE_SUFFIX: &str = ".swift";

/// Build-artifact directories never descended into
pub const PRUNED_DIR_NAMES: &[&str] = &["build", "DerivedData"];

/// Test files and directories skipped unless --include-tests is given
pub const DEFAULT_TEST_EXCLUDES: &[&str] = &["*Test*.swift", "**/Tests/**", "**/test/**"];

pub const DEFAULT_IOS_VERSION: &str = "15.0";
pub const MACOS_VERSION: &str = "12.0";
pub const WATCHOS_VERSION: &str = "8.0";

/// Versions written into each inserted `@available(...)` line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotationConfig {
    /// Used for both the iOS and tvOS slots
    pub ios_version: String,
    pub macos_version: String,
    pub watchos_version: String,
}

impl Default for AnnotationConfig {
    fn default() -> Self {
        Self::for_ios(DEFAULT_IOS_VERSION)
    }
}

impl AnnotationConfig {
    /// Configuration for a given iOS version with the fixed companion versions
    pub fn for_ios(ios_version: impl Into<String>) -> Self {
        Self {
            ios_version: ios_version.into(),
            macos_version: MACOS_VERSION.to_string(),
            watchos_version: WATCHOS_VERSION.to_string(),
        }
    }

    /// The annotation text without indentation
    pub fn marker(&self) -> String {
        format!(
            "@available(iOS {ios}, macOS {macos}, tvOS {ios}, watchOS {watch}, *)",
            ios = self.ios_version,
            macos = self.macos_version,
            watch = self.watchos_version,
        )
    }
}

/// Where to look for files and which ones to leave alone
#[derive(Debug, Clone)]
pub struct SelectorConfig {
    pub root: PathBuf,
    pub exclude_patterns: Vec<String>,
}

impl SelectorConfig {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            exclude_patterns: Vec::new(),
        }
    }

    pub fn with_excludes<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude_patterns.extend(patterns.into_iter().map(Into::into));
        self
    }

    /// Append the default test-file exclusions
    pub fn with_default_test_excludes(self) -> Self {
        self.with_excludes(DEFAULT_TEST_EXCLUDES.iter().copied())
    }
}

/// Everything a run needs besides the file system
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub selector: SelectorConfig,
    pub annotation: AnnotationConfig,
    /// Scan and decide but never write
    pub dry_run: bool,
}
