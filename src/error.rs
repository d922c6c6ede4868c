// Copyright (c) 2025 Brian G. Milnes
// SPDX-License-Identifier: MIT

//! Error types for the annotator library

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while selecting, reading, or rewriting Swift files
#[derive(Debug, Error)]
pub enum AnnotateError {
    #[error("Directory not found: {}", .0.display())]
    RootNotFound(PathBuf),

    #[error("Not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("Invalid exclude pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("Invalid declaration rule '{pattern}': {source}")]
    InvalidRule {
        pattern: &'static str,
        #[source]
        source: regex::Error,
    },

    /// Read failure, including content that is not valid UTF-8
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, AnnotateError>;
