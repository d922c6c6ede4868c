// Copyright (c) 2025 Brian G. Milnes
// SPDX-License-Identifier: MIT

//! Availability - Swift availability annotation tools
//!
//! Scans a directory tree for Swift sources and inserts
//! `@available(iOS V, macOS 12.0, tvOS V, watchOS 8.0, *)` above top-level
//! type, protocol, and extension declarations that lack one.

pub mod args;
pub mod config;
pub mod error;
pub mod logging;
pub mod patterns;
pub mod report;
pub mod runner;
pub mod selector;
pub mod transform;

// Re-export commonly used items
pub use args::AnnotateArgs;
pub use config::{AnnotationConfig, RunConfig, SelectorConfig};
pub use error::{AnnotateError, Result};
pub use patterns::{DeclarationKind, DeclarationMatcher};
pub use runner::{process_file, process_file_with, run, run_with, FileOutcome, FileReport, RunObserver, RunSummary};
pub use selector::{find_swift_files, SourceFiles};
pub use transform::{Insertion, LineTransformer, Transformation};
