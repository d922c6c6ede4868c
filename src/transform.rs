// Copyright (c) 2025 Brian G. Milnes
// SPDX-License-Identifier: MIT

//! Line transformer: insert `@available` above qualifying declarations
//!
//! A single forward pass over the lines of one file. Lookback for an
//! existing annotation always reads the original input lines, never the
//! output being built, so freshly inserted annotations are not mistaken
//! for pre-existing ones.

use crate::config::AnnotationConfig;
use crate::error::Result;
use crate::patterns::{DeclarationKind, DeclarationMatcher};
use tracing::debug;

/// Prefix marking a line that already carries an availability annotation
const AVAILABLE_PREFIX: &str = "@available";

/// A declaration that received an annotation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Insertion {
    /// 1-based line number in the input
    pub line_num: usize,
    pub kind: DeclarationKind,
    /// The declaration line, trimmed
    pub declaration: String,
}

/// Result of transforming one file's text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transformation {
    pub text: String,
    pub insertions: Vec<Insertion>,
}

impl Transformation {
    pub fn insertion_count(&self) -> usize {
        self.insertions.len()
    }

    pub fn changed(&self) -> bool {
        !self.insertions.is_empty()
    }
}

/// Why a matched declaration was left alone
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Skip {
    AlreadyAnnotated,
    Indented,
    SimpleConformance,
}

/// Pure text transformer; holds the compiled rules and the versions to write
#[derive(Debug, Clone)]
pub struct LineTransformer {
    matcher: DeclarationMatcher,
    marker: String,
}

impl LineTransformer {
    pub fn new(config: &AnnotationConfig) -> Result<Self> {
        Ok(Self {
            matcher: DeclarationMatcher::new()?,
            marker: config.marker(),
        })
    }

    /// Transform a whole file's text
    pub fn transform(&self, text: &str) -> Transformation {
        let lines: Vec<&str> = text.split('\n').collect();
        let mut output: Vec<String> = Vec::with_capacity(lines.len());
        let mut insertions = Vec::new();

        for (i, line) in lines.iter().enumerate() {
            let trimmed = line.trim();
            let Some(kind) = self.matcher.match_kind(trimmed) else {
                output.push(line.to_string());
                continue;
            };

            let previous = if i > 0 { Some(lines[i - 1]) } else { None };
            match self.qualify(kind, line, previous) {
                Ok(()) => {
                    output.push(self.annotation_for(line));
                    output.push(line.to_string());
                    insertions.push(Insertion {
                        line_num: i + 1,
                        kind,
                        declaration: trimmed.to_string(),
                    });
                }
                Err(skip) => {
                    debug!(line = i + 1, %kind, ?skip, "skipping declaration: {trimmed}");
                    output.push(line.to_string());
                }
            }
        }

        Transformation {
            text: output.join("\n"),
            insertions,
        }
    }

    /// Qualification predicate for a line that matched a declaration rule
    pub fn qualify(&self, kind: DeclarationKind, line: &str, previous: Option<&str>) -> std::result::Result<(), Skip> {
        if previous.is_some_and(|prev| prev.trim().starts_with(AVAILABLE_PREFIX)) {
            return Err(Skip::AlreadyAnnotated);
        }

        if indent_width(line) > 0 {
            return Err(Skip::Indented);
        }

        if kind == DeclarationKind::Extension && self.matcher.is_simple_conformance(line.trim()) {
            return Err(Skip::SimpleConformance);
        }

        Ok(())
    }

    /// Annotation line for a declaration: same indent, same line terminator
    pub fn annotation_for(&self, line: &str) -> String {
        let indent = leading_whitespace(line);
        let cr = if line.ends_with('\r') { "\r" } else { "" };
        format!("{indent}{}{cr}", self.marker)
    }
}

/// Extract leading whitespace from a line
pub fn leading_whitespace(line: &str) -> &str {
    let start = line.len() - line.trim_start().len();
    &line[..start]
}

/// Number of leading whitespace characters
pub fn indent_width(line: &str) -> usize {
    leading_whitespace(line).chars().count()
}
