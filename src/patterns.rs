// Copyright (c) 2025 Brian G. Milnes
// SPDX-License-Identifier: MIT

//! Declaration header rules
//!
//! Each rule is an anchored regex over a trimmed line that recognizes the
//! header of one kind of top-level Swift declaration. Rules are tried in
//! table order and the first match wins. Modifier combinations that no rule
//! covers (e.g. `public final class`, `open class`) are left alone.

use crate::error::{AnnotateError, Result};
use regex::Regex;
use std::fmt;

/// The declaration kind a rule recognizes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeclarationKind {
    Struct,
    Enum,
    /// `enum` preceded by one or two custom attributes (e.g. `@resultBuilder`)
    AttributedEnum,
    Class,
    /// `class` preceded by a custom attribute (e.g. `@MainActor`)
    AttributedClass,
    Actor,
    Protocol,
    Extension,
}

impl DeclarationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeclarationKind::Struct => "struct",
            DeclarationKind::Enum => "enum",
            DeclarationKind::AttributedEnum => "attributed enum",
            DeclarationKind::Class => "class",
            DeclarationKind::AttributedClass => "attributed class",
            DeclarationKind::Actor => "actor",
            DeclarationKind::Protocol => "protocol",
            DeclarationKind::Extension => "extension",
        }
    }
}

impl fmt::Display for DeclarationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry of the rule table
#[derive(Debug, Clone, Copy)]
pub struct DeclarationRule {
    pub kind: DeclarationKind,
    pub pattern: &'static str,
}

const fn rule(kind: DeclarationKind, pattern: &'static str) -> DeclarationRule {
    DeclarationRule { kind, pattern }
}

/// Rules in priority order
pub const DECLARATION_RULES: &[DeclarationRule] = &[
    rule(DeclarationKind::Struct, r"^public\s+struct\s+"),
    rule(DeclarationKind::Struct, r"^private\s+struct\s+"),
    rule(DeclarationKind::Struct, r"^internal\s+struct\s+"),
    rule(DeclarationKind::Struct, r"^struct\s+"),
    rule(DeclarationKind::Struct, r"^@frozen\s+public\s+struct\s+"),
    rule(DeclarationKind::Struct, r"^@frozen\s+struct\s+"),
    rule(DeclarationKind::Enum, r"^public\s+enum\s+"),
    rule(DeclarationKind::Enum, r"^private\s+enum\s+"),
    rule(DeclarationKind::Enum, r"^internal\s+enum\s+"),
    rule(DeclarationKind::Enum, r"^enum\s+"),
    rule(DeclarationKind::Enum, r"^@frozen\s+public\s+enum\s+"),
    rule(DeclarationKind::Enum, r"^@frozen\s+enum\s+"),
    rule(DeclarationKind::AttributedEnum, r"^@\w+\s+public\s+enum\s+"),
    rule(DeclarationKind::AttributedEnum, r"^@\w+\s+enum\s+"),
    rule(DeclarationKind::AttributedEnum, r"^@\w+\s+@\w+\s+public\s+enum\s+"),
    rule(DeclarationKind::AttributedEnum, r"^@\w+\s+@\w+\s+enum\s+"),
    rule(DeclarationKind::Class, r"^public\s+class\s+"),
    rule(DeclarationKind::Class, r"^private\s+class\s+"),
    rule(DeclarationKind::Class, r"^internal\s+class\s+"),
    rule(DeclarationKind::Class, r"^class\s+"),
    rule(DeclarationKind::Class, r"^final\s+public\s+class\s+"),
    rule(DeclarationKind::Class, r"^final\s+class\s+"),
    rule(DeclarationKind::AttributedClass, r"^@\w+\s+public\s+class\s+"),
    rule(DeclarationKind::AttributedClass, r"^@\w+\s+class\s+"),
    rule(DeclarationKind::Actor, r"^public\s+actor\s+"),
    rule(DeclarationKind::Actor, r"^private\s+actor\s+"),
    rule(DeclarationKind::Actor, r"^internal\s+actor\s+"),
    rule(DeclarationKind::Actor, r"^actor\s+"),
    rule(DeclarationKind::Protocol, r"^public\s+protocol\s+"),
    rule(DeclarationKind::Protocol, r"^private\s+protocol\s+"),
    rule(DeclarationKind::Protocol, r"^internal\s+protocol\s+"),
    rule(DeclarationKind::Protocol, r"^protocol\s+"),
    rule(DeclarationKind::Extension, r"^public\s+extension\s+"),
    rule(DeclarationKind::Extension, r"^private\s+extension\s+"),
    rule(DeclarationKind::Extension, r"^internal\s+extension\s+"),
    rule(DeclarationKind::Extension, r"^extension\s+"),
];

/// `extension Foo: Bar` anywhere in the line: a single unqualified conformance
const SIMPLE_CONFORMANCE: &str = r"extension\s+\w+\s*:\s*\w+";

/// Compiled rule table plus the extension conformance check
#[derive(Debug, Clone)]
pub struct DeclarationMatcher {
    rules: Vec<(DeclarationKind, Regex)>,
    simple_conformance: Regex,
}

impl DeclarationMatcher {
    /// Compile [`DECLARATION_RULES`]
    pub fn new() -> Result<Self> {
        let rules = DECLARATION_RULES
            .iter()
            .map(|r| compile(r.pattern).map(|re| (r.kind, re)))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            rules,
            simple_conformance: compile(SIMPLE_CONFORMANCE)?,
        })
    }

    /// Kind of the first rule matching an already-trimmed line
    pub fn match_kind(&self, trimmed: &str) -> Option<DeclarationKind> {
        self.rules
            .iter()
            .find(|(_, re)| re.is_match(trimmed))
            .map(|(kind, _)| *kind)
    }

    /// True for extensions that only add a simple protocol conformance
    pub fn is_simple_conformance(&self, trimmed: &str) -> bool {
        trimmed.contains("extension")
            && trimmed.contains(':')
            && self.simple_conformance.is_match(trimmed)
    }
}

fn compile(pattern: &'static str) -> Result<Regex> {
    Regex::new(pattern).map_err(|source| AnnotateError::InvalidRule { pattern, source })
}
