// Copyright (c) 2025 Brian G. Milnes
// SPDX-License-Identifier: MIT

//! Add @available annotations to Swift declarations
//!
//! Converts a codebase from a single minimum iOS target to per-declaration
//! availability markup.
//!
//! Usage:
//!   availability-annotate Sources/                       # Annotate in place
//!   availability-annotate Sources/ --dry-run             # Show what would change
//!   availability-annotate Sources/ --ios-version 16.0
//!   availability-annotate Sources/ --exclude 'Generated/**' --include-tests
//!
//! Binary: availability-annotate

use anyhow::{Context, Result};
use availability::logging::init_logging;
use availability::report::{print_banner, print_json, print_summary, ConsoleReporter};
use availability::{run, AnnotateArgs};
use clap::Parser;

fn main() -> Result<()> {
    let args = AnnotateArgs::parse();
    init_logging(args.verbose);

    let config = args.run_config();
    print_banner(&config);

    let summary = run(&config, &mut ConsoleReporter)
        .with_context(|| format!("Failed to annotate {}", config.selector.root.display()))?;

    print_summary(&summary);
    if args.json {
        print_json(&summary)?;
    }

    Ok(())
}
