//! Replace file headers in project-owned source files with the standard
//! copyright header.
//!
//! Usage:
//!   cargo run --bin replace_headers
//!   cargo run --bin replace_headers -- --root /path/to/project

use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, Write};
use std::process::ExitCode;
use tss_hygiene::{
    HeaderRewriter, LoggingConfig, ProjectLayout, ProjectProfile, ReplaceHeadersArgs, init_logging,
};

fn main() -> Result<ExitCode> {
    let _guard = init_logging(LoggingConfig::from_env())?;

    let args = ReplaceHeadersArgs::parse();
    let layout = ProjectLayout::from_args(&args.project)?;
    let rewriter = HeaderRewriter::new(&ProjectProfile::sound_studio());

    let stdout = io::stdout();
    let mut out = stdout.lock();
    rewriter
        .run(&layout, &mut out)
        .context("header rewrite aborted")?;
    out.flush()?;

    Ok(ExitCode::SUCCESS)
}
