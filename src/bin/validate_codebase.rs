//! Validate the source tree for release readiness.
//!
//! Exits with status 1 when any check reports a violation.
//!
//! Usage:
//!   cargo run --bin validate_codebase
//!   cargo run --bin validate_codebase -- --forbidden-file notes.h,scratch.h

use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, Write};
use std::process::ExitCode;
use tss_hygiene::{
    LoggingConfig, ProjectLayout, ProjectProfile, ValidateArgs, Validator, init_logging,
};

fn main() -> Result<ExitCode> {
    let _guard = init_logging(LoggingConfig::from_env())?;

    let args = ValidateArgs::parse();
    let layout = ProjectLayout::from_args(&args.project)?;

    let profile = ProjectProfile::sound_studio();
    let rules = profile.rules.clone().with_forbidden_files(args.forbidden_files);
    let profile = profile.with_rules(rules);
    let validator = Validator::new(layout, &profile).context("invalid rule set")?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let report = validator.run(&mut out).context("validation aborted")?;
    out.flush()?;

    Ok(report.exit_code())
}
