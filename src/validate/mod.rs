//! Release-readiness validation
//!
//! A [`Validator`] selects the eligible files once, runs every registered
//! check in order without short-circuiting, prints a PASS/FAIL line per check
//! and returns the aggregated [`ValidationReport`].

pub mod check;
pub mod checks;
pub mod report;
pub mod rules;

pub use check::{CheckContext, CheckRegistry, CheckScope, HygieneCheck};
pub use report::{CheckId, CheckResult, ValidationReport, Verdict, ViolationRecord};
pub use rules::RuleSet;

use crate::config::ProjectLayout;
use crate::error::{HygieneError, HygieneResult};
use crate::profile::ProjectProfile;
use crate::selector::FileSelector;
use std::io::Write;

pub struct Validator {
    layout: ProjectLayout,
    selector: FileSelector,
    registry: CheckRegistry,
    title: String,
}

impl Validator {
    pub fn new(layout: ProjectLayout, profile: &ProjectProfile) -> HygieneResult<Self> {
        let registry = CheckRegistry::from_rules(&profile.rules)?;
        Ok(Self::with_registry(
            layout,
            FileSelector::new(profile.exclusions.clone()),
            registry,
            format!("{} Codebase Validation", profile.name),
        ))
    }

    pub fn with_registry(
        layout: ProjectLayout,
        selector: FileSelector,
        registry: CheckRegistry,
        title: impl Into<String>,
    ) -> Self {
        Self {
            layout,
            selector,
            registry,
            title: title.into(),
        }
    }

    /// Run every check and write the console report to `out`.
    ///
    /// Only I/O failures are returned as errors; rule breaches end up in the
    /// report.
    pub fn run(&self, out: &mut dyn Write) -> HygieneResult<ValidationReport> {
        let source_dir = &self.layout.source_dir;
        if !source_dir.is_dir() {
            return Err(HygieneError::MissingSourceDir(source_dir.clone()));
        }

        ValidationReport::write_banner(&self.title, out)?;

        let eligible = self.selector.select(source_dir)?;
        tracing::info!(
            source_dir = %source_dir.display(),
            eligible = eligible.len(),
            checks = self.registry.len(),
            "starting validation"
        );
        let context = CheckContext::new(&self.layout, &eligible);

        let mut report = ValidationReport::new();
        for (index, check) in self.registry.get_all().iter().enumerate() {
            writeln!(out, "Check {}: {}...", index + 1, check.title())?;
            let violations = check.run(&context)?;
            let result = report.record(check.id(), violations);
            tracing::info!(
                check = %check.id(),
                scope = %check.scope(),
                violations = result.violations,
                "check finished"
            );
            if result.passed() {
                writeln!(out, "  PASS")?;
            } else {
                writeln!(
                    out,
                    "  FAIL ({} {})",
                    result.violations,
                    check.failure_noun()
                )?;
            }
        }

        report.write_summary(out)?;
        Ok(report)
    }
}
