//! Violation records and the run-level aggregate.

use std::fmt;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use strum::{AsRefStr, Display, EnumIter};

const RULE_WIDTH: usize = 60;

/// Stable identifier for each release-readiness check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, AsRefStr, EnumIter)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum CheckId {
    PragmaOnce,
    HardcodedPath,
    CopyrightHeader,
    BackupFile,
    DeprecatedFile,
    StaleAuthor,
}

/// One breach of one check. Never mutated once recorded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViolationRecord {
    pub check: CheckId,
    /// Offending path, relative to the project root where possible.
    pub path: PathBuf,
    /// 1-based line number for line-oriented checks.
    pub line: Option<usize>,
    pub description: String,
}

impl ViolationRecord {
    pub fn file(check: CheckId, path: impl Into<PathBuf>, description: impl Into<String>) -> Self {
        Self {
            check,
            path: path.into(),
            line: None,
            description: description.into(),
        }
    }

    pub fn line(
        check: CheckId,
        path: impl Into<PathBuf>,
        line: usize,
        description: impl Into<String>,
    ) -> Self {
        Self {
            check,
            path: path.into(),
            line: Some(line),
            description: description.into(),
        }
    }
}

impl fmt::Display for ViolationRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.description)
    }
}

/// Outcome of a single check over its scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckResult {
    pub check: CheckId,
    pub violations: usize,
}

impl CheckResult {
    pub fn passed(&self) -> bool {
        self.violations == 0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Passed,
    Failed,
}

/// Every check result and every violation of one run, in the order they happened.
#[derive(Debug, Clone, Default)]
pub struct ValidationReport {
    results: Vec<CheckResult>,
    violations: Vec<ViolationRecord>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a check's violations and return its summary.
    pub fn record(&mut self, check: CheckId, violations: Vec<ViolationRecord>) -> CheckResult {
        let result = CheckResult {
            check,
            violations: violations.len(),
        };
        self.results.push(result);
        self.violations.extend(violations);
        result
    }

    pub fn results(&self) -> &[CheckResult] {
        &self.results
    }

    pub fn violations(&self) -> &[ViolationRecord] {
        &self.violations
    }

    pub fn violations_for(&self, check: CheckId) -> impl Iterator<Item = &ViolationRecord> {
        self.violations.iter().filter(move |v| v.check == check)
    }

    pub fn verdict(&self) -> Verdict {
        if self.violations.is_empty() {
            Verdict::Passed
        } else {
            Verdict::Failed
        }
    }

    pub fn passed(&self) -> bool {
        self.verdict() == Verdict::Passed
    }

    pub fn exit_code(&self) -> ExitCode {
        match self.verdict() {
            Verdict::Passed => ExitCode::SUCCESS,
            Verdict::Failed => ExitCode::FAILURE,
        }
    }

    /// Closing section of the console report: the verdict and every violation.
    pub fn write_summary(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out)?;
        writeln!(out, "{}", "=".repeat(RULE_WIDTH))?;
        match self.verdict() {
            Verdict::Passed => writeln!(out, "ALL CHECKS PASSED")?,
            Verdict::Failed => {
                writeln!(
                    out,
                    "VALIDATION FAILED - {} issue(s) found:",
                    self.violations.len()
                )?;
                writeln!(out)?;
                for violation in &self.violations {
                    writeln!(out, "  {violation}")?;
                }
            }
        }
        Ok(())
    }

    pub(crate) fn write_banner(title: &str, out: &mut dyn Write) -> io::Result<()> {
        let rule = "=".repeat(RULE_WIDTH);
        writeln!(out, "{rule}")?;
        writeln!(out, "{title}")?;
        writeln!(out, "{rule}")?;
        writeln!(out)
    }
}
