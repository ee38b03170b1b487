//! Checks over the content of eligible project files.

use crate::error::HygieneResult;
use crate::text::{head_chars, normalize_newlines, read_lossy};
use crate::validate::check::{CheckContext, CheckScope, HygieneCheck};
use crate::validate::report::{CheckId, ViolationRecord};
use regex::Regex;
use std::path::Path;

/// Run `is_violation` over every line of every eligible file.
///
/// `\r\n`, `\r` and `\n` all end a line.
fn scan_lines(
    context: &CheckContext<'_>,
    check: CheckId,
    label: &str,
    is_violation: impl Fn(&str) -> bool,
) -> HygieneResult<Vec<ViolationRecord>> {
    let mut violations = vec![];
    for path in context.eligible {
        let content = read_lossy(path)?;
        let shown = context.display_path(path);
        for (index, line) in normalize_newlines(&content).lines().enumerate() {
            if is_violation(line) {
                let number = index + 1;
                let description = format!("{label}: {}:{number}: {}", shown.display(), line.trim());
                violations.push(ViolationRecord::line(check, shown.clone(), number, description));
            }
        }
    }
    Ok(violations)
}

/// Every project header must carry the include-guard marker.
pub struct IncludeGuardCheck {
    marker: String,
    suffixes: Vec<String>,
    title: String,
    noun: String,
}

impl IncludeGuardCheck {
    pub fn new(marker: &str, suffixes: Vec<String>) -> Self {
        Self {
            title: format!("{marker} in all project {} files", suffixes.join("/")),
            noun: format!("files missing {marker}"),
            marker: marker.to_string(),
            suffixes,
        }
    }

    fn applies_to(&self, path: &Path) -> bool {
        path.file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|name| self.suffixes.iter().any(|s| name.ends_with(s.as_str())))
    }
}

impl HygieneCheck for IncludeGuardCheck {
    fn id(&self) -> CheckId {
        CheckId::PragmaOnce
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn scope(&self) -> CheckScope {
        CheckScope::ProjectFiles
    }

    fn failure_noun(&self) -> &str {
        &self.noun
    }

    fn run(&self, context: &CheckContext<'_>) -> HygieneResult<Vec<ViolationRecord>> {
        let mut violations = vec![];
        for path in context.eligible.iter().filter(|p| self.applies_to(p)) {
            let content = read_lossy(path)?;
            if !content.contains(&self.marker) {
                let shown = context.display_path(path);
                let description = format!("MISSING {}: {}", self.marker, shown.display());
                violations.push(ViolationRecord::file(self.id(), shown, description));
            }
        }
        Ok(violations)
    }
}

/// No line may contain an absolute path into someone's home directory.
pub struct HardcodedPathCheck {
    fragments: Vec<String>,
    title: String,
}

impl HardcodedPathCheck {
    pub fn new(fragments: Vec<String>) -> Self {
        Self {
            title: format!("No hardcoded {} paths", fragments.join(", ")),
            fragments,
        }
    }
}

impl HygieneCheck for HardcodedPathCheck {
    fn id(&self) -> CheckId {
        CheckId::HardcodedPath
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn scope(&self) -> CheckScope {
        CheckScope::ProjectFiles
    }

    fn failure_noun(&self) -> &str {
        "hardcoded paths found"
    }

    fn run(&self, context: &CheckContext<'_>) -> HygieneResult<Vec<ViolationRecord>> {
        scan_lines(context, self.id(), "HARDCODED PATH", |line| {
            self.fragments.iter().any(|f| line.contains(f.as_str()))
        })
    }
}

/// The ownership line must appear near the top of every project file.
pub struct CopyrightHeaderCheck {
    expected: String,
    window: usize,
}

impl CopyrightHeaderCheck {
    pub fn new(expected: &str, window: usize) -> Self {
        Self {
            expected: expected.to_string(),
            window,
        }
    }
}

impl HygieneCheck for CopyrightHeaderCheck {
    fn id(&self) -> CheckId {
        CheckId::CopyrightHeader
    }

    fn title(&self) -> &str {
        "Correct copyright header on all project files"
    }

    fn scope(&self) -> CheckScope {
        CheckScope::ProjectFiles
    }

    fn failure_noun(&self) -> &str {
        "files missing correct copyright"
    }

    fn run(&self, context: &CheckContext<'_>) -> HygieneResult<Vec<ViolationRecord>> {
        let mut violations = vec![];
        for path in context.eligible {
            let content = read_lossy(path)?;
            let content = normalize_newlines(&content);
            if !head_chars(&content, self.window).contains(&self.expected) {
                let shown = context.display_path(path);
                let description = format!("MISSING COPYRIGHT: {}", shown.display());
                violations.push(ViolationRecord::file(self.id(), shown, description));
            }
        }
        Ok(violations)
    }
}

/// `Author:` lines naming former contributors must be gone.
pub struct StaleAuthorCheck {
    pattern: Option<Regex>,
}

impl StaleAuthorCheck {
    /// `pattern` is the source form of `authors`; an empty author list never matches.
    pub fn new(authors: &[String], pattern: &str) -> HygieneResult<Self> {
        let pattern = if authors.is_empty() {
            None
        } else {
            Some(Regex::new(pattern)?)
        };
        Ok(Self { pattern })
    }
}

impl HygieneCheck for StaleAuthorCheck {
    fn id(&self) -> CheckId {
        CheckId::StaleAuthor
    }

    fn title(&self) -> &str {
        "No old author attributions in project files"
    }

    fn scope(&self) -> CheckScope {
        CheckScope::ProjectFiles
    }

    fn failure_noun(&self) -> &str {
        "old author references found"
    }

    fn run(&self, context: &CheckContext<'_>) -> HygieneResult<Vec<ViolationRecord>> {
        let Some(pattern) = &self.pattern else {
            return Ok(vec![]);
        };
        scan_lines(context, self.id(), "OLD AUTHOR", |line| pattern.is_match(line))
    }
}
