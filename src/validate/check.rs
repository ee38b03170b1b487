//! Check trait and registry

use crate::config::ProjectLayout;
use crate::error::HygieneResult;
use crate::validate::checks;
use crate::validate::report::{CheckId, ViolationRecord};
use crate::validate::rules::RuleSet;
use std::path::{Path, PathBuf};
use strum::Display;

/// Which files a check looks at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "kebab-case")]
pub enum CheckScope {
    /// The eligible (project-owned) file set.
    ProjectFiles,
    /// Every file under the project root, third-party code included.
    WholeTree,
    /// A fixed list of paths.
    FixedPaths,
}

/// Inputs shared by every check during one run.
#[derive(Debug, Clone, Copy)]
pub struct CheckContext<'a> {
    pub layout: &'a ProjectLayout,
    /// Eligible files under the source tree, in selection order.
    pub eligible: &'a [PathBuf],
}

impl<'a> CheckContext<'a> {
    pub fn new(layout: &'a ProjectLayout, eligible: &'a [PathBuf]) -> Self {
        Self { layout, eligible }
    }

    pub fn project_root(&self) -> &'a Path {
        &self.layout.project_root
    }

    pub fn source_dir(&self) -> &'a Path {
        &self.layout.source_dir
    }

    /// Path as it appears in violation records.
    pub fn display_path(&self, path: &Path) -> PathBuf {
        self.layout.relative_to_root(path).to_path_buf()
    }
}

/// A single release-readiness rule.
///
/// Checks are independent: each one inspects its own scope and returns all
/// of its violations, regardless of what other checks found.
pub trait HygieneCheck {
    fn id(&self) -> CheckId;

    /// Short description printed before the check runs.
    fn title(&self) -> &str;

    fn scope(&self) -> CheckScope;

    /// What a violation count is counting, e.g. "hardcoded paths found".
    fn failure_noun(&self) -> &str;

    fn run(&self, context: &CheckContext<'_>) -> HygieneResult<Vec<ViolationRecord>>;
}

/// Ordered collection of checks; run order is registration order.
#[derive(Default)]
pub struct CheckRegistry {
    checks: Vec<Box<dyn HygieneCheck>>,
}

impl CheckRegistry {
    pub fn new() -> Self {
        Self { checks: vec![] }
    }

    pub fn register(&mut self, check: Box<dyn HygieneCheck>) {
        self.checks.push(check);
    }

    pub fn get_all(&self) -> &[Box<dyn HygieneCheck>] {
        &self.checks
    }

    pub fn get_by_id(&self, id: CheckId) -> Option<&dyn HygieneCheck> {
        self.checks
            .iter()
            .find(|c| c.id() == id)
            .map(|c| &**c)
    }

    pub fn len(&self) -> usize {
        self.checks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }

    /// The standard six checks, configured from `rules`.
    pub fn from_rules(rules: &RuleSet) -> HygieneResult<Self> {
        checks::create_registry(rules)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct MockCheck;

    impl HygieneCheck for MockCheck {
        fn id(&self) -> CheckId {
            CheckId::DeprecatedFile
        }

        fn title(&self) -> &str {
            "mock"
        }

        fn scope(&self) -> CheckScope {
            CheckScope::FixedPaths
        }

        fn failure_noun(&self) -> &str {
            "mock failures"
        }

        fn run(&self, context: &CheckContext<'_>) -> HygieneResult<Vec<ViolationRecord>> {
            Ok(vec![ViolationRecord::file(
                self.id(),
                context.display_path(&context.source_dir().join("x.h")),
                "mock",
            )])
        }
    }

    #[test]
    fn registry_add_and_get() {
        let mut registry = CheckRegistry::new();
        assert!(registry.is_empty());
        registry.register(Box::new(MockCheck));
        assert_eq!(registry.len(), 1);
        assert!(registry.get_by_id(CheckId::DeprecatedFile).is_some());
        assert!(registry.get_by_id(CheckId::PragmaOnce).is_none());
    }

    #[test]
    fn context_paths_are_relative_to_project_root() {
        let layout = ProjectLayout::new("/proj", "/proj/Source");
        let context = CheckContext::new(&layout, &[]);
        let found = MockCheck.run(&context).unwrap();
        assert_eq!(found[0].path, PathBuf::from("Source/x.h"));
    }

    #[test]
    fn scope_names() {
        assert_eq!(CheckScope::WholeTree.to_string(), "whole-tree");
        assert_eq!(CheckScope::ProjectFiles.to_string(), "project-files");
    }
}
