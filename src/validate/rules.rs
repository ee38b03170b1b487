//! Immutable rule data for the release-readiness checks.

use std::path::PathBuf;

/// Everything the validator checks for, fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleSet {
    /// Text every header file must contain somewhere.
    pub include_guard_marker: String,
    /// Name suffixes of files that need the include guard.
    pub header_suffixes: Vec<String>,
    /// Absolute path fragments that must not appear on any line.
    pub hardcoded_path_fragments: Vec<String>,
    /// Ownership line expected near the top of every project file.
    pub expected_copyright: String,
    /// How many leading characters are searched for `expected_copyright`.
    pub copyright_window: usize,
    /// Substring that marks a file name as a backup artifact.
    pub backup_marker: String,
    /// Directory names skipped by the whole-tree backup scan.
    pub vcs_dirs: Vec<String>,
    /// Paths relative to the source root that must not exist.
    pub forbidden_files: Vec<PathBuf>,
    /// Former authors whose `Author:` attributions must be gone.
    pub former_authors: Vec<String>,
}

impl RuleSet {
    pub fn sound_studio(expected_copyright: impl Into<String>) -> Self {
        Self {
            include_guard_marker: "#pragma once".to_string(),
            header_suffixes: vec![".h".to_string()],
            hardcoded_path_fragments: vec!["/Users/".to_string()],
            expected_copyright: expected_copyright.into(),
            copyright_window: 500,
            backup_marker: ".bak".to_string(),
            vcs_dirs: vec![".git".to_string(), ".hg".to_string(), ".svn".to_string()],
            forbidden_files: vec![PathBuf::from("notes.h")],
            former_authors: vec!["Gary Jones".to_string(), "Akash Murthy".to_string()],
        }
    }

    /// Replace the forbidden-file list, keeping the default when `files` is empty.
    pub fn with_forbidden_files(mut self, files: Vec<PathBuf>) -> Self {
        if !files.is_empty() {
            self.forbidden_files = files;
        }
        self
    }

    /// Case-insensitive pattern source matching an attribution to any former author.
    pub fn stale_author_pattern(&self) -> String {
        let names = self
            .former_authors
            .iter()
            .map(|name| regex::escape(name))
            .collect::<Vec<_>>()
            .join("|");
        format!(r"(?i)Author:\s*({names})")
    }
}
