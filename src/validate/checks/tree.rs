//! Checks over the filesystem rather than file content.

use crate::error::{HygieneError, HygieneResult};
use crate::selector::files_then_dirs;
use crate::validate::check::{CheckContext, CheckScope, HygieneCheck};
use crate::validate::report::{CheckId, ViolationRecord};
use std::path::PathBuf;
use walkdir::WalkDir;

/// No backup artifacts anywhere in the project, vendored code included.
///
/// The marker is matched as a substring of the file name, so `app.bak.old`
/// is caught as well as `app.cpp.bak`.
pub struct BackupArtifactCheck {
    marker: String,
    vcs_dirs: Vec<String>,
    title: String,
    noun: String,
}

impl BackupArtifactCheck {
    pub fn new(marker: &str, vcs_dirs: Vec<String>) -> Self {
        Self {
            title: format!("No {marker} files"),
            noun: format!("{marker} files found"),
            marker: marker.to_string(),
            vcs_dirs,
        }
    }

    fn is_vcs_dir(&self, name: &std::ffi::OsStr) -> bool {
        name.to_str()
            .is_some_and(|name| self.vcs_dirs.iter().any(|d| d == name))
    }
}

impl HygieneCheck for BackupArtifactCheck {
    fn id(&self) -> CheckId {
        CheckId::BackupFile
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn scope(&self) -> CheckScope {
        CheckScope::WholeTree
    }

    fn failure_noun(&self) -> &str {
        &self.noun
    }

    fn run(&self, context: &CheckContext<'_>) -> HygieneResult<Vec<ViolationRecord>> {
        let root = context.project_root();
        let walker = WalkDir::new(root)
            .follow_links(false)
            .sort_by(files_then_dirs)
            .into_iter()
            .filter_entry(|entry| !(entry.file_type().is_dir() && self.is_vcs_dir(entry.file_name())));

        let mut violations = vec![];
        for entry in walker {
            let entry = entry.map_err(|e| HygieneError::walk(root, e))?;
            if entry.file_type().is_dir() {
                continue;
            }
            if entry.file_name().to_string_lossy().contains(self.marker.as_str()) {
                let shown = context.display_path(entry.path());
                let description = format!("BAK FILE: {}", shown.display());
                violations.push(ViolationRecord::file(self.id(), shown, description));
            }
        }
        Ok(violations)
    }
}

/// Files that were scheduled for removal must actually be gone.
pub struct DeprecatedFileCheck {
    /// Relative to the source root.
    files: Vec<PathBuf>,
    title: String,
}

impl DeprecatedFileCheck {
    pub fn new(files: Vec<PathBuf>) -> Self {
        let names = files
            .iter()
            .map(|f| f.display().to_string())
            .collect::<Vec<_>>()
            .join(", ");
        Self {
            title: format!("{names} deleted"),
            files,
        }
    }
}

impl HygieneCheck for DeprecatedFileCheck {
    fn id(&self) -> CheckId {
        CheckId::DeprecatedFile
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn scope(&self) -> CheckScope {
        CheckScope::FixedPaths
    }

    fn failure_noun(&self) -> &str {
        "deprecated files still present"
    }

    fn run(&self, context: &CheckContext<'_>) -> HygieneResult<Vec<ViolationRecord>> {
        let mut violations = vec![];
        for relative in &self.files {
            let path = context.source_dir().join(relative);
            let exists = path.try_exists().map_err(|source| HygieneError::Stat {
                path: path.clone(),
                source,
            })?;
            if exists {
                let shown = context.display_path(&path);
                let description =
                    format!("{} still exists: {}", relative.display(), shown.display());
                violations.push(ViolationRecord::file(self.id(), shown, description));
            }
        }
        Ok(violations)
    }
}
