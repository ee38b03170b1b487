//! Deterministic enumeration of project-owned source files.

use crate::error::{HygieneError, HygieneResult};
use crate::policy::ExclusionPolicy;
use std::cmp::Ordering;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// Suffixes of the files both tools operate on.
pub const DEFAULT_EXTENSIONS: &[&str] = &[".h", ".cpp"];

/// Within one directory: files before subdirectories, each group by name.
pub(crate) fn files_then_dirs(a: &DirEntry, b: &DirEntry) -> Ordering {
    a.file_type()
        .is_dir()
        .cmp(&b.file_type().is_dir())
        .then_with(|| a.file_name().cmp(b.file_name()))
}

/// Walks a source root and yields the eligible files in a stable order.
#[derive(Debug, Clone)]
pub struct FileSelector {
    extensions: Vec<String>,
    policy: ExclusionPolicy,
}

impl FileSelector {
    pub fn new(policy: ExclusionPolicy) -> Self {
        Self::with_extensions(policy, DEFAULT_EXTENSIONS.iter().copied())
    }

    /// `extensions` are plain name suffixes including the dot, e.g. `".h"`.
    pub fn with_extensions<I>(policy: ExclusionPolicy, extensions: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Self {
            extensions: extensions.into_iter().map(Into::into).collect(),
            policy,
        }
    }

    fn has_allowed_extension(&self, name: &str) -> bool {
        self.extensions.iter().any(|ext| name.ends_with(ext.as_str()))
    }

    /// Collect every eligible file under `root`.
    ///
    /// Excluded top-level directories are pruned before descent. Any
    /// traversal error aborts the whole selection.
    pub fn select(&self, root: &Path) -> HygieneResult<Vec<PathBuf>> {
        let walker = WalkDir::new(root)
            .follow_links(false)
            .sort_by(files_then_dirs)
            .into_iter()
            .filter_entry(|entry| {
                !(entry.depth() == 1
                    && entry.file_type().is_dir()
                    && self.policy.excludes_top_level_dir(entry.file_name()))
            });

        let mut selected = Vec::new();
        for entry in walker {
            let entry = entry.map_err(|e| HygieneError::walk(root, e))?;
            if !is_regular_file(&entry) {
                continue;
            }

            let Some(name) = entry.file_name().to_str() else {
                tracing::debug!(path = %entry.path().display(), "skipping non UTF-8 file name");
                continue;
            };
            if !self.has_allowed_extension(name) {
                continue;
            }
            let relative = entry.path().strip_prefix(root).unwrap_or(entry.path());
            if !self.policy.is_project_owned(relative) {
                tracing::debug!(path = %entry.path().display(), "excluded by policy");
                continue;
            }

            selected.push(entry.into_path());
        }

        tracing::debug!(root = %root.display(), count = selected.len(), "selected eligible files");
        Ok(selected)
    }
}

/// Regular files, and symlinks that resolve to one. Directory symlinks are
/// never descended into.
fn is_regular_file(entry: &DirEntry) -> bool {
    if entry.file_type().is_file() {
        return true;
    }
    if !entry.path_is_symlink() {
        return false;
    }
    match fs::metadata(entry.path()) {
        Ok(meta) => meta.is_file(),
        Err(err) => {
            tracing::debug!(path = %entry.path().display(), error = %err, "skipping dangling symlink");
            false
        }
    }
}

impl Default for FileSelector {
    fn default() -> Self {
        Self::new(ExclusionPolicy::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn touch(root: &Path, relative: &str) {
        let path = root.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "").unwrap();
    }

    fn relative(root: &Path, files: &[PathBuf]) -> Vec<String> {
        files
            .iter()
            .map(|p| p.strip_prefix(root).unwrap().to_string_lossy().replace('\\', "/"))
            .collect()
    }

    #[test]
    fn files_come_before_subdirectories() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "b.cpp");
        touch(dir.path(), "a/z.h");
        touch(dir.path(), "c.h");
        touch(dir.path(), "a/y.cpp");

        let files = FileSelector::default().select(dir.path()).unwrap();
        assert_eq!(relative(dir.path(), &files), vec!["b.cpp", "c.h", "a/y.cpp", "a/z.h"]);
    }

    #[test]
    fn only_allowed_suffixes_are_selected() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "Main.cpp");
        touch(dir.path(), "Main.hpp");
        touch(dir.path(), "notes.txt");
        touch(dir.path(), "Header.H");

        let files = FileSelector::default().select(dir.path()).unwrap();
        assert_eq!(relative(dir.path(), &files), vec!["Main.cpp"]);
    }

    #[test]
    fn excluded_directory_is_pruned_only_at_top_level() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "hiir/Downsampler2x.h");
        touch(dir.path(), "hiir/deep/Polyphase.cpp");
        touch(dir.path(), "hiir.h");
        touch(dir.path(), "Audio/hiir/F.h");
        touch(dir.path(), "utilities/Util.cpp");

        let files = FileSelector::default().select(dir.path()).unwrap();
        assert_eq!(relative(dir.path(), &files), vec!["hiir.h", "Audio/hiir/F.h"]);
    }

    #[test]
    fn excluded_basenames_are_skipped_at_any_depth() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "LUTs.h");
        touch(dir.path(), "Audio/Synth/LUTs.h");
        touch(dir.path(), "Audio/Synth/luts.h");
        touch(dir.path(), "Audio/pluginconstants.h");

        let files = FileSelector::default().select(dir.path()).unwrap();
        assert_eq!(relative(dir.path(), &files), vec!["Audio/Synth/luts.h"]);
    }

    #[cfg(unix)]
    #[test]
    fn symlinked_files_are_selected() {
        use std::os::unix::fs::symlink;

        let dir = TempDir::new().unwrap();
        touch(dir.path(), "Real.h");
        symlink(dir.path().join("Real.h"), dir.path().join("Alias.h")).unwrap();
        symlink(dir.path().join("Gone.h"), dir.path().join("Dangling.h")).unwrap();

        let files = FileSelector::default().select(dir.path()).unwrap();
        assert_eq!(relative(dir.path(), &files), vec!["Alias.h", "Real.h"]);
    }

    #[test]
    fn missing_root_is_fatal() {
        let dir = TempDir::new().unwrap();
        let err = FileSelector::default()
            .select(&dir.path().join("absent"))
            .unwrap_err();
        assert!(matches!(err, HygieneError::Walk { .. }));
    }
}
