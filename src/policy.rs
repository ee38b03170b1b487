//! File exclusion policy shared by the header rewriter and the validator.

use std::collections::BTreeSet;
use std::ffi::OsStr;
use std::path::{Component, Path};

/// Third-party or generated trees directly under the source root.
pub const DEFAULT_EXCLUDED_DIRS: &[&str] = &["hiir", "utilities"];

/// Vendored files that live next to project-owned code.
pub const DEFAULT_EXCLUDED_FILES: &[&str] = &[
    "pluginconstants.h",
    "synthfunctions.h",
    "lookuptables.h",
    "vConstants.h",
    "LUTs.h",
];

/// Which parts of the source tree are not project-owned.
///
/// Directory names are compared against the first path segment below the
/// source root only; file names are compared against the exact basename at
/// any depth. The two sets are applied independently.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExclusionPolicy {
    excluded_top_level_dirs: BTreeSet<String>,
    excluded_filenames: BTreeSet<String>,
}

impl ExclusionPolicy {
    pub fn new<D, F>(dirs: D, files: F) -> Self
    where
        D: IntoIterator,
        D::Item: Into<String>,
        F: IntoIterator,
        F::Item: Into<String>,
    {
        Self {
            excluded_top_level_dirs: dirs.into_iter().map(Into::into).collect(),
            excluded_filenames: files.into_iter().map(Into::into).collect(),
        }
    }

    /// True when `name` is an excluded directory sitting directly under the source root.
    pub fn excludes_top_level_dir(&self, name: &OsStr) -> bool {
        name.to_str()
            .is_some_and(|name| self.excluded_top_level_dirs.contains(name))
    }

    pub fn excludes_filename(&self, name: &OsStr) -> bool {
        name.to_str()
            .is_some_and(|name| self.excluded_filenames.contains(name))
    }

    /// Full project-ownership test for a path relative to the source root.
    pub fn is_project_owned(&self, relative: &Path) -> bool {
        let first_dir = relative
            .parent()
            .and_then(|parent| parent.components().next());
        if let Some(Component::Normal(top)) = first_dir
            && self.excludes_top_level_dir(top)
        {
            return false;
        }

        match relative.file_name() {
            Some(name) => !self.excludes_filename(name),
            None => false,
        }
    }
}

impl Default for ExclusionPolicy {
    fn default() -> Self {
        Self::new(
            DEFAULT_EXCLUDED_DIRS.iter().copied(),
            DEFAULT_EXCLUDED_FILES.iter().copied(),
        )
    }
}
