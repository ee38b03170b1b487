use anyhow::{Context, Result};
use clap::{Args, Parser};
use std::path::{Path, PathBuf};

/// Source tree location relative to the project root.
pub const DEFAULT_SOURCE_DIR: &str = "Codebase/TheSoundStudio/Source";

/// Arguments both tools share so they always resolve the same tree.
#[derive(Args, Debug, Default, Clone)]
pub struct ProjectArgs {
    #[arg(
        long,
        env = "TSS_HYGIENE_ROOT",
        value_name = "DIR",
        help = "Project root (defaults to the current directory)"
    )]
    pub root: Option<PathBuf>,

    #[arg(
        long,
        env = "TSS_HYGIENE_SOURCE_DIR",
        value_name = "DIR",
        help = "Source tree, relative to the project root unless absolute"
    )]
    pub source_dir: Option<PathBuf>,
}

#[derive(Parser, Debug, Default, Clone)]
#[command(
    name = "replace_headers",
    about = "Replace file headers in project-owned source files with the standard copyright header",
    version
)]
pub struct ReplaceHeadersArgs {
    #[command(flatten)]
    pub project: ProjectArgs,
}

#[derive(Parser, Debug, Default, Clone)]
#[command(
    name = "validate_codebase",
    about = "Validate the source tree for release readiness",
    version
)]
pub struct ValidateArgs {
    #[command(flatten)]
    pub project: ProjectArgs,

    #[arg(
        long = "forbidden-file",
        env = "TSS_HYGIENE_FORBIDDEN_FILES",
        value_name = "PATH",
        value_delimiter = ',',
        help = "Files (relative to the source tree) that must not exist; replaces the default list"
    )]
    pub forbidden_files: Vec<PathBuf>,
}

/// Resolved, absolute locations for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLayout {
    pub project_root: PathBuf,
    pub source_dir: PathBuf,
}

impl ProjectLayout {
    pub fn new(project_root: impl Into<PathBuf>, source_dir: impl Into<PathBuf>) -> Self {
        Self {
            project_root: project_root.into(),
            source_dir: source_dir.into(),
        }
    }

    /// Resolve and validate the project root and source tree.
    pub fn from_args(args: &ProjectArgs) -> Result<Self> {
        let root = args.root.clone().unwrap_or_else(|| PathBuf::from("."));
        anyhow::ensure!(root.is_dir(), "project root {:?} is not a directory", root);
        let project_root = root
            .canonicalize()
            .with_context(|| format!("failed to resolve project root {:?}", root))?;

        let source = args
            .source_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SOURCE_DIR));
        let source = if source.is_absolute() {
            source
        } else {
            project_root.join(source)
        };
        anyhow::ensure!(
            source.is_dir(),
            "source directory {:?} does not exist or is not a directory",
            source
        );
        let source_dir = source
            .canonicalize()
            .with_context(|| format!("failed to resolve source directory {:?}", source))?;

        tracing::debug!(
            project_root = %project_root.display(),
            source_dir = %source_dir.display(),
            "resolved project layout"
        );
        Ok(Self {
            project_root,
            source_dir,
        })
    }

    /// Path for display, relative to the project root when possible.
    pub fn relative_to_root<'a>(&self, path: &'a Path) -> &'a Path {
        path.strip_prefix(&self.project_root).unwrap_or(path)
    }

    /// Path for display, relative to the source tree when possible.
    pub fn relative_to_source<'a>(&self, path: &'a Path) -> &'a Path {
        path.strip_prefix(&self.source_dir).unwrap_or(path)
    }
}
