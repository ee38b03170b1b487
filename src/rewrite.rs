//! In-place header rewriting for eligible source files.

use crate::config::ProjectLayout;
use crate::error::{HygieneError, HygieneResult};
use crate::header::{HeaderMatcher, HeaderTemplate};
use crate::profile::ProjectProfile;
use crate::selector::FileSelector;
use crate::text::read_lossy;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Separates a newly prepended header from the original first line.
const PREPEND_SEPARATOR: &str = "\n\n";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RewriteKind {
    /// An existing header block was swapped for the canonical one.
    Replaced,
    /// No header was found; the canonical one was added on top.
    Prepended,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewriteOutcome {
    pub path: PathBuf,
    pub kind: RewriteKind,
}

#[derive(Debug, Clone, Default)]
pub struct RewriteSummary {
    pub updated: Vec<RewriteOutcome>,
}

impl RewriteSummary {
    pub fn count(&self) -> usize {
        self.updated.len()
    }

    pub fn count_of(&self, kind: RewriteKind) -> usize {
        self.updated.iter().filter(|o| o.kind == kind).count()
    }
}

pub struct HeaderRewriter {
    selector: FileSelector,
    template: HeaderTemplate,
    matcher: HeaderMatcher,
}

impl HeaderRewriter {
    pub fn new(profile: &ProjectProfile) -> Self {
        Self {
            selector: FileSelector::new(profile.exclusions.clone()),
            template: profile.header.clone(),
            matcher: profile.matcher,
        }
    }

    /// New content for a file named `file_name`, and how it was produced.
    ///
    /// Everything after a recognized header is kept byte for byte; without a
    /// header the original content follows the canonical header and a blank line.
    pub fn rewrite_content(&self, file_name: &str, content: &str) -> (String, RewriteKind) {
        let header = self.template.render(file_name);
        match self.matcher.find(content) {
            Some(block) => (header + block.tail(content), RewriteKind::Replaced),
            None => (
                format!("{header}{PREPEND_SEPARATOR}{content}"),
                RewriteKind::Prepended,
            ),
        }
    }

    /// Rewrite one file in place.
    pub fn rewrite_file(&self, path: &Path) -> HygieneResult<RewriteKind> {
        let content = read_lossy(path)?;
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        let (updated, kind) = self.rewrite_content(&file_name, &content);
        fs::write(path, updated).map_err(|e| HygieneError::write(path, e))?;
        tracing::debug!(path = %path.display(), ?kind, "rewrote header");
        Ok(kind)
    }

    /// Rewrite every eligible file under the layout's source tree.
    ///
    /// Prints one `Updated:` line per file and a closing total.
    pub fn run(&self, layout: &ProjectLayout, out: &mut dyn Write) -> HygieneResult<RewriteSummary> {
        let source_dir = &layout.source_dir;
        if !source_dir.is_dir() {
            return Err(HygieneError::MissingSourceDir(source_dir.clone()));
        }

        let files = self.selector.select(source_dir)?;
        tracing::info!(
            source_dir = %source_dir.display(),
            eligible = files.len(),
            "rewriting headers"
        );

        let mut summary = RewriteSummary::default();
        for path in files {
            let kind = self.rewrite_file(&path)?;
            writeln!(out, "  Updated: {}", layout.relative_to_source(&path).display())?;
            summary.updated.push(RewriteOutcome { path, kind });
        }

        writeln!(out)?;
        writeln!(out, "Total files updated: {}", summary.count())?;
        tracing::info!(
            updated = summary.count(),
            replaced = summary.count_of(RewriteKind::Replaced),
            prepended = summary.count_of(RewriteKind::Prepended),
            "header rewrite finished"
        );
        Ok(summary)
    }
}
