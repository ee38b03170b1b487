#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::{TempDir, tempdir};
use tss_hygiene::{DEFAULT_SOURCE_DIR, HeaderTemplate, ProjectLayout};

/// A throwaway project root with the standard source layout.
pub struct TestWorkspace {
    _tempdir: TempDir,
    root: PathBuf,
    source: PathBuf,
}

impl TestWorkspace {
    pub fn new() -> Self {
        let tempdir = tempdir().expect("tempdir");
        let root = tempdir.path().canonicalize().expect("canonical root");
        let source = root.join(DEFAULT_SOURCE_DIR);
        fs::create_dir_all(&source).expect("create source dir");
        Self {
            _tempdir: tempdir,
            root,
            source,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    pub fn layout(&self) -> ProjectLayout {
        ProjectLayout::new(&self.root, &self.source)
    }

    /// Write a file relative to the project root.
    pub fn write(&self, relative: &str, content: impl AsRef<[u8]>) -> PathBuf {
        let path = self.root.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create dir");
        }
        fs::write(&path, content).expect("write file");
        path
    }

    /// Write a file relative to the source tree.
    pub fn write_source(&self, relative: &str, content: impl AsRef<[u8]>) -> PathBuf {
        self.write(&format!("{DEFAULT_SOURCE_DIR}/{relative}"), content)
    }

    pub fn read(&self, path: &Path) -> String {
        fs::read_to_string(path).expect("read file")
    }

    /// Path of a source file as it appears in violation records.
    pub fn shown(&self, relative: &str) -> PathBuf {
        PathBuf::from(DEFAULT_SOURCE_DIR).join(relative)
    }
}

/// A project file that passes every content check.
pub fn clean_header_file(name: &str, body: &str) -> String {
    format!(
        "{}\n\n#pragma once\n{body}",
        HeaderTemplate::sound_studio().render(name)
    )
}

pub fn run_to_string<T, E: std::fmt::Debug>(
    run: impl FnOnce(&mut Vec<u8>) -> Result<T, E>,
) -> (T, String) {
    let mut out = Vec::new();
    let value = run(&mut out).expect("run succeeds");
    (value, String::from_utf8(out).expect("utf-8 report"))
}
