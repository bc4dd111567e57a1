//! Temporary champion directories for tests.
//!
//! Files are written through a `cap_std` handle rooted at the temporary
//! directory, so relative paths cannot escape it.

use std::io::Write;

use anyhow::{Context, Result};
use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs_utf8::{Dir, OpenOptions};
use tempfile::TempDir;

/// A temporary directory that is removed when dropped.
#[derive(Debug)]
pub struct ChampionTree {
    _tempdir: TempDir,
    root: Utf8PathBuf,
    dir: Dir,
}

impl ChampionTree {
    /// Creates an empty tree.
    ///
    /// # Errors
    ///
    /// Fails when the temporary directory cannot be created or its path is
    /// not valid UTF-8.
    pub fn new() -> Result<Self> {
        let tempdir = tempfile::tempdir().context("create temp dir")?;
        let root = Utf8PathBuf::from_path_buf(tempdir.path().to_path_buf())
            .map_err(|path| anyhow::anyhow!("non-UTF-8 temp path: {}", path.display()))?;
        let dir = Dir::open_ambient_dir(&root, ambient_authority())
            .with_context(|| format!("open {root}"))?;
        Ok(Self {
            _tempdir: tempdir,
            root,
            dir,
        })
    }

    /// Absolute path of the tree root.
    #[must_use]
    pub fn root(&self) -> &Utf8Path {
        &self.root
    }

    /// Absolute path of `relative` inside the tree.
    #[must_use]
    pub fn path(&self, relative: &str) -> Utf8PathBuf {
        self.root.join(relative)
    }

    /// Creates `relative` and any missing parents.
    ///
    /// # Errors
    ///
    /// Fails when the directories cannot be created.
    pub fn mkdir(&self, relative: &str) -> Result<()> {
        self.dir
            .create_dir_all(relative)
            .with_context(|| format!("create {relative}"))
    }

    /// Writes `contents` to `relative`, creating parent directories first.
    ///
    /// # Errors
    ///
    /// Fails when the file or its parents cannot be written.
    pub fn write(&self, relative: &str, contents: &str) -> Result<Utf8PathBuf> {
        self.write_bytes(relative, contents.as_bytes())
    }

    /// Writes raw bytes to `relative`, creating parent directories first.
    ///
    /// # Errors
    ///
    /// Fails when the file or its parents cannot be written.
    pub fn write_bytes(&self, relative: &str, contents: &[u8]) -> Result<Utf8PathBuf> {
        if let Some(parent) = Utf8Path::new(relative).parent() {
            if !parent.as_str().is_empty() {
                self.mkdir(parent.as_str())?;
            }
        }
        let mut file = self
            .dir
            .open_with(
                relative,
                OpenOptions::new().write(true).create(true).truncate(true),
            )
            .with_context(|| format!("open {relative}"))?;
        file.write_all(contents)
            .with_context(|| format!("write {relative}"))?;
        Ok(self.path(relative))
    }

    /// Reads `relative` back as UTF-8 text.
    ///
    /// # Errors
    ///
    /// Fails when the file is missing or not valid UTF-8.
    pub fn read(&self, relative: &str) -> Result<String> {
        self.dir
            .read_to_string(relative)
            .with_context(|| format!("read {relative}"))
    }
}
