//! Output writer for the generated module.

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs_utf8::{Dir, OpenOptions};
use std::io::Write;

use crate::error::{PackError, Result};

/// Overwrites `path` with `contents`.
///
/// The parent directory must already exist. The file is truncated before
/// writing, so a failure part way through can leave it empty or partial.
///
/// # Errors
///
/// Returns [`PackError::WriteFailed`] when the parent directory cannot be
/// opened or the file cannot be created or written.
pub fn write_module(path: &Utf8Path, contents: &str) -> Result<Utf8PathBuf> {
    let write_err = |source| PackError::WriteFailed {
        path: path.to_path_buf(),
        source,
    };

    let Some(file_name) = path.file_name() else {
        return Err(write_err(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            "output path has no file name",
        )));
    };
    let parent = match path.parent() {
        Some(parent) if !parent.as_str().is_empty() => parent,
        _ => Utf8Path::new("."),
    };

    let dir = Dir::open_ambient_dir(parent, ambient_authority()).map_err(write_err)?;
    let mut file = dir
        .open_with(
            file_name,
            OpenOptions::new().write(true).create(true).truncate(true),
        )
        .map_err(write_err)?;
    file.write_all(contents.as_bytes()).map_err(write_err)?;
    file.flush().map_err(write_err)?;

    Ok(path.to_path_buf())
}
