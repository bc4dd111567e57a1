//! Directory walk that gathers champion sources into an ordered mapping.
//!
//! Entries are visited in sorted name order so that name collisions resolve
//! the same way on every run. The mapping itself is a [`BTreeMap`], which
//! keeps the rendered output sorted regardless of traversal order.

use std::collections::BTreeMap;
use std::collections::btree_map;
use std::io::Read;

use camino::Utf8Path;
use cap_std::ambient_authority;
use cap_std::fs_utf8::{Dir, File};
use serde::Serialize;
use tracing::{debug, trace, warn};

use crate::error::{PackError, Result};

/// A single champion read from disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChampionEntry {
    /// File name with the champion suffix removed.
    pub name: String,
    /// Raw file text.
    pub content: String,
}

impl ChampionEntry {
    /// Creates an entry from a name and its source text.
    #[must_use]
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }
}

/// Champion sources keyed by name, ordered by key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Champions(pub(crate) BTreeMap<String, String>);

impl Champions {
    /// Creates an empty mapping.
    #[must_use]
    pub const fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Inserts an entry, returning the content it replaced on a name collision.
    pub fn insert(&mut self, entry: ChampionEntry) -> Option<String> {
        self.0.insert(entry.name, entry.content)
    }

    /// Returns the source text for `name`, if present.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    /// Number of champions in the mapping.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` when no champions were collected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Champion names in ascending order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// `(name, content)` pairs in ascending name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(name, content)| (name.as_str(), content.as_str()))
    }
}

impl FromIterator<ChampionEntry> for Champions {
    fn from_iter<I: IntoIterator<Item = ChampionEntry>>(iter: I) -> Self {
        let mut champions = Self::new();
        for entry in iter {
            champions.insert(entry);
        }
        champions
    }
}

impl IntoIterator for Champions {
    type Item = (String, String);
    type IntoIter = btree_map::IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// Walks `root` recursively and reads every file whose name ends in `suffix`.
///
/// The champion name is the file name with `suffix` removed; directory
/// components are not part of the name. Links to files are read wherever
/// they point, links to directories are not followed. Entries whose names are
/// not valid UTF-8 cannot yield a champion name and are skipped.
///
/// # Errors
///
/// Returns [`PackError::RootNotFound`] when `root` does not exist and
/// [`PackError::ReadFailed`] when a directory listing or a selected file
/// cannot be read (including files that are not valid UTF-8 and links that
/// do not resolve).
pub fn collect_champions(root: &Utf8Path, suffix: &str) -> Result<Champions> {
    let dir = open_root(root)?;
    let mut champions = Champions::new();
    collect_recursive(&dir, root, suffix, &mut champions)?;
    debug!(root = %root, count = champions.len(), "collected champions");
    Ok(champions)
}

fn open_root(root: &Utf8Path) -> Result<Dir> {
    match Dir::open_ambient_dir(root, ambient_authority()) {
        Ok(dir) => Ok(dir),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Err(PackError::RootNotFound {
            path: root.to_path_buf(),
        }),
        Err(err) => Err(PackError::read(root, err)),
    }
}

fn collect_recursive(
    dir: &Dir,
    base: &Utf8Path,
    suffix: &str,
    champions: &mut Champions,
) -> Result<()> {
    let mut entries = Vec::new();
    for entry_result in dir.read_dir(".").map_err(|err| PackError::read(base, err))? {
        let entry = entry_result.map_err(|err| PackError::read(base, err))?;
        let Ok(file_name) = entry.file_name() else {
            trace!(dir = %base, "skipping entry with non-UTF-8 name");
            continue;
        };
        let file_type = entry.file_type().map_err(|err| PackError::read(base, err))?;
        entries.push((file_name, file_type));
    }

    entries.sort_by(|(left, _), (right, _)| left.cmp(right));

    for (name, file_type) in entries {
        let path = base.join(&name);
        if file_type.is_dir() {
            let subdir = dir
                .open_dir(&name)
                .map_err(|err| PackError::read(&path, err))?;
            collect_recursive(&subdir, &path, suffix, champions)?;
            continue;
        }

        let Some(stem) = name.strip_suffix(suffix) else {
            trace!(path = %path, "skipping file without champion suffix");
            continue;
        };

        let content = if file_type.is_symlink() {
            let Some(content) = read_linked_file(&path)? else {
                debug!(path = %path, "skipping link to non-file");
                continue;
            };
            content
        } else if file_type.is_file() {
            dir.read_to_string(&name)
                .map_err(|err| PackError::read(&path, err))?
        } else {
            debug!(path = %path, "skipping non-file entry");
            continue;
        };
        record(champions, ChampionEntry::new(stem, content), &path);
    }

    Ok(())
}

/// Reads the file behind a symbolic link.
///
/// The target may live outside the champion root, so the link is opened with
/// ambient authority rather than through the walk's directory handle.
/// Returns `None` when the target is not a regular file.
fn read_linked_file(path: &Utf8Path) -> Result<Option<String>> {
    let mut file =
        File::open_ambient(path, ambient_authority()).map_err(|err| PackError::read(path, err))?;
    let metadata = file.metadata().map_err(|err| PackError::read(path, err))?;
    if !metadata.is_file() {
        return Ok(None);
    }
    let mut content = String::new();
    file.read_to_string(&mut content)
        .map_err(|err| PackError::read(path, err))?;
    Ok(Some(content))
}

fn record(champions: &mut Champions, entry: ChampionEntry, path: &Utf8Path) {
    let name = entry.name.clone();
    if champions.insert(entry).is_some() {
        warn!(champion = %name, path = %path, "duplicate champion name; later file wins");
    } else {
        debug!(champion = %name, path = %path, "collected champion");
    }
}
