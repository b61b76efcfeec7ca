//! Pruned, sorted, top-down directory walk shared by the tree and content
//! sections of a dump.

use crate::domain::constants::{TREE_BRANCH, TREE_PIPE};
use crate::domain::models::DumpConfig;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Dir,
    File,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkEntry {
    pub path: PathBuf,
    pub name: String,
    /// Root is 0; a file directly under the root is 1.
    pub depth: usize,
    pub kind: EntryKind,
}

pub fn dir_allowed(cfg: &DumpConfig, name: &str) -> bool {
    !name.starts_with('.') && !cfg.exclude_dirs.contains(name)
}

pub fn file_allowed(cfg: &DumpConfig, name: &str) -> bool {
    !name.starts_with('.')
        && cfg.extensions.iter().any(|ext| name.ends_with(ext.as_str()))
        && !cfg.exclude_files.contains(name)
        && !cfg
            .exclude_substrings
            .iter()
            .any(|s| name.contains(s.as_str()))
}

/// Lazy walk. Each directory yields itself, then its files, then its
/// subdirectories, with files and subdirectories sorted by name.
/// Excluded directories are never read; a directory that cannot be listed
/// is left out entirely.
pub struct FilteredWalk<'a> {
    cfg: &'a DumpConfig,
    pending: Vec<WalkEntry>,
}

impl<'a> FilteredWalk<'a> {
    pub fn new(cfg: &'a DumpConfig, root: &Path) -> Self {
        let root = WalkEntry {
            path: root.to_path_buf(),
            name: ".".to_string(),
            depth: 0,
            kind: EntryKind::Dir,
        };
        Self {
            cfg,
            pending: vec![root],
        }
    }

    /// Queues the children of `dir`; false when it cannot be listed.
    fn expand(&mut self, dir: &WalkEntry) -> bool {
        let reader = match std::fs::read_dir(&dir.path) {
            Ok(r) => r,
            Err(e) => {
                tracing::warn!(dir = %dir.path.display(), error = %e, "cannot list directory");
                return false;
            }
        };
        let mut files = Vec::new();
        let mut dirs = Vec::new();
        for entry in reader.flatten() {
            let name = entry.file_name().to_string_lossy().into_owned();
            let path = entry.path();
            let Ok(ty) = entry.file_type() else {
                continue;
            };
            let is_dir = if ty.is_symlink() {
                // symlinked directories are listed nowhere and never followed
                if path.is_dir() {
                    continue;
                }
                false
            } else {
                ty.is_dir()
            };
            let child = WalkEntry {
                path,
                name,
                depth: dir.depth + 1,
                kind: if is_dir { EntryKind::Dir } else { EntryKind::File },
            };
            if is_dir && dir_allowed(self.cfg, &child.name) {
                dirs.push(child);
            } else if !is_dir && file_allowed(self.cfg, &child.name) {
                files.push(child);
            }
        }
        files.sort_by(|a, b| a.name.cmp(&b.name));
        dirs.sort_by(|a, b| a.name.cmp(&b.name));
        self.pending.extend(dirs.into_iter().rev());
        self.pending.extend(files.into_iter().rev());
        true
    }
}

impl Iterator for FilteredWalk<'_> {
    type Item = WalkEntry;

    fn next(&mut self) -> Option<WalkEntry> {
        loop {
            let entry = self.pending.pop()?;
            // unlistable directories are dropped, not shown empty
            if entry.kind == EntryKind::Dir && !self.expand(&entry) {
                continue;
            }
            return Some(entry);
        }
    }
}

pub fn tree_line(entry: &WalkEntry) -> String {
    if entry.depth == 0 {
        return ".".to_string();
    }
    let indent = TREE_PIPE.repeat(entry.depth - 1);
    match entry.kind {
        EntryKind::Dir => format!("{}{}{}/", indent, TREE_BRANCH, entry.name),
        EntryKind::File => format!("{}{}{}", indent, TREE_BRANCH, entry.name),
    }
}

/// Tree section lines, produced on demand.
pub fn tree_lines<'a>(cfg: &'a DumpConfig, root: &Path) -> impl Iterator<Item = String> + 'a {
    FilteredWalk::new(cfg, root).map(|e| tree_line(&e))
}

/// `/`-separated path relative to `root`.
pub fn display_path(root: &Path, path: &Path) -> String {
    let rel = path.strip_prefix(root).unwrap_or(path);
    rel.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
