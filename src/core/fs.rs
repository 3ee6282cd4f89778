//! Directory listing for the file picker.
//!
//! Uses the [`ignore`] walker capped at depth 1, with gitignore handling off:
//! the picker should show what is on disk, not what git tracks.

use std::path::{Path, PathBuf};

use ignore::WalkBuilder;

/// One row in the file picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntryMeta {
    pub name: String,
    pub path: PathBuf,
    pub is_dir: bool,
}

/// List the immediate children of `dir`.
///
/// Directories are sorted before files; within each group entries are sorted
/// alphabetically (case-insensitive).
pub fn list_dir(dir: &Path, show_hidden: bool) -> anyhow::Result<Vec<DirEntryMeta>> {
    // Surface unreadable directories as errors instead of an empty listing.
    std::fs::read_dir(dir)?;

    let walker = WalkBuilder::new(dir)
        .max_depth(Some(1))
        .hidden(!show_hidden)
        .git_ignore(false)
        .git_global(false)
        .git_exclude(false)
        .ignore(false)
        .parents(false)
        .build();

    let mut dirs = Vec::new();
    let mut files = Vec::new();

    for entry in walker.flatten() {
        let path = entry.path();
        if path == dir {
            continue;
        }
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let is_dir = entry.file_type().is_some_and(|ft| ft.is_dir());
        let meta = DirEntryMeta {
            name,
            path: path.to_path_buf(),
            is_dir,
        };
        if is_dir {
            dirs.push(meta);
        } else {
            files.push(meta);
        }
    }

    dirs.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
    files.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
    dirs.extend(files);
    Ok(dirs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dirs_first_then_files_case_insensitive() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::create_dir(tmp.path().join("zeta")).unwrap();
        std::fs::create_dir(tmp.path().join("Alpha")).unwrap();
        std::fs::write(tmp.path().join("b.txt"), "").unwrap();
        std::fs::write(tmp.path().join("A.txt"), "").unwrap();

        let names: Vec<String> = list_dir(tmp.path(), false)
            .unwrap()
            .into_iter()
            .map(|e| e.name)
            .collect();
        assert_eq!(names, vec!["Alpha", "zeta", "A.txt", "b.txt"]);
    }

    #[test]
    fn hidden_entries_follow_the_flag() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::write(tmp.path().join(".secret"), "").unwrap();
        std::fs::write(tmp.path().join("plain"), "").unwrap();

        assert_eq!(list_dir(tmp.path(), false).unwrap().len(), 1);
        assert_eq!(list_dir(tmp.path(), true).unwrap().len(), 2);
    }

    #[test]
    fn missing_dir_is_an_error() {
        let tmp = tempfile::tempdir().unwrap();
        assert!(list_dir(&tmp.path().join("missing"), false).is_err());
    }
}
