//! File picker popup state, opened from a browse-file widget.

use std::path::{Path, PathBuf};

use crate::core::fs::{list_dir, DirEntryMeta};
use crate::ui::nav_widget::RowState;

/// What happened when the user activated a picker row.
#[derive(Debug, PartialEq, Eq)]
pub enum PickOutcome {
    /// Moved into a directory; keep the picker open.
    Descended,
    /// A file was chosen.
    Picked(PathBuf),
    Nothing,
}

#[derive(Debug)]
pub struct FilePicker {
    /// Registry key of the browse-file widget that receives the choice.
    pub target: String,
    pub dir: PathBuf,
    pub entries: Vec<DirEntryMeta>,
    pub state: RowState,
    /// Listing error for the current directory, shown instead of entries.
    pub error: Option<String>,
    show_hidden: bool,
}

impl FilePicker {
    /// Open at `start`, which may be a file (its directory is listed) or a
    /// directory.
    pub fn open(target: String, start: &Path, show_hidden: bool) -> Self {
        let dir = if start.is_dir() {
            start.to_path_buf()
        } else {
            start
                .parent()
                .filter(|p| p.is_dir())
                .map(Path::to_path_buf)
                .unwrap_or_else(|| PathBuf::from("."))
        };
        let mut picker = Self {
            target,
            dir,
            entries: Vec::new(),
            state: RowState::default(),
            error: None,
            show_hidden,
        };
        picker.reload();
        picker
    }

    fn reload(&mut self) {
        self.state = RowState::default();
        match list_dir(&self.dir, self.show_hidden) {
            Ok(entries) => {
                self.entries = entries;
                self.error = None;
            }
            Err(e) => {
                tracing::warn!("cannot list {}: {e}", self.dir.display());
                self.entries.clear();
                self.error = Some(e.to_string());
            }
        }
    }

    pub fn select_next(&mut self) {
        self.state.select_next(self.entries.len());
    }

    pub fn select_prev(&mut self) {
        self.state.select_prev();
    }

    pub fn selected(&self) -> Option<&DirEntryMeta> {
        self.entries.get(self.state.selected)
    }

    /// Enter the selected directory or pick the selected file.
    pub fn activate(&mut self) -> PickOutcome {
        let Some(entry) = self.selected().cloned() else {
            return PickOutcome::Nothing;
        };
        if entry.is_dir {
            self.dir = entry.path;
            self.reload();
            PickOutcome::Descended
        } else {
            PickOutcome::Picked(entry.path)
        }
    }

    /// Go up one directory.  Returns `false` at the filesystem root.
    pub fn parent(&mut self) -> bool {
        let Some(parent) = self.dir.parent().map(Path::to_path_buf) else {
            return false;
        };
        let previous = std::mem::replace(&mut self.dir, parent);
        self.reload();
        // Keep the directory we came from highlighted.
        if let Some(idx) = self.entries.iter().position(|e| e.path == previous) {
            self.state.selected = idx;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn descend_pick_and_return() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::create_dir(tmp.path().join("docs")).unwrap();
        std::fs::write(tmp.path().join("docs").join("a.txt"), "").unwrap();
        std::fs::write(tmp.path().join("z.txt"), "").unwrap();

        let mut picker = FilePicker::open("/File".into(), tmp.path(), false);
        assert_eq!(picker.entries.len(), 2);
        assert_eq!(picker.activate(), PickOutcome::Descended);
        assert_eq!(picker.dir, tmp.path().join("docs"));
        assert_eq!(
            picker.activate(),
            PickOutcome::Picked(tmp.path().join("docs").join("a.txt"))
        );

        assert!(picker.parent());
        assert_eq!(picker.dir, tmp.path());
        assert_eq!(picker.selected().unwrap().name, "docs");
    }

    #[test]
    fn opening_on_a_file_lists_its_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let file = tmp.path().join("note.md");
        std::fs::write(&file, "").unwrap();
        let picker = FilePicker::open("/File".into(), &file, false);
        assert_eq!(picker.dir, tmp.path());
        assert_eq!(picker.entries.len(), 1);
    }

    #[test]
    fn empty_dir_activates_nothing() {
        let tmp = tempfile::tempdir().unwrap();
        let mut picker = FilePicker::open("/File".into(), tmp.path(), false);
        assert_eq!(picker.activate(), PickOutcome::Nothing);
    }
}
