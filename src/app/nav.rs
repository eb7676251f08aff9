//! Navigation state for typedeck.
//!
//! Manages the breadcrumb-style column list: each column is one directory
//! of the storage card with its own selection cursor, and columns to the
//! right of the focus are drill-ins opened from it. Listings are cut at
//! [MAX_ENTRIES] and the column list never grows past [MAX_COLUMNS].

use crate::hal::Storage;
use crate::utils::join_path;

/// Maximum number of browse columns.
pub const MAX_COLUMNS: usize = 10;

/// Maximum number of entries kept per column; excess listing entries are
/// silently dropped.
pub const MAX_ENTRIES: usize = 50;

/// One directory of the card: its path, the bounded entry listing in
/// listing order, and the selection cursor.
///
/// Invariant: `selected < entries.len()` when the column is non-empty,
/// `selected == 0` when it is empty.
#[derive(Debug)]
pub struct DirectoryColumn {
    path: String,
    entries: Vec<String>,
    selected: usize,
}

impl DirectoryColumn {
    fn load<S: Storage>(storage: &mut S, path: &str) -> Self {
        let mut entries = storage.list(path).unwrap_or_default();
        entries.truncate(MAX_ENTRIES);
        Self {
            path: path.to_string(),
            entries,
            selected: 0,
        }
    }

    #[inline]
    pub fn path(&self) -> &str {
        &self.path
    }

    #[inline]
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    #[inline]
    pub fn selected(&self) -> usize {
        self.selected
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn selected_name(&self) -> Option<&str> {
        self.entries.get(self.selected).map(String::as_str)
    }
}

/// Result of trying to open the focused column's selection.
#[derive(Debug, PartialEq, Eq)]
pub enum OpenOutcome {
    /// Nothing to open: the focused column is empty.
    Empty,
    /// The selection is a directory but the column list is full.
    ColumnLimit,
    /// A new column was appended and focused.
    OpenedDir,
    /// The selection is a file; the caller routes it to the editor.
    File(String),
}

/// The column list and focus of the file explorer.
///
/// Invariant: `focused < columns.len()`; there is always at least the
/// root column.
#[derive(Debug)]
pub struct NavState {
    columns: Vec<DirectoryColumn>,
    focused: usize,
}

impl NavState {
    /// A single unloaded root column; [NavState::load_root] fills it.
    pub fn new() -> Self {
        Self {
            columns: vec![DirectoryColumn {
                path: String::new(),
                entries: Vec::new(),
                selected: 0,
            }],
            focused: 0,
        }
    }

    #[inline]
    pub fn columns(&self) -> &[DirectoryColumn] {
        &self.columns
    }

    #[inline]
    pub fn focused_idx(&self) -> usize {
        self.focused
    }

    #[inline]
    pub fn focused_column(&self) -> &DirectoryColumn {
        &self.columns[self.focused]
    }

    pub fn selected_name(&self) -> Option<&str> {
        self.focused_column().selected_name()
    }

    /// Resets the explorer to a single freshly-listed root column.
    pub fn load_root<S: Storage>(&mut self, storage: &mut S, path: &str) {
        self.columns.clear();
        self.columns.push(DirectoryColumn::load(storage, path));
        self.focused = 0;
    }

    /// Moves the focused column's selection by `delta`, clamped to the
    /// entry range. Returns whether the selection actually moved; an
    /// empty column never moves.
    pub fn move_selection(&mut self, delta: isize) -> bool {
        let col = &mut self.columns[self.focused];
        if col.entries.is_empty() {
            return false;
        }
        let target = col
            .selected
            .saturating_add_signed(delta)
            .min(col.entries.len() - 1);
        let moved = target != col.selected;
        col.selected = target;
        moved
    }

    /// Moves focus one column left and discards every column right of the
    /// new focus. Returns false when already at the root column.
    pub fn focus_left(&mut self) -> bool {
        if self.focused == 0 {
            return false;
        }
        self.focused -= 1;
        self.columns.truncate(self.focused + 1);
        true
    }

    /// Classifies the focused selection and either drills into it
    /// (appending a new focused column) or hands the file path back.
    pub fn open_focused<S: Storage>(&mut self, storage: &mut S) -> OpenOutcome {
        let Some(name) = self.focused_column().selected_name() else {
            return OpenOutcome::Empty;
        };
        let target = join_path(self.focused_column().path(), name);

        if storage.is_dir(&target) {
            if self.columns.len() >= MAX_COLUMNS {
                return OpenOutcome::ColumnLimit;
            }
            self.columns.push(DirectoryColumn::load(storage, &target));
            self.focused = self.columns.len() - 1;
            OpenOutcome::OpenedDir
        } else {
            OpenOutcome::File(target)
        }
    }

    /// Re-lists the focused column after a storage mutation, resetting
    /// its selection. Columns right of the focus are left as they are.
    pub fn reload_focused<S: Storage>(&mut self, storage: &mut S) {
        let path = self.columns[self.focused].path.clone();
        self.columns[self.focused] = DirectoryColumn::load(storage, &path);
    }
}

impl Default for NavState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hal::term::CardStorage;

    use rand::Rng;
    use rand::rng;
    use std::fs::{self, File};
    use tempfile::tempdir;

    fn card(root: &std::path::Path) -> CardStorage {
        CardStorage::new(root.to_path_buf())
    }

    #[test]
    fn selection_clamps_under_random_input() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        let file_count = 10;
        for i in 0..file_count {
            File::create(dir.path().join(format!("testfile_{i}.txt")))?;
        }

        let mut storage = card(dir.path());
        let mut nav = NavState::new();
        nav.load_root(&mut storage, "/");
        assert_eq!(nav.focused_column().entries().len(), file_count);

        let mut rng = rng();
        for _ in 0..1000 {
            let delta: i32 = rng.random_range(-3..=3);
            let delta = delta as isize;
            nav.move_selection(delta);
            assert!(
                nav.focused_column().selected() < file_count,
                "selection escaped its bounds"
            );
        }

        for _ in 0..file_count * 2 {
            nav.move_selection(1);
        }
        assert_eq!(nav.focused_column().selected(), file_count - 1);

        for _ in 0..file_count * 2 {
            nav.move_selection(-1);
        }
        assert_eq!(nav.focused_column().selected(), 0);
        Ok(())
    }

    #[test]
    fn empty_column_never_moves() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        let mut storage = card(dir.path());

        let mut nav = NavState::new();
        nav.load_root(&mut storage, "/");

        assert!(!nav.move_selection(1));
        assert!(!nav.move_selection(-1));
        assert_eq!(nav.focused_column().selected(), 0);
        Ok(())
    }

    #[test]
    fn listing_is_cut_at_max_entries() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        for i in 0..MAX_ENTRIES + 20 {
            File::create(dir.path().join(format!("f_{i:03}.txt")))?;
        }

        let mut storage = card(dir.path());
        let mut nav = NavState::new();
        nav.load_root(&mut storage, "/");

        assert_eq!(nav.focused_column().entries().len(), MAX_ENTRIES);
        Ok(())
    }

    #[test]
    fn drill_in_and_focus_left_discards_right_columns()
    -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        fs::create_dir_all(dir.path().join("sub/inner"))?;
        File::create(dir.path().join("sub/inner/leaf.txt"))?;

        let mut storage = card(dir.path());
        let mut nav = NavState::new();
        nav.load_root(&mut storage, "/");

        assert_eq!(nav.open_focused(&mut storage), OpenOutcome::OpenedDir);
        assert_eq!(nav.open_focused(&mut storage), OpenOutcome::OpenedDir);
        assert_eq!(nav.columns().len(), 3);
        assert_eq!(nav.focused_idx(), 2);
        assert_eq!(nav.focused_column().path(), "/sub/inner");

        assert!(nav.focus_left());
        assert_eq!(nav.columns().len(), 2);
        assert_eq!(nav.focused_idx(), 1);

        assert!(nav.focus_left());
        assert_eq!(nav.columns().len(), 1);
        assert!(!nav.focus_left());
        Ok(())
    }

    #[test]
    fn reopen_after_focus_left_sees_fresh_listing() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        fs::create_dir(dir.path().join("sub"))?;

        let mut storage = card(dir.path());
        let mut nav = NavState::new();
        nav.load_root(&mut storage, "/");

        assert_eq!(nav.open_focused(&mut storage), OpenOutcome::OpenedDir);
        assert!(nav.focused_column().is_empty());

        // The directory changes while it is not on screen.
        File::create(dir.path().join("sub/new.txt"))?;

        nav.focus_left();
        assert_eq!(nav.open_focused(&mut storage), OpenOutcome::OpenedDir);
        assert_eq!(nav.focused_column().entries(), ["new.txt".to_string()]);
        Ok(())
    }

    #[test]
    fn column_capacity_is_enforced() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        let mut nested = dir.path().to_path_buf();
        for i in 0..MAX_COLUMNS + 2 {
            nested = nested.join(format!("d{i}"));
        }
        fs::create_dir_all(&nested)?;

        let mut storage = card(dir.path());
        let mut nav = NavState::new();
        nav.load_root(&mut storage, "/");

        for _ in 0..MAX_COLUMNS - 1 {
            assert_eq!(nav.open_focused(&mut storage), OpenOutcome::OpenedDir);
        }
        assert_eq!(nav.columns().len(), MAX_COLUMNS);

        assert_eq!(nav.open_focused(&mut storage), OpenOutcome::ColumnLimit);
        assert_eq!(nav.columns().len(), MAX_COLUMNS);
        assert_eq!(nav.focused_idx(), MAX_COLUMNS - 1);
        Ok(())
    }

    #[test]
    fn open_on_file_routes_to_editor() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        File::create(dir.path().join("a.txt"))?;

        let mut storage = card(dir.path());
        let mut nav = NavState::new();
        nav.load_root(&mut storage, "/");

        assert_eq!(
            nav.open_focused(&mut storage),
            OpenOutcome::File("/a.txt".to_string())
        );
        assert_eq!(nav.columns().len(), 1);
        Ok(())
    }

    #[test]
    fn reload_focused_resets_selection() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        for i in 0..5 {
            File::create(dir.path().join(format!("f{i}.txt")))?;
        }

        let mut storage = card(dir.path());
        let mut nav = NavState::new();
        nav.load_root(&mut storage, "/");
        nav.move_selection(3);
        assert_eq!(nav.focused_column().selected(), 3);

        nav.reload_focused(&mut storage);
        assert_eq!(nav.focused_column().selected(), 0);
        assert_eq!(nav.focused_column().entries().len(), 5);
        Ok(())
    }
}
