//! Per-mode key handlers for typedeck.
//!
//! This module implements the [App] methods that turn key events into
//! model mutations, storage commits, and redraws. One handler per mode:
//! explorer navigation, the shared modal prompt handler, and the editor.
//!
//! Storage is only touched on explicit commits (rename, create, save);
//! everything else mutates in-memory state, so Escape never has anything
//! to roll back.

use crate::app::nav::OpenOutcome;
use crate::app::state::{App, CycleOutcome, Mode};
use crate::hal::{Hal, Key};
use crate::utils::join_path;

/// Extension given to files created through the new-file prompt.
pub const NEW_FILE_EXT: &str = "txt";

impl<H: Hal> App<H> {
    /// Explorer navigation. The only handler that can end the process,
    /// and only through the host quit chord.
    pub(super) fn handle_normal_key(&mut self, key: Key) -> CycleOutcome {
        match key {
            Key::Up => {
                if self.nav.move_selection(-1) {
                    self.redraw();
                }
            }
            Key::Down => {
                if self.nav.move_selection(1) {
                    self.redraw();
                }
            }
            Key::Right | Key::Enter => self.open_selection(),
            Key::Left => {
                if self.nav.focus_left() {
                    self.redraw();
                }
            }
            Key::RenameRequest => {
                if self.nav.focused_column().is_empty() {
                    self.report("No items to rename in this directory.\n");
                } else {
                    self.enter_prompt(Mode::Rename);
                }
            }
            Key::NewFolderRequest => self.enter_prompt(Mode::NewFolder),
            Key::NewFileRequest => self.enter_prompt(Mode::NewFile),
            Key::Quit => return CycleOutcome::Quit,
            _ => {}
        }
        CycleOutcome::Continue
    }

    fn open_selection(&mut self) {
        match self.nav.open_focused(&mut self.hal) {
            OpenOutcome::Empty => {
                self.report("No items to open in this directory.\n");
            }
            OpenOutcome::ColumnLimit => {
                self.report("Maximum column limit reached.\n");
            }
            OpenOutcome::OpenedDir => self.redraw(),
            OpenOutcome::File(path) => self.enter_edit_mode(&path),
        }
    }

    fn enter_prompt(&mut self, mode: Mode) {
        self.prompt.clear();
        self.set_mode(mode);
        self.redraw();
    }

    fn enter_edit_mode(&mut self, path: &str) {
        self.editor.open(&mut self.hal, path);
        self.set_mode(Mode::Editing);
        self.redraw();
    }

    /// Shared handler for the rename / new-folder / new-file prompts.
    /// Commit validation (non-empty) lives here, not in the prompt model.
    pub(super) fn handle_prompt_key(&mut self, key: Key) {
        match key {
            Key::Enter => {
                if self.prompt.is_empty() {
                    let msg = match self.mode {
                        Mode::Rename => "New name cannot be empty.\n",
                        Mode::NewFolder => "Folder name cannot be empty.\n",
                        _ => "File name cannot be empty.\n",
                    };
                    self.report(msg);
                    return;
                }
                match self.mode {
                    Mode::Rename => self.commit_rename(),
                    Mode::NewFolder => self.commit_new_folder(),
                    Mode::NewFile => self.commit_new_file(),
                    _ => {}
                }
            }
            Key::Escape => {
                self.leave_prompt();
                self.report("Operation canceled.\n");
            }
            Key::Backspace => {
                self.prompt.pop();
                self.redraw();
            }
            Key::Char(c) => {
                self.prompt.push(c);
                self.redraw();
            }
            _ => self.redraw(),
        }
    }

    fn leave_prompt(&mut self) {
        self.prompt.clear();
        self.set_mode(Mode::Normal);
        self.redraw();
    }

    fn commit_rename(&mut self) {
        // The selection can vanish if storage changed under the prompt;
        // fall back to a plain cancel.
        let Some(old_name) = self.nav.selected_name().map(str::to_string) else {
            self.leave_prompt();
            return;
        };

        let dir = self.nav.focused_column().path().to_string();
        let old = join_path(&dir, &old_name);
        let new = join_path(&dir, self.prompt.as_str());

        let result = self.hal.rename(&old, &new);
        self.nav.reload_focused(&mut self.hal);
        self.leave_prompt();

        match result {
            Ok(()) => self.report("Rename successful!\n"),
            Err(_) => self.report("Rename failed!\n"),
        }
    }

    fn commit_new_folder(&mut self) {
        let dir = self.nav.focused_column().path().to_string();
        let target = join_path(&dir, self.prompt.as_str());

        let result = self.hal.create_dir(&target);
        self.nav.reload_focused(&mut self.hal);
        self.leave_prompt();

        match result {
            Ok(()) => self.report("Folder created!\n"),
            Err(_) => self.report("Failed to create folder.\n"),
        }
    }

    fn commit_new_file(&mut self) {
        let dir = self.nav.focused_column().path().to_string();
        let name = format!("{}.{}", self.prompt.as_str(), NEW_FILE_EXT);
        let target = join_path(&dir, &name);

        if self.hal.exists(&target) {
            self.nav.reload_focused(&mut self.hal);
            self.leave_prompt();
            self.report("File already exists.\n");
            return;
        }

        match self.hal.create_file(&target) {
            Ok(()) => {
                self.nav.reload_focused(&mut self.hal);
                self.prompt.clear();
                self.enter_edit_mode(&target);
                self.report("File created successfully!\n");
            }
            Err(_) => {
                self.nav.reload_focused(&mut self.hal);
                self.leave_prompt();
                self.report("Failed to create file.\n");
            }
        }
    }

    /// Editor keys. Saving and Escape both land back in the explorer;
    /// everything else mutates the buffer and redraws the editor.
    pub(super) fn handle_editor_key(&mut self, key: Key) {
        match key {
            Key::SaveRequest => {
                let result = self.editor.save(&mut self.hal);
                self.set_mode(Mode::Normal);
                self.redraw();
                match result {
                    Ok(()) => self.report("\nFile saved!\n"),
                    Err(_) => self.report("\nError saving file!\n"),
                }
                return;
            }
            Key::Escape => {
                // Discard in-memory edits; nothing was persisted.
                self.set_mode(Mode::Normal);
                self.redraw();
                return;
            }
            Key::Left => {
                self.editor.move_cursor(-1);
            }
            Key::Right => {
                self.editor.move_cursor(1);
            }
            Key::Backspace => {
                self.editor.delete_before_cursor();
            }
            Key::Char(c) => {
                self.editor.insert(c);
            }
            _ => {}
        }
        self.redraw();
    }
}
