//! Screen rendering for typedeck.
//!
//! Pure functions from model state to [Screen] calls: they read state and
//! write text, and own no application logic. The explorer draws as a grid
//! of fixed-width columns; the modal prompts and the editor each draw a
//! short header plus their buffer. The editor marks the cursor byte with
//! [Screen::write_highlight] and leaves the actual highlight encoding to
//! the screen implementation.

use crate::app::editor::EditorState;
use crate::app::nav::NavState;
use crate::hal::Screen;

use unicode_width::UnicodeWidthStr;

/// Width of one explorer column on the character display.
pub const COLUMN_WIDTH: usize = 30;

/// Pads `text` with spaces up to [COLUMN_WIDTH], display-width aware.
/// Overlong cells are left as they are, matching the device renderer.
fn pad_cell(line: &mut String, text: &str) {
    line.push_str(text);
    let width = UnicodeWidthStr::width(text);
    for _ in width..COLUMN_WIDTH {
        line.push(' ');
    }
}

/// Draws the explorer: one header row with each column's directory, then
/// one row per entry index with the focused column's selection marked.
pub fn draw_columns<S: Screen>(screen: &mut S, nav: &NavState) {
    screen.clear();

    let mut line = String::new();
    for col in nav.columns() {
        pad_cell(&mut line, &format!("Dir: {}", col.path()));
    }
    line.push('\n');
    screen.write(&line);

    if nav.columns().iter().all(|c| c.is_empty()) {
        screen.write("This directory is empty.\n");
        screen.write("\nUse F2 to create a new folder or Ctrl+N to create a new file.\n");
        return;
    }

    let max_entries = nav
        .columns()
        .iter()
        .map(|c| c.entries().len())
        .max()
        .unwrap_or(0);

    for row in 0..max_entries {
        let mut line = String::new();
        for (idx, col) in nav.columns().iter().enumerate() {
            match col.entries().get(row) {
                Some(name) => {
                    let marker = if idx == nav.focused_idx() && row == col.selected() {
                        "> "
                    } else {
                        "  "
                    };
                    pad_cell(&mut line, &format!("{marker}{name}"));
                }
                None => pad_cell(&mut line, ""),
            }
        }
        line.push('\n');
        screen.write(&line);
    }

    screen.write("\nUse Up/Down to navigate, Right to open folder/file, Left to go back.\n");
}

/// Draws the rename prompt, naming the entry being renamed.
pub fn draw_rename<S: Screen>(screen: &mut S, current_item: &str, buffer: &str) {
    screen.clear();
    screen.write("Rename Mode:\n");
    screen.write("Current Item: ");
    screen.write(current_item);
    screen.write("\nType new name and press Enter. Esc to cancel.\n");
    screen.write(buffer);
}

pub fn draw_new_folder<S: Screen>(screen: &mut S, buffer: &str) {
    screen.clear();
    screen.write("New Folder Mode:\n");
    screen.write("Type folder name and press Enter. Esc to cancel.\n");
    screen.write(buffer);
}

pub fn draw_new_file<S: Screen>(screen: &mut S, buffer: &str) {
    screen.clear();
    screen.write("New File Mode:\n");
    screen.write("Type file name (without extension) and press Enter. Esc to cancel.\n");
    screen.write(buffer);
}

/// Draws the editor: a header naming the file, then the buffer with the
/// byte under the cursor emphasized while the blink phase has it visible.
/// A cursor at end-of-buffer shows as an emphasized space.
pub fn draw_editor<S: Screen>(screen: &mut S, editor: &EditorState, cursor_visible: bool) {
    screen.clear();
    screen.write("Editing: ");
    screen.write(editor.filename());
    screen.write("\nCtrl+S to save, Esc to exit.\n");

    let content = editor.content();
    let cursor = editor.cursor();

    if !cursor_visible {
        screen.write(&String::from_utf8_lossy(content));
        return;
    }

    if cursor < content.len() {
        screen.write(&String::from_utf8_lossy(&content[..cursor]));
        screen.write_highlight(&String::from_utf8_lossy(&content[cursor..cursor + 1]));
        screen.write(&String::from_utf8_lossy(&content[cursor + 1..]));
    } else {
        screen.write(&String::from_utf8_lossy(content));
        screen.write_highlight(" ");
    }
}
