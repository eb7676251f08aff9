//! Development-host HAL: a terminal keypad/display plus a host directory
//! standing in for the storage card.
//!
//! [TermHal] puts the terminal into raw mode and the alternate screen on
//! construction and restores both on drop, so a panic or early return
//! never leaves the shell unusable. Key decoding covers the device chords
//! (Ctrl+R rename, Ctrl+N new file, F2 new folder, Ctrl+S save) plus the
//! host-only Ctrl+Q quit.
//!
//! [CardStorage] maps virtual absolute paths onto a root directory on the
//! host filesystem. It is a standalone type so storage behavior can be
//! tested against a sandbox directory without touching the terminal.

use crate::hal::{Key, Keys, Power, Screen, Storage};

use crossterm::{
    cursor::{Hide, MoveTo, Show},
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute, queue,
    style::{Attribute, Print, SetAttribute},
    terminal::{
        Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode,
        enable_raw_mode,
    },
};

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Storage card backed by a directory on the host filesystem.
///
/// Virtual paths are absolute and `/`-separated regardless of platform;
/// `/` is the card root.
pub struct CardStorage {
    root: PathBuf,
}

impl CardStorage {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    #[inline]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Translates a virtual card path into a host path under the root.
    fn host_path(&self, virtual_path: &str) -> PathBuf {
        let trimmed = virtual_path.trim_start_matches('/');
        if trimmed.is_empty() {
            self.root.clone()
        } else {
            self.root.join(trimmed)
        }
    }
}

impl Storage for CardStorage {
    fn list(&mut self, path: &str) -> io::Result<Vec<String>> {
        let mut names = Vec::new();
        for entry in fs::read_dir(self.host_path(path))? {
            let entry = match entry {
                Ok(e) => e,
                Err(_) => continue,
            };
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
        // Host filesystems hand entries back in arbitrary order; the card
        // presents a stable name order.
        names.sort();
        Ok(names)
    }

    fn read(&mut self, path: &str) -> io::Result<Vec<u8>> {
        fs::read(self.host_path(path))
    }

    fn write(&mut self, path: &str, data: &[u8]) -> io::Result<()> {
        fs::write(self.host_path(path), data)
    }

    fn create_file(&mut self, path: &str) -> io::Result<()> {
        fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(self.host_path(path))
            .map(|_| ())
    }

    fn create_dir(&mut self, path: &str) -> io::Result<()> {
        fs::create_dir(self.host_path(path))
    }

    fn rename(&mut self, old: &str, new: &str) -> io::Result<()> {
        fs::rename(self.host_path(old), self.host_path(new))
    }

    fn exists(&mut self, path: &str) -> bool {
        self.host_path(path).exists()
    }

    fn is_dir(&mut self, path: &str) -> bool {
        self.host_path(path).is_dir()
    }
}

/// The complete host-side hardware surface: terminal in, terminal out,
/// [CardStorage] underneath.
pub struct TermHal {
    card: CardStorage,
    out: io::Stdout,
}

impl TermHal {
    /// Enters raw mode and the alternate screen. The matching teardown
    /// lives in `Drop`.
    pub fn new(root: PathBuf) -> io::Result<Self> {
        enable_raw_mode()?;
        let mut out = io::stdout();
        execute!(out, EnterAlternateScreen, Hide)?;
        Ok(Self {
            card: CardStorage::new(root),
            out,
        })
    }

    fn decode(code: KeyCode, modifiers: KeyModifiers) -> Option<Key> {
        if modifiers.contains(KeyModifiers::CONTROL) {
            return match code {
                KeyCode::Char('r') => Some(Key::RenameRequest),
                KeyCode::Char('n') => Some(Key::NewFileRequest),
                KeyCode::Char('s') => Some(Key::SaveRequest),
                KeyCode::Char('q') => Some(Key::Quit),
                _ => None,
            };
        }

        match code {
            KeyCode::Up => Some(Key::Up),
            KeyCode::Down => Some(Key::Down),
            KeyCode::Left => Some(Key::Left),
            KeyCode::Right => Some(Key::Right),
            KeyCode::Enter => Some(Key::Enter),
            KeyCode::Backspace => Some(Key::Backspace),
            KeyCode::Esc => Some(Key::Escape),
            KeyCode::F(2) => Some(Key::NewFolderRequest),
            KeyCode::Char(c) => Some(Key::Char(c)),
            _ => None,
        }
    }
}

impl Drop for TermHal {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(self.out, LeaveAlternateScreen, Show);
    }
}

impl Keys for TermHal {
    fn poll(&mut self) -> Option<Key> {
        if !event::poll(Duration::from_millis(0)).unwrap_or(false) {
            return None;
        }
        match event::read() {
            Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                Self::decode(key.code, key.modifiers)
            }
            _ => None,
        }
    }
}

impl Screen for TermHal {
    fn clear(&mut self) {
        let _ = execute!(self.out, Clear(ClearType::All), MoveTo(0, 0));
    }

    fn write(&mut self, text: &str) {
        // Raw mode leaves output post-processing off, so newlines need an
        // explicit carriage return.
        let _ = queue!(self.out, Print(text.replace('\n', "\r\n")));
        let _ = self.out.flush();
    }

    fn write_highlight(&mut self, text: &str) {
        let _ = queue!(
            self.out,
            SetAttribute(Attribute::Underlined),
            Print(text.replace('\n', "\r\n")),
            SetAttribute(Attribute::Reset),
        );
        let _ = self.out.flush();
    }
}

impl Power for TermHal {
    fn is_wakeup_from_sleep(&mut self) -> bool {
        // A host process start is always a cold start.
        false
    }
}

impl Storage for TermHal {
    fn list(&mut self, path: &str) -> io::Result<Vec<String>> {
        self.card.list(path)
    }

    fn read(&mut self, path: &str) -> io::Result<Vec<u8>> {
        self.card.read(path)
    }

    fn write(&mut self, path: &str, data: &[u8]) -> io::Result<()> {
        Storage::write(&mut self.card, path, data)
    }

    fn create_file(&mut self, path: &str) -> io::Result<()> {
        self.card.create_file(path)
    }

    fn create_dir(&mut self, path: &str) -> io::Result<()> {
        self.card.create_dir(path)
    }

    fn rename(&mut self, old: &str, new: &str) -> io::Result<()> {
        self.card.rename(old, new)
    }

    fn exists(&mut self, path: &str) -> bool {
        self.card.exists(path)
    }

    fn is_dir(&mut self, path: &str) -> bool {
        self.card.is_dir(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn host_path_mapping() -> Result<(), Box<dyn std::error::Error>> {
        let tmp = tempdir()?;
        let card = CardStorage::new(tmp.path().to_path_buf());

        assert_eq!(card.host_path("/"), tmp.path());
        assert_eq!(card.host_path("/a.txt"), tmp.path().join("a.txt"));
        assert_eq!(
            card.host_path("/notes/log.txt"),
            tmp.path().join("notes/log.txt")
        );
        Ok(())
    }

    #[test]
    fn list_read_write_roundtrip() -> Result<(), Box<dyn std::error::Error>> {
        let tmp = tempdir()?;
        let mut card = CardStorage::new(tmp.path().to_path_buf());

        card.create_dir("/notes")?;
        card.create_file("/notes/a.txt")?;
        Storage::write(&mut card, "/notes/a.txt", b"hello")?;

        assert_eq!(card.read("/notes/a.txt")?, b"hello");
        assert!(card.is_dir("/notes"));
        assert!(!card.is_dir("/notes/a.txt"));

        let names = card.list("/notes")?;
        assert_eq!(names, vec!["a.txt".to_string()]);
        Ok(())
    }

    #[test]
    fn create_file_refuses_existing() -> Result<(), Box<dyn std::error::Error>> {
        let tmp = tempdir()?;
        let mut card = CardStorage::new(tmp.path().to_path_buf());

        card.create_file("/a.txt")?;
        assert!(card.create_file("/a.txt").is_err());
        Ok(())
    }

    #[test]
    fn rename_moves_entry() -> Result<(), Box<dyn std::error::Error>> {
        let tmp = tempdir()?;
        let mut card = CardStorage::new(tmp.path().to_path_buf());

        card.create_file("/old.txt")?;
        card.rename("/old.txt", "/new.txt")?;

        assert!(!card.exists("/old.txt"));
        assert!(card.exists("/new.txt"));
        Ok(())
    }

    #[test]
    fn list_missing_directory_fails() {
        let tmp = tempdir().expect("tempdir");
        let mut card = CardStorage::new(tmp.path().to_path_buf());
        assert!(card.list("/nope").is_err());
    }

    #[test]
    fn chord_decoding() {
        let none = KeyModifiers::NONE;
        let ctrl = KeyModifiers::CONTROL;

        assert_eq!(TermHal::decode(KeyCode::Up, none), Some(Key::Up));
        assert_eq!(TermHal::decode(KeyCode::Enter, none), Some(Key::Enter));
        assert_eq!(TermHal::decode(KeyCode::Char('x'), none), Some(Key::Char('x')));
        assert_eq!(
            TermHal::decode(KeyCode::Char('r'), ctrl),
            Some(Key::RenameRequest)
        );
        assert_eq!(
            TermHal::decode(KeyCode::Char('n'), ctrl),
            Some(Key::NewFileRequest)
        );
        assert_eq!(
            TermHal::decode(KeyCode::Char('s'), ctrl),
            Some(Key::SaveRequest)
        );
        assert_eq!(
            TermHal::decode(KeyCode::F(2), none),
            Some(Key::NewFolderRequest)
        );
        assert_eq!(TermHal::decode(KeyCode::Char('q'), ctrl), Some(Key::Quit));
        assert_eq!(TermHal::decode(KeyCode::Char('z'), ctrl), None);
        assert_eq!(TermHal::decode(KeyCode::Tab, none), None);
    }
}
