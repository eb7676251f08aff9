//! Hardware abstraction layer for typedeck.
//!
//! The control core never touches hardware directly. Everything it needs —
//! decoded keys, the character display, the storage card, power state — is
//! reached through the capability traits in this module. The development
//! host implements them in [term] on top of a terminal and a host
//! directory; the device firmware provides its own implementations.
//!
//! Storage paths are virtual absolute paths (`/`, `/notes/log.txt`); how
//! they map onto a real medium is the implementation's business.

pub mod term;

use std::io;

/// A decoded key event.
///
/// This is the closed input vocabulary of the device: navigation keys,
/// edit keys, printable characters, and the named control chords. `Quit`
/// only exists on the host build; the device keypad never produces it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Enter,
    Backspace,
    Escape,
    Char(char),
    RenameRequest,
    NewFileRequest,
    NewFolderRequest,
    SaveRequest,
    Quit,
}

/// Storage card access.
///
/// Every operation is synchronous and bounded; a failure is an ordinary
/// `Err` the caller reports once and moves on from. Nothing here retries.
pub trait Storage {
    /// Lists the entry names of a directory, in the medium's own order.
    fn list(&mut self, path: &str) -> io::Result<Vec<String>>;

    /// Reads a whole file.
    fn read(&mut self, path: &str) -> io::Result<Vec<u8>>;

    /// Writes `data` to `path`, replacing any previous content.
    fn write(&mut self, path: &str, data: &[u8]) -> io::Result<()>;

    /// Creates an empty file. Fails if `path` already exists.
    fn create_file(&mut self, path: &str) -> io::Result<()>;

    /// Creates a directory.
    fn create_dir(&mut self, path: &str) -> io::Result<()>;

    /// Renames an entry.
    fn rename(&mut self, old: &str, new: &str) -> io::Result<()>;

    fn exists(&mut self, path: &str) -> bool;

    fn is_dir(&mut self, path: &str) -> bool;
}

/// The character display.
///
/// The display is a write-only text stream with no layout of its own.
/// `write_highlight` renders text emphasized (the cursor cell in the
/// editor); which escape codes or display commands that takes is up to
/// the implementation.
pub trait Screen {
    fn clear(&mut self);

    fn write(&mut self, text: &str);

    fn write_highlight(&mut self, text: &str);
}

/// The keypad.
pub trait Keys {
    /// Returns the next decoded key, or `None` when nothing is pressed.
    /// Never blocks.
    fn poll(&mut self) -> Option<Key>;
}

/// Power and lifecycle state.
pub trait Power {
    /// Whether this boot is a resume from sleep rather than a cold start.
    /// Consulted once at startup to pick the greeting.
    fn is_wakeup_from_sleep(&mut self) -> bool;
}

/// The full hardware surface, as one bound for the application core.
pub trait Hal: Storage + Screen + Keys + Power {}

impl<T: Storage + Screen + Keys + Power> Hal for T {}
