//! Application controller and models for typedeck.
//!
//! This module holds the interactive core of the deck:
//! - [state]: the [App] state machine and its per-cycle driver.
//! - [handlers]: the per-mode key handlers and commit operations.
//! - [nav]: the breadcrumb column explorer (see [NavState]).
//! - [editor]: the bounded single-file edit buffer (see [EditorState]).
//! - [prompt]: the modal input line behind rename/new-folder/new-file.
//!
//! Most callers construct an [App] over a HAL implementation and drive it
//! with [App::run_cycle].

pub mod editor;
pub mod handlers;
pub mod nav;
pub mod prompt;
pub mod state;

pub use editor::{EditorState, MAX_CONTENT};
pub use nav::{DirectoryColumn, MAX_COLUMNS, MAX_ENTRIES, NavState, OpenOutcome};
pub use prompt::{MAX_INPUT, PromptState};
pub use state::{App, CycleOutcome, Mode};
