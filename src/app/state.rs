//! Application state machine and main controller for typedeck.
//!
//! [App] owns the HAL and every model — explorer columns, edit buffer,
//! modal prompt, blink timer — and is the only thing that mutates them.
//! Exactly one [Mode] is active at a time; it selects which handler
//! receives keys and which screen a blink tick redraws.
//!
//! The external loop calls [App::run_cycle] once per tick: the cycle
//! first services the cursor blink (a pure elapsed-time check, never a
//! state transition), then polls at most one key and dispatches it.
//! Nothing in here blocks.

use crate::app::editor::EditorState;
use crate::app::nav::NavState;
use crate::app::prompt::PromptState;
use crate::config::Config;
use crate::hal::{Hal, Screen};
use crate::ui;

use std::time::{Duration, Instant};

/// The virtual root of the storage card.
pub const ROOT_PATH: &str = "/";

/// The active mode of the controller. Selects the key handler and the
/// screen redrawn on blink ticks. `Normal` is the resting state; every
/// other mode returns to it on commit, cancel, or save/exit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Normal,
    Rename,
    NewFolder,
    NewFile,
    Editing,
}

/// What the loop owner should do after a cycle. The device build loops
/// forever; only the host quit chord ever produces `Quit`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleOutcome {
    Continue,
    Quit,
}

/// The central controller: all mutable application state in one owned
/// object, constructed fresh per process (and per test).
pub struct App<H: Hal> {
    pub(super) hal: H,
    pub(super) nav: NavState,
    pub(super) editor: EditorState,
    pub(super) prompt: PromptState,
    pub(super) mode: Mode,
    pub(super) cursor_visible: bool,
    pub(super) last_toggle: Instant,
    blink_interval: Duration,
}

impl<H: Hal> App<H> {
    pub fn new(hal: H, config: &Config) -> Self {
        Self {
            hal,
            nav: NavState::new(),
            editor: EditorState::new(),
            prompt: PromptState::new(),
            mode: Mode::Normal,
            cursor_visible: true,
            last_toggle: Instant::now(),
            blink_interval: config.general().blink(),
        }
    }

    // Getters / accessors

    #[inline]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    #[inline]
    pub fn nav(&self) -> &NavState {
        &self.nav
    }

    #[inline]
    pub fn editor(&self) -> &EditorState {
        &self.editor
    }

    #[inline]
    pub fn prompt(&self) -> &PromptState {
        &self.prompt
    }

    #[inline]
    pub fn hal(&self) -> &H {
        &self.hal
    }

    #[inline]
    pub fn hal_mut(&mut self) -> &mut H {
        &mut self.hal
    }

    /// Writes a one-line report to the display. `Storage` and `Screen`
    /// both have a `write`, so the screen one is picked explicitly.
    pub(super) fn report(&mut self, msg: &str) {
        Screen::write(&mut self.hal, msg);
    }

    /// Startup: greet, list the card root into column 0, draw the
    /// explorer. Call once before the first [App::run_cycle].
    pub fn init(&mut self) {
        self.hal.clear();
        if self.hal.is_wakeup_from_sleep() {
            self.report("Woke from sleep\n");
        } else {
            self.report("Cold start\n");
        }

        self.nav.load_root(&mut self.hal, ROOT_PATH);
        ui::draw_columns(&mut self.hal, &self.nav);
        self.reset_blink();
    }

    /// One cooperative cycle: blink upkeep, then at most one key.
    pub fn run_cycle(&mut self) -> CycleOutcome {
        if self.last_toggle.elapsed() >= self.blink_interval {
            self.cursor_visible = !self.cursor_visible;
            self.last_toggle = Instant::now();
            self.redraw();
        }

        let Some(key) = self.hal.poll() else {
            return CycleOutcome::Continue;
        };

        match self.mode {
            Mode::Normal => self.handle_normal_key(key),
            Mode::Editing => {
                self.handle_editor_key(key);
                CycleOutcome::Continue
            }
            Mode::Rename | Mode::NewFolder | Mode::NewFile => {
                self.handle_prompt_key(key);
                CycleOutcome::Continue
            }
        }
    }

    /// Redraws the active mode's screen from current state.
    pub(super) fn redraw(&mut self) {
        match self.mode {
            Mode::Normal => ui::draw_columns(&mut self.hal, &self.nav),
            Mode::Rename => {
                let item = self.nav.selected_name().unwrap_or_default();
                ui::draw_rename(&mut self.hal, item, self.prompt.as_str());
            }
            Mode::NewFolder => ui::draw_new_folder(&mut self.hal, self.prompt.as_str()),
            Mode::NewFile => ui::draw_new_file(&mut self.hal, self.prompt.as_str()),
            Mode::Editing => ui::draw_editor(&mut self.hal, &self.editor, self.cursor_visible),
        }
    }

    /// Switches mode and restarts the blink phase, so a freshly drawn
    /// screen always starts with a visible cursor.
    pub(super) fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
        self.reset_blink();
    }

    fn reset_blink(&mut self) {
        self.cursor_visible = true;
        self.last_toggle = Instant::now();
    }
}
