//! main.rs
//! Entry point for typedeck

pub(crate) mod app;
pub(crate) mod config;
pub(crate) mod hal;
pub(crate) mod ui;
pub(crate) mod utils;

use crate::app::{App, CycleOutcome};
use crate::config::Config;
use crate::hal::term::TermHal;
use crate::utils::cli::{CliAction, handle_args};

use std::path::PathBuf;

fn main() -> std::io::Result<()> {
    std::panic::set_hook(Box::new(|info| {
        let _ = crossterm::terminal::disable_raw_mode();
        let mut stdout = std::io::stdout();
        let _ = crossterm::execute!(
            stdout,
            crossterm::terminal::LeaveAlternateScreen,
            crossterm::cursor::Show
        );

        eprintln!("\n[typedeck] Error occurred: {}", info);

        #[cfg(debug_assertions)]
        {
            let bt = std::backtrace::Backtrace::force_capture();
            eprintln!("\nStack Backtrace:\n{}", bt);
        }
    }));

    let action = handle_args();

    if let CliAction::Exit = action {
        return Ok(());
    }

    let config = Config::load();

    let root = match action {
        CliAction::Run => PathBuf::from(config.general().root()),
        CliAction::RunAtRoot(path_arg) => PathBuf::from(path_arg),
        _ => unreachable!(),
    };

    if let Err(e) = std::fs::create_dir_all(&root) {
        eprintln!(
            "[typedeck] Error: storage root '{}' cannot be used: {}",
            root.display(),
            e
        );
        std::process::exit(1);
    }

    let tick = config.general().tick();
    let hal = TermHal::new(root)?;

    let mut deck = App::new(hal, &config);
    deck.init();

    loop {
        if let CycleOutcome::Quit = deck.run_cycle() {
            break;
        }
        std::thread::sleep(tick);
    }

    Ok(())
}
