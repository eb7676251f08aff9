//! Command-line argument parsing and help for typedeck.
//!
//! This module handles the small flag surface used for config
//! initialization and help.
//!
//! When invoked with no args/flags (td), typedeck launches against the
//! storage root from the config file.

use crate::config::Config;

pub enum CliAction {
    Run,
    RunAtRoot(String),
    Exit,
}

pub fn handle_args() -> CliAction {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        return CliAction::Run;
    }

    if args.len() > 2 {
        eprintln!("Error: td accepts only one argument at a time.");
        eprintln!("Usage: td [ROOT] or td [OPTION]");
        return CliAction::Exit;
    }

    match args[1].as_str() {
        "--version" | "-v" => {
            print_version();
            CliAction::Exit
        }
        "-h" | "--help" => {
            print_help();
            CliAction::Exit
        }
        "--init" => {
            if let Err(e) = Config::generate_default(&Config::default_path()) {
                eprintln!("Error: {}", e);
            }
            CliAction::Exit
        }
        arg if !arg.starts_with('-') && !arg.trim().is_empty() => {
            CliAction::RunAtRoot(arg.to_string())
        }
        arg => {
            eprintln!("Unknown argument: {}", arg);
            eprintln!("Try --help for available options");
            CliAction::Exit
        }
    }
}

fn print_version() {
    println!("typedeck {}", env!("CARGO_PKG_VERSION"));
}

fn print_help() {
    println!(
        r#"typedeck - control core for the typedeck cyberdeck

USAGE:
  td [ROOT]

ROOT:
  Host directory backing the storage card (defaults to the configured
  root, ./sdcard out of the box)

OPTIONS:
      --init              Generate a default configuration file
  -h, --help              Print help information
  -v, --version           Display the current installed version

KEYS:
  Up/Down                 Move the selection in the focused column
  Right/Enter             Open the selected folder or file
  Left                    Go back one column
  Ctrl+R                  Rename the selected entry
  Ctrl+N                  Create a new file
  F2                      Create a new folder
  Ctrl+S                  Save the open file
  Esc                     Cancel / leave the editor
  Ctrl+Q                  Quit (host build only)

ENVIRONMENT:
  TYPEDECK_CONFIG         Override the default config path
"#
    );
}
