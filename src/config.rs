//! The config loading module for typedeck.
//!
//! Handles loading and deserializing settings from `typedeck.toml`.
//!
//! Provides the main [Config] struct, as well as the internal [RawConfig]
//! used for parsing, and default config generation for `td --init`.

pub mod general;

pub use general::General;

use serde::Deserialize;
use std::{fs, io, path::Path, path::PathBuf};

/// Raw configuration as read from the toml file.
/// Deserialized directly and then converted into the main [Config].
#[derive(Deserialize, Debug, Default)]
#[serde(default)]
pub struct RawConfig {
    general: General,
}

/// Processed configuration used throughout typedeck.
#[derive(Debug, Default)]
pub struct Config {
    general: General,
}

impl From<RawConfig> for Config {
    fn from(raw: RawConfig) -> Self {
        Self {
            general: raw.general,
        }
    }
}

impl Config {
    /// Load configuration from the default path.
    /// If the file does not exist or fails to parse, returns the default
    /// configuration.
    pub fn load() -> Self {
        let path = Self::default_path();

        if !path.exists() {
            eprintln!(
                "No typedeck.toml config file found. Using internal defaults. (Tip: run 'td --init' to generate a config file.)"
            );
            return Self::default();
        }

        match fs::read_to_string(&path) {
            Ok(content) => match toml::from_str::<RawConfig>(&content) {
                Ok(raw) => raw.into(),
                Err(e) => {
                    eprintln!("Error parsing config: {}", e);
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }

    #[inline]
    pub fn general(&self) -> &General {
        &self.general
    }

    /// Determine the default configuration file path.
    /// Checks the TYPEDECK_CONFIG environment variable first,
    /// checks XDG_CONFIG_HOME after,
    /// then defaults to ~/.config/typedeck/typedeck.toml.
    pub fn default_path() -> PathBuf {
        if let Ok(path) = std::env::var("TYPEDECK_CONFIG") {
            return PathBuf::from(path);
        }

        if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME") {
            return PathBuf::from(xdg_config).join("typedeck/typedeck.toml");
        }

        if let Some(home) = dirs::home_dir() {
            return home.join(".config/typedeck/typedeck.toml");
        }

        PathBuf::from("typedeck.toml")
    }

    /// Writes the commented default config to `path`, refusing to clobber
    /// an existing file.
    pub fn generate_default(path: &Path) -> io::Result<()> {
        if path.exists() {
            return Err(io::Error::new(
                io::ErrorKind::AlreadyExists,
                format!("config file already exists at {}", path.display()),
            ));
        }

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(path, DEFAULT_CONFIG_TEMPLATE)?;
        println!("Wrote default config to {}", path.display());
        Ok(())
    }
}

const DEFAULT_CONFIG_TEMPLATE: &str = r#"# typedeck configuration

[general]
# Host directory backing the storage card.
root = "./sdcard"

# Inter-cycle delay of the main loop, in milliseconds.
tick_ms = 16

# Cursor blink interval in milliseconds (minimum 100).
blink_ms = 500
"#;
