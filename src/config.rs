//! Launcher configuration: TOML file under the user config dir, with
//! environment overrides.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

const APP_NAME: &str = "menulaunch";

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TerminalConfig {
    /// Terminal emulator used for programs that need a tty.
    pub program: String,
    /// Flag that makes `program` run the following command.
    pub exec_flag: String,
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self {
            program: "gnome-terminal".into(),
            exec_flag: "-e".into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub menu_dirs: Vec<PathBuf>,
    pub desktop_dirs: Vec<PathBuf>,
    pub terminal: TerminalConfig,
    /// Show the whole catalog before anything is typed.
    pub list_all_on_empty_query: bool,
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        let mut desktop_dirs = vec![PathBuf::from("/usr/share/applications")];
        if let Some(data) = dirs::data_dir() {
            desktop_dirs.push(data.join("applications"));
        }
        Self {
            menu_dirs: vec![PathBuf::from("/usr/share/menu")],
            desktop_dirs,
            terminal: TerminalConfig::default(),
            list_all_on_empty_query: true,
            log_file: None,
        }
    }
}

impl Config {
    /// Load from `MENULAUNCH_CONFIG` or the default path, then apply env overrides.
    /// A missing file means defaults.
    pub fn load() -> Result<Self> {
        let path = std::env::var_os("MENULAUNCH_CONFIG")
            .map(PathBuf::from)
            .or_else(Self::default_path);
        let mut config = match path {
            Some(path) if path.exists() => Self::from_file(&path)?,
            _ => Self::default(),
        };
        if let Ok(program) = std::env::var("MENULAUNCH_TERMINAL") {
            if !program.trim().is_empty() {
                config.terminal.program = program;
            }
        }
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        toml::from_str(&content).with_context(|| format!("parsing config {}", path.display()))
    }

    fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_NAME).join("config.toml"))
    }

    /// Where logs go; stdout belongs to the TUI.
    pub fn log_path(&self) -> PathBuf {
        self.log_file.clone().unwrap_or_else(|| {
            dirs::cache_dir()
                .unwrap_or_else(std::env::temp_dir)
                .join(APP_NAME)
                .join(format!("{APP_NAME}.log"))
        })
    }
}
