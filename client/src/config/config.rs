use std::path::{Path, PathBuf};

use minigames_common::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use minigames_common::games::tictactoe::TicTacToeOptions;
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = "tictactoe_config.yaml";

/// Config file next to the executable, or in the working directory when the
/// executable path is unknown.
pub fn get_config_path() -> PathBuf {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME);
    }
    PathBuf::from(CONFIG_FILE_NAME)
}

pub fn get_config_manager(
    path: Option<&Path>,
) -> ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer> {
    match path {
        Some(path) => ConfigManager::from_yaml_file(path),
        None => ConfigManager::from_yaml_file(get_config_path()),
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Config {
    pub tictactoe: TicTacToeOptions,
    /// Fixed bot seed; a fresh one is drawn per run when absent.
    pub seed: Option<u64>,
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        self.tictactoe.validate()
    }
}
