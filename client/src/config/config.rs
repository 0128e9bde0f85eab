use common::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use common::tictactoe::{BotType, Player};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

const CONFIG_FILE_NAME: &str = "tictactoe_config.yaml";

fn default_config_path() -> PathBuf {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME);
    }
    PathBuf::from(CONFIG_FILE_NAME)
}

pub fn get_config_manager(
    path: Option<PathBuf>,
) -> ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer> {
    ConfigManager::from_yaml_file(path.unwrap_or_else(default_config_path))
}

/// Missing keys fall back to the defaults.
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct Config {
    pub bot: BotType,
    pub human_symbol: char,
    pub computer_symbol: char,
    pub seed: Option<u64>,
}

impl Config {
    pub fn symbol(&self, player: Player) -> char {
        match player {
            Player::Human => self.human_symbol,
            Player::Computer => self.computer_symbol,
        }
    }
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        if self.human_symbol.is_whitespace() || self.computer_symbol.is_whitespace() {
            return Err("player symbols must not be blank".to_string());
        }
        // Empty cells are drawn as their index.
        if self.human_symbol.is_ascii_digit() || self.computer_symbol.is_ascii_digit() {
            return Err("player symbols must not be digits".to_string());
        }
        if self.human_symbol == self.computer_symbol {
            return Err(format!(
                "human and computer symbols must differ, both are '{}'",
                self.human_symbol
            ));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bot: BotType::Minimax,
            human_symbol: Player::Human.default_symbol(),
            computer_symbol: Player::Computer.default_symbol(),
            seed: None,
        }
    }
}
