use common::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use common::games::DEFAULT_PACING_MS;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::PlayerConfig;

const CONFIG_FILE_NAME: &str = "tictactoe_config.yaml";

fn get_config_path() -> PathBuf {
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
    ConfigManager::from_yaml_file(path.unwrap_or_else(get_config_path))
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Config {
    /// The first entry moves first and plays code 1, the second plays code -1.
    pub players: [PlayerConfig; 2],
    pub pacing_ms: i64,
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        let [first, second] = &self.players;
        first.validate()?;
        second.validate()?;
        if first.token == second.token {
            return Err(format!("players must use different tokens, both use '{}'", first.token));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            players: [PlayerConfig::new("Alice", "X"), PlayerConfig::new("Bob", "O")],
            pacing_ms: DEFAULT_PACING_MS as i64,
            seed: None,
        }
    }
}
