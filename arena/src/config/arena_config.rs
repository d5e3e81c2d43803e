use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tictactoe_common::Difficulty;
use tictactoe_common::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};

const CONFIG_FILE_NAME: &str = "tictactoe_arena.yaml";
pub const MAX_ROUNDS: u32 = 10_000;

fn default_config_path() -> PathBuf {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME);
    }
    PathBuf::from(CONFIG_FILE_NAME)
}

pub fn get_config_manager(
    path: Option<&Path>,
) -> ConfigManager<FileContentConfigProvider, ArenaConfig, YamlConfigSerializer> {
    match path {
        Some(path) => ConfigManager::from_yaml_file(path),
        None => ConfigManager::from_yaml_file(default_config_path()),
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct ArenaConfig {
    /// Tier of the engine under test.
    pub difficulty: Difficulty,
    /// Tier driving the other side in a duel.
    pub opponent: Difficulty,
    pub rounds: u32,
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Validate for ArenaConfig {
    fn validate(&self) -> Result<(), String> {
        if self.rounds == 0 || self.rounds > MAX_ROUNDS {
            return Err(format!("rounds must be between 1 and {}, got {}", MAX_ROUNDS, self.rounds));
        }
        Ok(())
    }
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::Unbeatable,
            opponent: Difficulty::Easy,
            rounds: 100,
            seed: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe_common::config::{ConfigError, ConfigSerializer, InMemoryConfigProvider};

    #[test]
    fn test_default_config_round_trips_through_yaml() {
        let serializer = YamlConfigSerializer;
        let text = serializer.serialize(&ArenaConfig::default()).unwrap();
        let parsed: ArenaConfig = serializer.deserialize(&text).unwrap();
        assert_eq!(parsed, ArenaConfig::default());
    }

    #[test]
    fn test_config_without_seed_is_accepted() {
        let content = "difficulty: Medium\nopponent: Unbeatable\nrounds: 12\n";
        let parsed: ArenaConfig = serde_yaml_ng::from_str(content).unwrap();
        assert_eq!(parsed.difficulty, Difficulty::Medium);
        assert_eq!(parsed.opponent, Difficulty::Unbeatable);
        assert_eq!(parsed.seed, None);
        assert!(parsed.validate().is_ok());
    }

    #[test]
    fn test_zero_rounds_is_invalid() {
        let provider = InMemoryConfigProvider::with_content("difficulty: Easy\nopponent: Easy\nrounds: 0\n");
        let manager: ConfigManager<_, ArenaConfig, _> = ConfigManager::new(provider, YamlConfigSerializer);
        assert!(matches!(manager.get_config(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_unknown_difficulty_is_rejected() {
        let provider = InMemoryConfigProvider::with_content("difficulty: Hard\nopponent: Easy\nrounds: 3\n");
        let manager: ConfigManager<_, ArenaConfig, _> = ConfigManager::new(provider, YamlConfigSerializer);
        assert!(matches!(manager.get_config(), Err(ConfigError::Parse(_))));
    }
}
