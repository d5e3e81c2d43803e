use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Mutex;

use super::{
    ConfigContentProvider, ConfigError, ConfigSerializer, FileContentConfigProvider, Validate,
    YamlConfigSerializer,
};

/// Loads, validates and caches a config of type `TConfig`.
///
/// The first successful `get_config` is cached; `set_config` writes through
/// and replaces the cached value. A provider with no content yields
/// `TConfig::default()` without caching it, so a config written later by
/// another process is still picked up.
pub struct ConfigManager<TConfigContentProvider, TConfig, TConfigSerializer = YamlConfigSerializer>
where
    TConfigContentProvider: ConfigContentProvider,
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
    TConfigSerializer: ConfigSerializer<TConfig>,
{
    config_serializer: TConfigSerializer,
    config_content_provider: TConfigContentProvider,
    config: Mutex<Option<TConfig>>,
}

impl<TConfig> ConfigManager<FileContentConfigProvider, TConfig, YamlConfigSerializer>
where
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
{
    pub fn from_yaml_file(file_path: impl AsRef<Path>) -> Self {
        Self::new(
            FileContentConfigProvider::new(file_path.as_ref()),
            YamlConfigSerializer,
        )
    }
}

impl<TConfigContentProvider, TConfig, TConfigSerializer>
    ConfigManager<TConfigContentProvider, TConfig, TConfigSerializer>
where
    TConfigContentProvider: ConfigContentProvider,
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
    TConfigSerializer: ConfigSerializer<TConfig>,
{
    pub fn new(config_content_provider: TConfigContentProvider, config_serializer: TConfigSerializer) -> Self {
        Self {
            config: Mutex::new(None),
            config_content_provider,
            config_serializer,
        }
    }

    pub fn get_config(&self) -> Result<TConfig, ConfigError> {
        let mut current = self.config.lock().unwrap_or_else(|e| e.into_inner());

        if let Some(config) = current.as_ref() {
            return Ok(config.clone());
        }

        let Some(config_data) = self.config_content_provider.get_config_content()? else {
            return Ok(TConfig::default());
        };

        let config = self.config_serializer.deserialize(&config_data)?;
        config.validate().map_err(ConfigError::Invalid)?;

        *current = Some(config.clone());
        Ok(config)
    }

    pub fn set_config(&self, config: &TConfig) -> Result<(), ConfigError> {
        config.validate().map_err(ConfigError::Invalid)?;

        let serialized_config = self.config_serializer.serialize(config)?;
        self.config_content_provider.set_config_content(&serialized_config)?;

        let mut current = self.config.lock().unwrap_or_else(|e| e.into_inner());
        *current = Some(config.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::InMemoryConfigProvider;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct SampleConfig {
        rounds: u32,
        label: String,
    }

    impl Default for SampleConfig {
        fn default() -> Self {
            Self { rounds: 3, label: "default".to_string() }
        }
    }

    impl Validate for SampleConfig {
        fn validate(&self) -> Result<(), String> {
            if self.rounds == 0 {
                return Err("rounds must be positive".to_string());
            }
            Ok(())
        }
    }

    fn get_temp_file_path() -> std::path::PathBuf {
        let random_number: u32 = rand::random();
        std::env::temp_dir().join(format!("temp_tictactoe_config_{}.yaml", random_number))
    }

    #[test]
    fn test_missing_content_returns_default() {
        let manager: ConfigManager<_, SampleConfig, _> =
            ConfigManager::new(InMemoryConfigProvider::default(), YamlConfigSerializer);
        assert_eq!(manager.get_config().unwrap(), SampleConfig::default());
    }

    #[test]
    fn test_missing_file_returns_default() {
        let manager: ConfigManager<_, SampleConfig, _> =
            ConfigManager::from_yaml_file("this_file_does_not_exist.yaml");
        assert_eq!(manager.get_config().unwrap(), SampleConfig::default());
    }

    #[test]
    fn test_config_saved_to_file_can_be_loaded_again() {
        let path = get_temp_file_path();
        let config = SampleConfig { rounds: 42, label: "saved".to_string() };

        let manager: ConfigManager<_, SampleConfig, _> = ConfigManager::from_yaml_file(&path);
        manager.set_config(&config).unwrap();

        let fresh: ConfigManager<_, SampleConfig, _> = ConfigManager::from_yaml_file(&path);
        assert_eq!(fresh.get_config().unwrap(), config);

        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn test_invalid_config_cant_be_read() {
        let provider = InMemoryConfigProvider::with_content("rounds: 0\nlabel: broken\n");
        let manager: ConfigManager<_, SampleConfig, _> = ConfigManager::new(provider, YamlConfigSerializer);
        assert!(matches!(manager.get_config(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_malformed_yaml_is_a_parse_error() {
        let provider = InMemoryConfigProvider::with_content("rounds: [not a number");
        let manager: ConfigManager<_, SampleConfig, _> = ConfigManager::new(provider, YamlConfigSerializer);
        assert!(matches!(manager.get_config(), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_invalid_config_cant_be_saved() {
        let manager: ConfigManager<_, SampleConfig, _> =
            ConfigManager::new(InMemoryConfigProvider::default(), YamlConfigSerializer);
        let invalid = SampleConfig { rounds: 0, label: String::new() };
        assert!(manager.set_config(&invalid).is_err());
        assert_eq!(manager.get_config().unwrap(), SampleConfig::default());
    }

    #[test]
    fn test_loaded_config_is_cached() {
        let provider = InMemoryConfigProvider::with_content("rounds: 7\nlabel: cached\n");
        let manager: ConfigManager<_, SampleConfig, _> = ConfigManager::new(provider, YamlConfigSerializer);
        let first = manager.get_config().unwrap();
        manager
            .config_content_provider
            .set_config_content("rounds: 9\nlabel: changed\n")
            .unwrap();
        assert_eq!(manager.get_config().unwrap(), first);
    }
}
