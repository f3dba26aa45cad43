use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::{
    ConfigContentProvider, ConfigError, ConfigSerializer, FileContentConfigProvider, Validate,
    YamlConfigSerializer,
};

/// Loads and stores a validated config through a content provider and a serializer.
pub struct ConfigManager<TConfigContentProvider, TConfig, TConfigSerializer = YamlConfigSerializer>
where
    TConfigContentProvider: ConfigContentProvider,
    TConfig: for<'de> Deserialize<'de> + Serialize + Validate + Default,
    TConfigSerializer: ConfigSerializer<TConfig>,
{
    config_serializer: TConfigSerializer,
    config_content_provider: TConfigContentProvider,
    _config: std::marker::PhantomData<TConfig>,
}

impl<TConfig> ConfigManager<FileContentConfigProvider, TConfig, YamlConfigSerializer>
where
    TConfig: for<'de> Deserialize<'de> + Serialize + Validate + Default,
{
    pub fn from_yaml_file(file_path: impl Into<PathBuf>) -> Self {
        Self::new(
            FileContentConfigProvider::new(file_path),
            YamlConfigSerializer::new(),
        )
    }
}

impl<TConfigContentProvider, TConfig, TConfigSerializer>
    ConfigManager<TConfigContentProvider, TConfig, TConfigSerializer>
where
    TConfigContentProvider: ConfigContentProvider,
    TConfig: for<'de> Deserialize<'de> + Serialize + Validate + Default,
    TConfigSerializer: ConfigSerializer<TConfig>,
{
    pub fn new(
        config_content_provider: TConfigContentProvider,
        config_serializer: TConfigSerializer,
    ) -> Self {
        Self {
            config_serializer,
            config_content_provider,
            _config: std::marker::PhantomData,
        }
    }

    /// Returns the stored config, or `None` when nothing has been stored yet.
    pub fn load_config(&self) -> Result<Option<TConfig>, ConfigError> {
        let Some(content) = self.config_content_provider.get_config_content()? else {
            return Ok(None);
        };

        let config = self.config_serializer.deserialize(&content)?;
        config.validate().map_err(ConfigError::Validation)?;
        Ok(Some(config))
    }

    pub fn get_config(&self) -> Result<TConfig, ConfigError> {
        Ok(self.load_config()?.unwrap_or_default())
    }

    pub fn set_config(&self, config: &TConfig) -> Result<(), ConfigError> {
        config.validate().map_err(ConfigError::Validation)?;

        let serialized_config = self.config_serializer.serialize(config)?;
        self.config_content_provider
            .set_config_content(&serialized_config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
    struct PacingConfig {
        pacing_ms: i64,
    }

    impl Validate for PacingConfig {
        fn validate(&self) -> Result<(), String> {
            if self.pacing_ms > 60_000 {
                return Err("pacing_ms must not exceed one minute".to_string());
            }
            Ok(())
        }
    }

    #[derive(Default)]
    struct MemoryContentProvider {
        content: RefCell<Option<String>>,
    }

    impl ConfigContentProvider for MemoryContentProvider {
        fn get_config_content(&self) -> Result<Option<String>, ConfigError> {
            Ok(self.content.borrow().clone())
        }

        fn set_config_content(&self, content: &str) -> Result<(), ConfigError> {
            *self.content.borrow_mut() = Some(content.to_string());
            Ok(())
        }
    }

    fn memory_manager() -> ConfigManager<MemoryContentProvider, PacingConfig> {
        ConfigManager::new(MemoryContentProvider::default(), YamlConfigSerializer::new())
    }

    #[test]
    fn test_missing_content_returns_default() {
        let manager = memory_manager();
        assert!(manager.load_config().unwrap().is_none());
        assert_eq!(manager.get_config().unwrap(), PacingConfig::default());
    }

    #[test]
    fn test_stored_config_is_returned() {
        let manager = memory_manager();
        manager.set_config(&PacingConfig { pacing_ms: 250 }).unwrap();
        assert_eq!(manager.get_config().unwrap(), PacingConfig { pacing_ms: 250 });
    }

    #[test]
    fn test_invalid_config_is_not_stored() {
        let manager = memory_manager();
        let result = manager.set_config(&PacingConfig { pacing_ms: 120_000 });
        assert!(matches!(result, Err(ConfigError::Validation(_))));
        assert!(manager.load_config().unwrap().is_none());
    }

    #[test]
    fn test_invalid_stored_content_is_rejected() {
        let manager = memory_manager();
        manager
            .config_content_provider
            .set_config_content("pacing_ms: 999999\n")
            .unwrap();
        assert!(matches!(manager.get_config(), Err(ConfigError::Validation(_))));

        manager
            .config_content_provider
            .set_config_content("pacing_ms: [not a number]\n")
            .unwrap();
        assert!(matches!(manager.get_config(), Err(ConfigError::Deserialize(_))));
    }
}
