use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::Validate;

pub const DEFAULT_CONFIG_FILE: &str = "tictactoe_config.yaml";

fn default_colored_output() -> bool {
    true
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct GameConfig {
    /// Where an interrupted game is written and resumed from.
    pub save_file: PathBuf,
    pub scoreboard_file: PathBuf,
    #[serde(default = "default_colored_output")]
    pub colored_output: bool,
}

impl Validate for GameConfig {
    fn validate(&self) -> Result<(), String> {
        if self.save_file.as_os_str().is_empty() {
            return Err("save_file must not be empty".to_string());
        }
        if self.scoreboard_file.as_os_str().is_empty() {
            return Err("scoreboard_file must not be empty".to_string());
        }
        if self.save_file == self.scoreboard_file {
            return Err(format!(
                "save_file and scoreboard_file must differ, both are {}",
                self.save_file.display()
            ));
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            save_file: PathBuf::from("game_state.txt"),
            scoreboard_file: PathBuf::from("scoreboard.txt"),
            colored_output: default_colored_output(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{
        ConfigContentProvider, ConfigManager, ConfigSerializer, FileContentConfigProvider,
        YamlConfigSerializer,
    };

    fn get_temp_file_path() -> PathBuf {
        let random_number: u32 = rand::random();
        std::env::temp_dir().join(format!("temp_tictactoe_config_{}.yaml", random_number))
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(GameConfig::default().validate().is_ok());
    }

    #[test]
    fn test_default_config_can_be_serialized_and_deserialized_string() {
        let default_config = GameConfig::default();
        let serializer = YamlConfigSerializer::new();

        let serialized_string = serializer.serialize(&default_config).unwrap();
        let deserialized_config: GameConfig = serializer.deserialize(&serialized_string).unwrap();

        assert_eq!(default_config, deserialized_config);
    }

    #[test]
    fn test_config_can_be_saved_and_loaded_by_manager() {
        let config = GameConfig {
            save_file: PathBuf::from("saves/current.txt"),
            scoreboard_file: PathBuf::from("saves/scores.txt"),
            colored_output: false,
        };
        let file_path = get_temp_file_path();
        let manager = ConfigManager::from_yaml_file(&file_path);

        manager.set_config(&config).unwrap();
        let loaded_config = manager.get_config().unwrap();
        let loaded_again = manager.get_config().unwrap();

        let reloaded: GameConfig = ConfigManager::from_yaml_file(&file_path).get_config().unwrap();
        std::fs::remove_file(&file_path).unwrap();

        assert_eq!(config, loaded_config);
        assert_eq!(config, loaded_again);
        assert_eq!(config, reloaded);
    }

    #[test]
    fn test_config_file_does_not_exist_returns_default_config() {
        let content_provider = FileContentConfigProvider::new("this_file_does_not_exist.yaml");
        let manager: ConfigManager<_, GameConfig, _> =
            ConfigManager::new(content_provider, YamlConfigSerializer::new());

        assert_eq!(manager.get_config().unwrap(), GameConfig::default());
    }

    #[test]
    fn test_get_or_init_writes_defaults() {
        let file_path = get_temp_file_path();
        let manager: ConfigManager<_, GameConfig, _> = ConfigManager::from_yaml_file(&file_path);

        let config = manager.get_or_init_config().unwrap();
        let written = FileContentConfigProvider::new(&file_path)
            .get_config_content()
            .unwrap();
        std::fs::remove_file(&file_path).unwrap();

        assert_eq!(config, GameConfig::default());
        assert!(written.unwrap().contains("scoreboard_file: scoreboard.txt"));
    }

    #[test]
    fn test_colored_output_defaults_when_omitted() {
        let content = "save_file: a.txt\nscoreboard_file: b.txt\n";

        let config: GameConfig = YamlConfigSerializer::new().deserialize(content).unwrap();

        assert!(config.colored_output);
    }

    #[test]
    fn test_invalid_config_cant_be_read() {
        let invalid_config_content = r#"
            save_file: same.txt
            scoreboard_file: same.txt
        "#;

        let file_path = get_temp_file_path();
        let content_provider = FileContentConfigProvider::new(&file_path);
        content_provider
            .set_config_content(invalid_config_content)
            .unwrap();

        let manager: ConfigManager<_, GameConfig, _> =
            ConfigManager::new(content_provider, YamlConfigSerializer::new());
        let get_result = manager.get_config();
        std::fs::remove_file(&file_path).unwrap();

        assert!(get_result.is_err());
    }

    #[test]
    fn test_missing_field_cant_be_read() {
        let serializer = YamlConfigSerializer::new();

        let result: Result<GameConfig, String> = serializer.deserialize("save_file: a.txt\n");

        assert!(result.is_err());
    }
}
