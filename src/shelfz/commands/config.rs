use crate::commands::{CmdMessage, CmdResult};
use crate::config::ShelfConfig;
use crate::error::{Result, ShelfError};
use std::path::Path;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

pub fn run(config_dir: &Path, action: ConfigAction) -> Result<CmdResult> {
    match action {
        ConfigAction::ShowAll => {
            let config = ShelfConfig::load(config_dir)?;
            Ok(CmdResult::default().with_config(config))
        }
        ConfigAction::ShowKey(key) => {
            let config = ShelfConfig::load(config_dir)?;
            let val = config
                .get(&key)
                .ok_or_else(|| ShelfError::Api(format!("Unknown config key: {}", key)))?;
            let mut result = CmdResult::default();
            result.add_message(CmdMessage::info(val));
            Ok(result)
        }
        ConfigAction::Set(key, value) => {
            let mut config = ShelfConfig::load(config_dir)?;
            config.set(&key, &value).map_err(ShelfError::Api)?;
            config.save(config_dir)?;
            let display_val = config.get(&key).unwrap_or_else(|| value.clone());
            let mut result = CmdResult::default().with_config(config);
            result.add_message(CmdMessage::success(format!(
                "{} set to {}",
                key, display_val
            )));
            Ok(result)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_then_show_round_trips() {
        let dir = tempfile::tempdir().unwrap();

        run(
            dir.path(),
            ConfigAction::Set("collapsed-rows".into(), "7".into()),
        )
        .unwrap();

        let result = run(dir.path(), ConfigAction::ShowAll).unwrap();
        assert_eq!(result.config.unwrap().collapsed_rows, 7);
    }

    #[test]
    fn unknown_key_is_an_error() {
        let dir = tempfile::tempdir().unwrap();

        let err = run(dir.path(), ConfigAction::ShowKey("bogus".into())).unwrap_err();
        assert!(err.to_string().contains("Unknown config key"));

        let err = run(
            dir.path(),
            ConfigAction::Set("bogus".into(), "1".into()),
        )
        .unwrap_err();
        assert!(err.to_string().contains("Unknown config key"));
    }

    #[test]
    fn invalid_value_fails_and_does_not_persist() {
        let dir = tempfile::tempdir().unwrap();
        let result = run(
            dir.path(),
            ConfigAction::Set("collapsed-rows".into(), "zero".into()),
        );
        assert!(result.is_err());

        let config = ShelfConfig::load(dir.path()).unwrap();
        assert_eq!(config.collapsed_rows, 5);
    }
}
