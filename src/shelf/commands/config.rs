use crate::commands::{CmdMessage, CmdResult, ShelfPaths};
use crate::config::ShelfConfig;
use crate::error::{Result, ShelfError};

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

/// Unknown keys and rejected values are `ShelfError::Api`; nothing is saved then.
pub fn run(paths: &ShelfPaths, action: ConfigAction) -> Result<CmdResult> {
    let mut config = ShelfConfig::load(&paths.data_dir)?;

    match action {
        ConfigAction::ShowAll => Ok(CmdResult::default().with_config(config)),
        ConfigAction::ShowKey(key) => {
            let value = lookup(&config, &key)?;
            let mut result = CmdResult::default();
            result.add_message(CmdMessage::info(value));
            Ok(result)
        }
        ConfigAction::Set(key, value) => {
            config.set(&key, &value).map_err(ShelfError::Api)?;
            config.save(&paths.data_dir)?;
            tracing::info!(%key, %value, "config updated");

            let stored = lookup(&config, &key)?;
            let mut result = CmdResult::default();
            result.add_message(CmdMessage::success(format!("{} set to {}", key, stored)));
            Ok(result.with_config(config))
        }
    }
}

fn lookup(config: &ShelfConfig, key: &str) -> Result<String> {
    config
        .get(key)
        .ok_or_else(|| ShelfError::Api(format!("Unknown config key: {}", key)))
}
