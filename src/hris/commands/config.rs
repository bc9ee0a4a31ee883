use crate::commands::{CmdMessage, CmdResult};
use crate::config::{HrisConfig, CONFIG_KEYS};
use crate::error::Result;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

pub fn run(config_dir: &Path, action: ConfigAction) -> Result<CmdResult> {
    let mut config = HrisConfig::load(config_dir)?;

    match action {
        ConfigAction::ShowAll => {
            let values = CONFIG_KEYS
                .iter()
                .map(|key| Ok((key.to_string(), config.get(key)?)))
                .collect::<Result<Vec<_>>>()?;
            Ok(CmdResult::default().with_config_values(values))
        }
        ConfigAction::ShowKey(key) => {
            let value = config.get(&key)?;
            Ok(CmdResult::default().with_config_values(vec![(key, value)]))
        }
        ConfigAction::Set(key, value) => {
            config.set(&key, &value)?;
            config.save(config_dir)?;
            tracing::info!(key = %key, "config updated");
            let stored = config.get(&key)?;
            Ok(CmdResult::default()
                .with_message(CmdMessage::success(format!("{} set to {}", key, stored))))
        }
    }
}
