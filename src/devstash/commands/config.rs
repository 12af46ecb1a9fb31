use crate::commands::{CmdMessage, CmdResult};
use crate::config::{ConfigKey, Settings};
use crate::error::Result;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigAction {
    Get(ConfigKey),
    Set(ConfigKey, String),
    Path,
}

pub fn run(settings: &Settings, action: ConfigAction) -> Result<CmdResult> {
    match action {
        ConfigAction::Get(key) => {
            let value = settings.get(key);
            if value.is_empty() {
                let mut result = CmdResult::default();
                result.add_message(CmdMessage::warning(format!(
                    "No value set for key '{}'",
                    key
                )));
                Ok(result)
            } else {
                Ok(CmdResult::default().with_value(value))
            }
        }
        ConfigAction::Set(key, value) => {
            // Start from what is on disk, not the flag/env-resolved values.
            let mut file = settings.persisted().clone();
            file.set(key, value);
            file.save(&settings.config_path)?;

            let mut result = CmdResult::default().with_config_path(settings.config_path.clone());
            result.add_message(CmdMessage::success(format!(
                "Successfully set '{}' in {}",
                key,
                settings.config_path.display()
            )));
            Ok(result)
        }
        ConfigAction::Path => Ok(CmdResult::default()
            .with_value(settings.config_path.display().to_string())
            .with_config_path(settings.config_path.clone())),
    }
}
