//! # Configuration
//!
//! Two settings drive delivery: the webhook URL and an optional auth token.
//!
//! ## Resolution Order
//!
//! Each key is resolved independently, first match wins:
//! 1. **Command-line flag**: `--webhook-url`, `--auth-token`
//! 2. **Environment variable**: `DEVSTASH_WEBHOOKURL`, `DEVSTASH_AUTHTOKEN`
//! 3. **Config file**: `config.yaml` in the per-user config directory
//! 4. **Unset**: resolves to the empty string
//!
//! ## Storage
//!
//! The file lives at the OS-appropriate config location (via the `directories`
//! crate), e.g. `~/.config/devstash/config.yaml` on Linux. A missing file is
//! valid and means every key is unset. `set` rewrites the whole file, carrying
//! forward the keys already persisted.
//!
//! | Key | Env | Description |
//! |-----|-----|-------------|
//! | `webhookUrl` | `DEVSTASH_WEBHOOKURL` | Endpoint receiving the snippet |
//! | `authToken` | `DEVSTASH_AUTHTOKEN` | Sent verbatim as `Authorization` |

use crate::error::{DevstashError, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

pub const CONFIG_FILENAME: &str = "config.yaml";
pub const ENV_PREFIX: &str = "DEVSTASH_";

/// The recognized configuration keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigKey {
    WebhookUrl,
    AuthToken,
}

impl ConfigKey {
    pub const ALL: [ConfigKey; 2] = [ConfigKey::WebhookUrl, ConfigKey::AuthToken];

    /// Name used in the config file and on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            ConfigKey::WebhookUrl => "webhookUrl",
            ConfigKey::AuthToken => "authToken",
        }
    }

    /// Environment variable consulted when no flag is given.
    pub fn env_var(&self) -> String {
        format!("{}{}", ENV_PREFIX, self.as_str().to_uppercase())
    }
}

impl fmt::Display for ConfigKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ConfigKey {
    type Err = DevstashError;

    fn from_str(s: &str) -> Result<Self> {
        ConfigKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| DevstashError::InvalidConfigKey(s.to_string()))
    }
}

/// The persisted settings, as stored in `config.yaml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ConfigFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub webhook_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth_token: Option<String>,
}

impl ConfigFile {
    /// Load from `path`, or return an all-unset config if the file is absent.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: ConfigFile = serde_yaml::from_str(&content)?;
        tracing::debug!(path = %path.display(), "loaded config file");
        Ok(config)
    }

    /// Write the whole file to `path`, creating parent directories as needed.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let content = serde_yaml::to_string(self)?;
        fs::write(path, content)?;
        tracing::debug!(path = %path.display(), "wrote config file");
        Ok(())
    }

    pub fn get(&self, key: ConfigKey) -> Option<&str> {
        match key {
            ConfigKey::WebhookUrl => self.webhook_url.as_deref(),
            ConfigKey::AuthToken => self.auth_token.as_deref(),
        }
    }

    pub fn set(&mut self, key: ConfigKey, value: impl Into<String>) {
        let value = Some(value.into());
        match key {
            ConfigKey::WebhookUrl => self.webhook_url = value,
            ConfigKey::AuthToken => self.auth_token = value,
        }
    }
}

/// Values supplied on the command line. `None` means the flag was not given.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub webhook_url: Option<String>,
    pub auth_token: Option<String>,
}

impl ConfigOverrides {
    fn get(&self, key: ConfigKey) -> Option<&str> {
        match key {
            ConfigKey::WebhookUrl => self.webhook_url.as_deref(),
            ConfigKey::AuthToken => self.auth_token.as_deref(),
        }
    }
}

/// Fully resolved settings, built once at startup and passed down explicitly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    pub webhook_url: String,
    pub auth_token: String,
    /// The file the persisted layer was read from (and `set` writes to).
    pub config_path: PathBuf,
    file: ConfigFile,
}

impl Settings {
    /// Resolve every key against flags, the process environment and the file.
    pub fn load(config_path: PathBuf, overrides: &ConfigOverrides) -> Result<Self> {
        let file = ConfigFile::load(&config_path)?;
        Ok(Self::resolve(config_path, file, overrides, |name| {
            std::env::var(name).ok()
        }))
    }

    /// Like [`Settings::load`], but a config file that fails to parse is
    /// treated as empty. Used by the `config` subcommands so that `set` can
    /// overwrite a broken file.
    pub fn load_or_default(config_path: PathBuf, overrides: &ConfigOverrides) -> Result<Self> {
        let file = match ConfigFile::load(&config_path) {
            Ok(file) => file,
            Err(DevstashError::ConfigFormat(e)) => {
                tracing::warn!(
                    path = %config_path.display(),
                    error = %e,
                    "ignoring unparseable config file"
                );
                ConfigFile::default()
            }
            Err(e) => return Err(e),
        };
        Ok(Self::resolve(config_path, file, overrides, |name| {
            std::env::var(name).ok()
        }))
    }

    /// Resolve with an injected environment lookup.
    pub fn resolve<E>(
        config_path: PathBuf,
        file: ConfigFile,
        overrides: &ConfigOverrides,
        env: E,
    ) -> Self
    where
        E: Fn(&str) -> Option<String>,
    {
        let lookup = |key: ConfigKey| -> String {
            if let Some(flag) = overrides.get(key) {
                return flag.to_string();
            }
            if let Some(value) = env(&key.env_var()).filter(|v| !v.is_empty()) {
                return value;
            }
            file.get(key).unwrap_or_default().to_string()
        };

        Self {
            webhook_url: lookup(ConfigKey::WebhookUrl),
            auth_token: lookup(ConfigKey::AuthToken),
            config_path,
            file,
        }
    }

    /// The resolved value, empty when unset.
    pub fn get(&self, key: ConfigKey) -> &str {
        match key {
            ConfigKey::WebhookUrl => &self.webhook_url,
            ConfigKey::AuthToken => &self.auth_token,
        }
    }

    /// The persisted layer only, as read at startup.
    pub fn persisted(&self) -> &ConfigFile {
        &self.file
    }
}

/// Default location of the config file for the current user.
pub fn default_config_path() -> Result<PathBuf> {
    let dirs = ProjectDirs::from("", "", "devstash").ok_or_else(|| {
        DevstashError::Usage("Could not determine the user config directory".to_string())
    })?;
    Ok(dirs.config_dir().join(CONFIG_FILENAME))
}
