//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point for all devstash operations, whatever the UI.
//!
//! The facade:
//! - **Dispatches** to the appropriate command function
//! - **Normalizes inputs** (e.g., parsing config key names)
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! It never prints and never exits; that belongs to the binary.
//!
//! ## Generic Over Transport
//!
//! `DevstashApi<T: Transport>` is generic over how the webhook is reached:
//! - Production: `DevstashApi<HttpTransport>`
//! - Testing: a recording fake that never touches the network

use crate::commands::{self, config::ConfigAction, save::SaveRequest, CmdResult};
use crate::config::{ConfigKey, Settings};
use crate::error::Result;
use crate::input::StdinSource;
use crate::webhook::Transport;

/// The main API facade for devstash operations.
pub struct DevstashApi<T: Transport> {
    transport: T,
    settings: Settings,
}

impl<T: Transport> DevstashApi<T> {
    pub fn new(transport: T, settings: Settings) -> Self {
        Self {
            transport,
            settings,
        }
    }

    pub fn save(&self, request: &SaveRequest, stdin: &mut dyn StdinSource) -> Result<CmdResult> {
        commands::save::run(&self.transport, &self.settings, request, stdin)
    }

    pub fn config_get(&self, key: &str) -> Result<CmdResult> {
        let key: ConfigKey = key.parse()?;
        commands::config::run(&self.settings, ConfigAction::Get(key))
    }

    pub fn config_set(&self, key: &str, value: impl Into<String>) -> Result<CmdResult> {
        let key: ConfigKey = key.parse()?;
        commands::config::run(&self.settings, ConfigAction::Set(key, value.into()))
    }

    pub fn config_path(&self) -> Result<CmdResult> {
        commands::config::run(&self.settings, ConfigAction::Path)
    }
}
