//! TOML configuration parser
//!
//! Parses the hand-edited pane configuration and validates it against the
//! fixed capacities of the core types.

use std::fmt;

use serde::Deserialize;

use chirp_core::config::{
    ListError, MessageEntry, MessageList, PaneTimings, MAX_BODY_LEN, MAX_DESTINATION_LEN,
    MAX_ID_LEN, MAX_MESSAGES,
};
use chirp_core::traits::AccountStatus;

/// Default preview redraw period
pub const DEFAULT_FRAME_MS: u32 = 250;

/// Default state file name
pub const DEFAULT_STATE_FILE: &str = "chirp.state";

/// Configuration errors
#[derive(Debug)]
pub enum ConfigError {
    /// Config file could not be read
    Io(std::io::Error),
    /// TOML syntax or type error
    TomlParse(toml::de::Error),
    /// A timer period is zero
    ZeroPeriod(&'static str),
    /// Message id is empty or too long
    InvalidId(String),
    /// Message body is empty or too long
    InvalidBody(String),
    /// Destination longer than the service allows
    InvalidDestination(String),
    /// Two messages share an id
    DuplicateId(String),
    /// More messages than the pane can hold
    TooManyMessages(usize),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "cannot read config: {}", e),
            ConfigError::TomlParse(e) => write!(f, "invalid TOML: {}", e),
            ConfigError::ZeroPeriod(name) => write!(f, "timings.{} must be above zero", name),
            ConfigError::InvalidId(id) => {
                write!(f, "message id {:?} must be 1..={} bytes", id, MAX_ID_LEN)
            }
            ConfigError::InvalidBody(id) => write!(
                f,
                "message {:?}: body must be 1..={} bytes",
                id, MAX_BODY_LEN
            ),
            ConfigError::InvalidDestination(id) => write!(
                f,
                "message {:?}: destination longer than {} bytes",
                id, MAX_DESTINATION_LEN
            ),
            ConfigError::DuplicateId(id) => write!(f, "message id {:?} used twice", id),
            ConfigError::TooManyMessages(n) => {
                write!(f, "{} messages configured, at most {}", n, MAX_MESSAGES)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::TomlParse(e)
    }
}

/// `[pane]` section
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PaneSection {
    pub keep_awake: bool,
    pub frame_ms: u32,
}

impl Default for PaneSection {
    fn default() -> Self {
        Self {
            keep_awake: false,
            frame_ms: DEFAULT_FRAME_MS,
        }
    }
}

/// `[account]` section
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AccountSection {
    pub username: String,
    pub initialized: bool,
}

/// `[storage]` section
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StorageSection {
    pub state_file: String,
}

impl Default for StorageSection {
    fn default() -> Self {
        Self {
            state_file: DEFAULT_STATE_FILE.into(),
        }
    }
}

/// One `[[message]]` entry
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MessageSection {
    pub id: String,
    pub body: String,
    #[serde(default)]
    pub destination: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RawConfig {
    pane: PaneSection,
    timings: PaneTimings,
    account: AccountSection,
    storage: StorageSection,
    #[serde(rename = "message")]
    messages: Vec<MessageSection>,
}

/// Validated configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub pane: PaneSection,
    pub timings: PaneTimings,
    pub account: AccountSection,
    pub storage: StorageSection,
    pub messages: MessageList,
}

impl AppConfig {
    /// Account status as the pane sees it
    pub fn account_status(&self) -> AccountStatus {
        AccountStatus {
            initialized: self.account.initialized,
        }
    }
}

/// Parse and validate a TOML configuration string
pub fn parse_config(input: &str) -> Result<AppConfig, ConfigError> {
    let raw: RawConfig = toml::from_str(input)?;

    let timings = raw.timings;
    for (name, value) in [
        ("refresh_ms", timings.refresh_ms),
        ("inbox_poll_ms", timings.inbox_poll_ms),
        ("send_timeout_ms", timings.send_timeout_ms),
    ] {
        if value == 0 {
            return Err(ConfigError::ZeroPeriod(name));
        }
    }

    if raw.messages.len() > MAX_MESSAGES {
        return Err(ConfigError::TooManyMessages(raw.messages.len()));
    }

    let mut messages = MessageList::new();
    for message in &raw.messages {
        let entry = validate_message(message)?;
        messages.insert(entry).map_err(|e| match e {
            ListError::DuplicateId => ConfigError::DuplicateId(message.id.clone()),
            ListError::Full | ListError::NotFound => {
                ConfigError::TooManyMessages(raw.messages.len())
            }
        })?;
    }

    Ok(AppConfig {
        pane: raw.pane,
        timings,
        account: raw.account,
        storage: raw.storage,
        messages,
    })
}

fn validate_message(message: &MessageSection) -> Result<MessageEntry, ConfigError> {
    if message.id.is_empty() || message.id.len() > MAX_ID_LEN {
        return Err(ConfigError::InvalidId(message.id.clone()));
    }
    if message.body.is_empty() || message.body.len() > MAX_BODY_LEN {
        return Err(ConfigError::InvalidBody(message.id.clone()));
    }
    if message.destination.len() > MAX_DESTINATION_LEN {
        return Err(ConfigError::InvalidDestination(message.id.clone()));
    }
    Ok(MessageEntry::new(
        &message.id,
        &message.body,
        &message.destination,
    ))
}
