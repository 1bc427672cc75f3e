//! Configuration loading and parsing
//!
//! The pane configuration is TOML, edited by hand. Send counters and the
//! inbox mark change at runtime and live in a separate postcard file.

pub mod loader;
pub mod toml;

pub use loader::{load_config, load_state_or_default, StateFileError, StatePersistence};
pub use self::toml::{parse_config, AppConfig, ConfigError};
