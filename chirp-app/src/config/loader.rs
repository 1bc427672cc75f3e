//! Configuration persistence
//!
//! Loads the TOML pane configuration and the binary runtime state that
//! lives next to it.

use std::fmt;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use log::{debug, info, warn};

use chirp_core::config::{PersistedState, StateError, MAX_STATE_SIZE};

use super::toml::{parse_config, AppConfig, ConfigError};

/// Load and validate the configuration file
pub fn load_config(path: &Path) -> Result<AppConfig, ConfigError> {
    info!("Loading configuration from {}", path.display());
    let text = fs::read_to_string(path)?;
    let config = parse_config(&text)?;
    log_config_summary(&config);
    Ok(config)
}

/// Runtime state file errors
#[derive(Debug)]
pub enum StateFileError {
    /// File could not be read or written
    Io(std::io::Error),
    /// Contents could not be encoded or decoded
    Format(StateError),
    /// File is larger than any valid state
    TooLarge(usize),
}

impl fmt::Display for StateFileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StateFileError::Io(e) => write!(f, "state file I/O: {}", e),
            StateFileError::Format(e) => write!(f, "state file format: {:?}", e),
            StateFileError::TooLarge(n) => {
                write!(f, "state file is {} bytes, limit {}", n, MAX_STATE_SIZE)
            }
        }
    }
}

impl std::error::Error for StateFileError {}

impl From<std::io::Error> for StateFileError {
    fn from(e: std::io::Error) -> Self {
        StateFileError::Io(e)
    }
}

impl From<StateError> for StateFileError {
    fn from(e: StateError) -> Self {
        StateFileError::Format(e)
    }
}

/// Postcard state file
pub struct StatePersistence {
    path: PathBuf,
}

impl StatePersistence {
    /// State file at `path`
    ///
    /// Relative paths are resolved against the config file's directory.
    pub fn new(config_path: &Path, state_file: &str) -> Self {
        let path = match config_path.parent() {
            Some(dir) => dir.join(state_file),
            None => PathBuf::from(state_file),
        };
        Self { path }
    }

    /// Path of the state file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the saved state
    ///
    /// A missing file is not an error: the pane simply starts fresh.
    pub fn load(&self) -> Result<Option<PersistedState>, StateFileError> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No state file at {}", self.path.display());
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
        };

        if bytes.len() > MAX_STATE_SIZE {
            return Err(StateFileError::TooLarge(bytes.len()));
        }

        let state = PersistedState::decode(&bytes)?;
        debug!(
            "Loaded state: {} counters, inbox mark {}",
            state.send_counts.len(),
            state.inbox_mark
        );
        Ok(Some(state))
    }

    /// Save state, replacing the file atomically
    pub fn save(&self, state: &PersistedState) -> Result<(), StateFileError> {
        let mut buf = [0u8; MAX_STATE_SIZE];
        let bytes = state.encode(&mut buf)?;

        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, &*bytes)?;
        fs::rename(&tmp, &self.path)?;
        debug!("Saved {} bytes of state", bytes.len());
        Ok(())
    }
}

/// Load saved state, falling back to a fresh start on any error
pub fn load_state_or_default(persistence: &StatePersistence) -> Option<PersistedState> {
    match persistence.load() {
        Ok(state) => state,
        Err(e) => {
            warn!(
                "Ignoring state file {}: {}",
                persistence.path().display(),
                e
            );
            None
        }
    }
}

/// Log a summary of the loaded configuration
fn log_config_summary(config: &AppConfig) {
    info!("Configuration loaded successfully");
    debug!("  account {:?}", config.account.username);
    debug!("  {} messages", config.messages.len());
    debug!("  timings {:?}", config.timings);
}

#[cfg(test)]
mod tests {
    use super::*;
    use chirp_core::config::{MessageEntry, MessageList, STATE_VERSION};

    fn temp_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("chirp-{}-{}", name, std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_state_round_trip_on_disk() {
        let dir = temp_dir("state");
        let persistence = StatePersistence::new(&dir.join("chirp.toml"), "chirp.state");
        assert!(persistence.load().unwrap().is_none());

        let mut list = MessageList::new();
        list.insert(MessageEntry::new("a", "hi", "")).unwrap();
        list.increment_send_count("a").unwrap();
        persistence
            .save(&PersistedState::capture(&list, 42))
            .unwrap();

        let loaded = persistence.load().unwrap().unwrap();
        assert_eq!(loaded.version, STATE_VERSION);
        assert_eq!(loaded.inbox_mark, 42);
        assert_eq!(loaded.send_counts[0].send_count, 1);

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_corrupt_state_ignored() {
        let dir = temp_dir("corrupt");
        let persistence = StatePersistence::new(&dir.join("chirp.toml"), "chirp.state");
        fs::write(persistence.path(), [0xff, 0xff, 0xff]).unwrap();

        assert!(persistence.load().is_err());
        assert!(load_state_or_default(&persistence).is_none());

        fs::remove_dir_all(&dir).unwrap();
    }
}
