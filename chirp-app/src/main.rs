//! Chirp - message pane for a 16×16 LED matrix
//!
//! Host runtime for the pane: loads the TOML configuration and saved
//! state, then runs the controller, send, inbox, display, and persistence
//! tasks on the embassy std executor. A console thread stands in for the
//! gesture sensor and the messaging service runs in dry-run mode.
//!
//! Usage: `chirp [config.toml]`, log level via `RUST_LOG`.

use std::cell::RefCell;
use std::path::PathBuf;

use embassy_executor::Spawner;
use embassy_sync::blocking_mutex::Mutex;
use embassy_time::Instant;
use log::{error, info, warn};
use static_cell::StaticCell;

use chirp_core::pane::Pane;
use chirp_display::{Renderer, SpriteRegistry};

use crate::api::DryRunApi;
use crate::config::{load_config, load_state_or_default, StatePersistence};
use crate::preview::{PaneHandle, TerminalSink};
use crate::store::{SharedStore, StoreCell, StoreData};

mod api;
mod channels;
mod config;
mod console;
mod preview;
mod store;
mod tasks;

/// Config file used when none is given
const DEFAULT_CONFIG_PATH: &str = "chirp.toml";

// Static cells for state shared with tasks (must live forever)
static STORE: StaticCell<StoreCell> = StaticCell::new();
static API: StaticCell<DryRunApi> = StaticCell::new();
static PANE: StaticCell<Pane<SharedStore>> = StaticCell::new();
static PANE_HANDLE: StaticCell<PaneHandle> = StaticCell::new();

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    info!("Chirp starting...");

    let config_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH));

    let config = match load_config(&config_path) {
        Ok(config) => config,
        Err(e) => {
            error!("{}: {}", config_path.display(), e);
            std::process::exit(1);
        }
    };

    // Saved counters and inbox mark on top of the configured list
    let persistence = StatePersistence::new(&config_path, &config.storage.state_file);
    let mut messages = config.messages.clone();
    let mut inbox_mark = 0;
    if let Some(state) = load_state_or_default(&persistence) {
        state.apply(&mut messages);
        inbox_mark = state.inbox_mark;
        info!("Restored state from {}", persistence.path().display());
    }

    let store = SharedStore::new(STORE.init(Mutex::new(RefCell::new(StoreData {
        account: config.account_status(),
        messages,
        inbox_mark,
    }))));

    if !config.account.initialized {
        warn!("Account {:?} not initialized", config.account.username);
    }

    let api: &'static DryRunApi = API.init(DryRunApi::new(&config.account.username));

    let pane = PANE.init(
        Pane::new(store, config.timings, Instant::now().as_millis()).with_inbox_mark(inbox_mark),
    );
    let handle = PANE_HANDLE.init(PaneHandle::new(
        Renderer::new(SpriteRegistry::builtin()),
        config.pane.keep_awake,
    ));

    if let Err(e) = std::thread::Builder::new()
        .name("console".into())
        .spawn(move || console::run(store, api))
    {
        warn!("Console unavailable: {}", e);
    }

    // Spawn tasks
    spawner.spawn(tasks::controller_task(pane)).unwrap();
    spawner
        .spawn(tasks::send_task(api, config.timings.send_timeout_ms))
        .unwrap();
    spawner
        .spawn(tasks::inbox_task(api, store, config.timings.inbox_poll_ms))
        .unwrap();
    spawner
        .spawn(tasks::display_task(
            handle,
            TerminalSink::new(std::io::stdout()),
            config.pane.frame_ms,
        ))
        .unwrap();
    spawner
        .spawn(tasks::persist_task(store, persistence))
        .unwrap();

    info!("All tasks spawned, pane running");
}
