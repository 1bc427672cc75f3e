//! Embassy async tasks
//!
//! Each task runs independently and communicates via channels/signals.

pub mod controller;
pub mod display;
pub mod inbox;
pub mod persist;
pub mod send;

pub use controller::controller_task;
pub use display::display_task;
pub use inbox::inbox_task;
pub use persist::persist_task;
pub use send::send_task;
