//! Embassy async tasks
//!
//! Each task runs independently and communicates via channels/signals.

pub mod lock_monitor;
pub mod ptt;
pub mod radio;

pub use lock_monitor::{lock_monitor_task, LockMonitorConfig};
pub use ptt::{ptt_task, PttConfig};
pub use radio::radio_task;
