//! Photo Paster Library
//!
//! Stages large photo collections on the system clipboard in batches small
//! enough for a paste target's per-paste file limit, pausing between batches
//! so each one can be pasted before the next replaces it.

pub mod cli;
pub mod clipboard;
pub mod collect;
pub mod config;
pub mod error;
pub mod scheduler;
pub mod theme;
pub mod ui;

pub use clipboard::{ClipboardError, FileListClipboard, Publisher};
pub use collect::collect;
pub use config::Config;
pub use error::PasteError;
pub use scheduler::{BatchScheduler, ScheduleConfig, ScheduleObserver, ScheduleState};
