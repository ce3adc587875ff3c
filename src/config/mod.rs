//! Configuration management for photo-paster

mod io;
mod types;

pub use types::*;

use anyhow::Result;
use std::path::Path;

use crate::scheduler::ScheduleConfig;

impl Config {
    /// Load configuration from file, or return defaults if not found
    pub fn load() -> Result<Self> {
        io::load()
    }

    /// Load configuration from a specific path, or return defaults if not found
    pub fn load_from(path: &Path) -> Result<Self> {
        io::load_from(path)
    }

    /// Parse configuration from TOML text
    pub fn parse(contents: &str) -> Result<Self> {
        io::parse(contents)
    }

    /// Pacing parameters for the scheduler
    pub fn schedule(&self) -> ScheduleConfig {
        ScheduleConfig::from(&self.batch)
    }
}
