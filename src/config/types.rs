//! Configuration type definitions and defaults

use serde::{Deserialize, Serialize};

use crate::scheduler::{
    ScheduleConfig, DEFAULT_BATCH_SIZE, DEFAULT_LEAD_IN_SECS, DEFAULT_WAIT_SECS,
};

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub batch: BatchConfig,
    #[serde(default)]
    pub notify: NotifyConfig,
}

/// Batch pacing configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchConfig {
    /// Files per clipboard write (the target's per-paste limit)
    #[serde(default = "default_size")]
    pub size: usize,
    /// Seconds to pause after each clipboard write
    #[serde(default = "default_delay_secs")]
    pub delay_secs: u64,
    /// Seconds to pause before the first clipboard write
    #[serde(default = "default_lead_in_secs")]
    pub lead_in_secs: u64,
}

pub fn default_size() -> usize {
    DEFAULT_BATCH_SIZE
}

pub fn default_delay_secs() -> u64 {
    DEFAULT_WAIT_SECS
}

pub fn default_lead_in_secs() -> u64 {
    DEFAULT_LEAD_IN_SECS
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            size: default_size(),
            delay_secs: default_delay_secs(),
            lead_in_secs: default_lead_in_secs(),
        }
    }
}

/// Operator notification configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotifyConfig {
    /// Ring the terminal bell when a new batch lands on the clipboard
    #[serde(default = "default_beep")]
    pub beep: bool,
}

pub fn default_beep() -> bool {
    true
}

impl Default for NotifyConfig {
    fn default() -> Self {
        Self {
            beep: default_beep(),
        }
    }
}

impl From<&BatchConfig> for ScheduleConfig {
    fn from(batch: &BatchConfig) -> Self {
        Self {
            batch_size: batch.size,
            wait_secs: batch.delay_secs,
            lead_in_secs: batch.lead_in_secs,
        }
    }
}
