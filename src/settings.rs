use serde::Deserialize;
use std::time::Duration;

/// Board settings. Loading them from a file is up to the host; every field has a default so a
/// partial table deserializes.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Settings {
    /// Time between two playback ticks, in milliseconds.
    #[serde(default = "default_tick_interval_ms")]
    pub tick_interval_ms: u64,
}

fn default_tick_interval_ms() -> u64 {
    180
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            tick_interval_ms: default_tick_interval_ms(),
        }
    }
}

impl Settings {
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }
}
