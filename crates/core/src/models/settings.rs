use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Default market refresh period, in seconds.
pub const DEFAULT_REFRESH_INTERVAL_SECS: u64 = 60;

/// User-configurable settings, stored in their own durable slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Display currency for all monetary values (e.g., "USD").
    pub currency: String,

    /// How often the market watcher refreshes, in seconds.
    pub refresh_interval_secs: u64,

    /// Optional API keys for providers that require them.
    /// Keys: provider name (e.g., "newsapi"). Values: the API key string.
    pub api_keys: HashMap<String, String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            currency: "USD".to_string(),
            refresh_interval_secs: DEFAULT_REFRESH_INTERVAL_SECS,
            api_keys: HashMap::new(),
        }
    }
}
