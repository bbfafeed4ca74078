// Configuration type definitions

use serde::Deserialize;

use crate::history::DEFAULT_MAX_SUGGESTIONS;
use crate::suggest::DEFAULT_DEBOUNCE_MS;

const DEFAULT_API_URL: &str = "https://pipedapi.kavin.rocks";

/// Suggestion service configuration section
#[derive(Debug, Clone, Deserialize)]
pub struct SuggestConfig {
    /// Base URL of the search API
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// Quiet period before a fetch fires, in milliseconds
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
}

impl Default for SuggestConfig {
    fn default() -> Self {
        SuggestConfig {
            api_url: default_api_url(),
            debounce_ms: default_debounce_ms(),
        }
    }
}

/// History configuration section
#[derive(Debug, Clone, Deserialize)]
pub struct HistoryConfig {
    /// Cap on history entries offered as suggestions
    #[serde(default = "default_max_suggestions")]
    pub max_suggestions: usize,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        HistoryConfig {
            max_suggestions: default_max_suggestions(),
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub suggest: SuggestConfig,
    #[serde(default)]
    pub history: HistoryConfig,
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_debounce_ms() -> u64 {
    DEFAULT_DEBOUNCE_MS
}

fn default_max_suggestions() -> usize {
    DEFAULT_MAX_SUGGESTIONS
}
