//! Pipeline configuration loading from environment variables.
//!
//! All values are loaded from `QUERYGUARD_*` environment variables with
//! sensible defaults. Invalid values fall back to defaults without crashing.
//!
//! # Environment Variables
//!
//! | Variable | Default | Description |
//! |---|---|---|
//! | `QUERYGUARD_MAX_QUERY_LENGTH` | 500 | Max processed-query length (chars) |

use serde::Deserialize;

/// Default maximum processed-query length, in characters.
pub const DEFAULT_MAX_QUERY_LENGTH: usize = 500;

/// Tunable parameters for the query pipeline.
///
/// Deserializable with defaults so hosts can embed the table in their own
/// configuration files.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Maximum processed-query length in characters. Queries still longer
    /// than this after every other step are truncated with an ellipsis
    /// suffix. This is the pipeline's only tunable.
    pub max_query_length: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            max_query_length: DEFAULT_MAX_QUERY_LENGTH,
        }
    }
}

/// Parse a `usize` env var, returning `default` on missing or invalid.
fn parse_usize(key: &str, default: usize) -> usize {
    match std::env::var(key) {
        Ok(val) => val.parse::<usize>().unwrap_or(default),
        Err(_) => default,
    }
}

/// Load pipeline configuration from environment variables.
///
/// Missing or invalid values fall back to defaults without panicking.
pub fn load() -> PipelineConfig {
    let max_query_length = parse_usize("QUERYGUARD_MAX_QUERY_LENGTH", DEFAULT_MAX_QUERY_LENGTH);
    let max_query_length = max_query_length.max(1); // floor: a zero cap would erase every query
    PipelineConfig { max_query_length }
}
