use std::env;
use std::fs;
use std::path::PathBuf;

use dirs_next::config_dir;
use once_cell::sync::OnceCell;
use serde::Deserialize;
use tracing::debug;

use crate::llm::mock::DEFAULT_CHUNK_DELAY_MS;

#[derive(Debug, Default, Deserialize)]
pub struct MockGptConfig {
    #[serde(default)]
    pub chunk_delay_ms: Option<u64>,
    #[serde(default)]
    pub model: Option<String>,
}

static CONFIG: OnceCell<MockGptConfig> = OnceCell::new();

fn get_mockgpt_config_path() -> PathBuf {
    let mut path = config_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("mockgpt");
    path.push("mockgpt.toml");
    path
}

fn load_config_file() -> MockGptConfig {
    let path = get_mockgpt_config_path();
    if path.exists() {
        debug!("Loading config from {}", path.display());
        let content = fs::read_to_string(&path).unwrap_or_default();
        toml::from_str(&content).unwrap_or_default()
    } else {
        MockGptConfig::default()
    }
}

fn get_config() -> &'static MockGptConfig {
    CONFIG.get_or_init(|| load_config_file())
}

/// Pause between streamed chunks, in milliseconds. A value in the config
/// file wins, then MOCKGPT_CHUNK_DELAY_MS, then the built-in default.
pub fn get_chunk_delay_ms() -> u64 {
    get_config()
        .chunk_delay_ms
        .or_else(|| {
            env::var("MOCKGPT_CHUNK_DELAY_MS")
                .ok()
                .and_then(|v| v.parse().ok())
        })
        .unwrap_or(DEFAULT_CHUNK_DELAY_MS)
}

pub fn get_default_model() -> String {
    get_config()
        .model
        .clone()
        .or_else(|| env::var("MOCKGPT_MODEL").ok())
        .unwrap_or_else(|| "mockgpt".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_full_config() {
        let config: MockGptConfig =
            toml::from_str("chunk_delay_ms = 25\nmodel = \"mockgpt-mini\"").unwrap();
        assert_eq!(config.chunk_delay_ms, Some(25));
        assert_eq!(config.model.as_deref(), Some("mockgpt-mini"));
    }

    #[test]
    fn test_missing_keys_stay_unset() {
        let config: MockGptConfig = toml::from_str("").unwrap();
        assert_eq!(config.chunk_delay_ms, None);
        assert_eq!(config.model, None);
    }

    #[test]
    fn test_rejects_wrong_types_via_default() {
        let config: MockGptConfig =
            toml::from_str("chunk_delay_ms = \"fast\"").unwrap_or_default();
        assert_eq!(config.chunk_delay_ms, None);
    }
}
