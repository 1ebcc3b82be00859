// File: src/config.rs
use crate::error::ConfigError;
use serde::Deserialize;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_PATH: &str = "morph_review.json";
pub const DEFAULT_STORE_PATH: &str = "corrections.bin";

pub const CONFIG_PATH_VAR: &str = "MORPH_REVIEW_CONFIG";
pub const STORE_PATH_VAR: &str = "MORPH_REVIEW_STORE";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Bincode file holding saved corrections.
    pub store_path: PathBuf,
    /// JSON lexicon for the built-in tagger. Without one every word is untagged.
    pub lexicon_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store_path: PathBuf::from(DEFAULT_STORE_PATH),
            lexicon_path: None,
        }
    }
}

impl Config {
    /// Reads `path`; a missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::debug!("No config at {:?}, using defaults", path);
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };
        serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Loads from `$MORPH_REVIEW_CONFIG` (or `morph_review.json`), then lets
    /// `$MORPH_REVIEW_STORE` override the store location.
    pub fn from_env() -> Result<Self, ConfigError> {
        let path = std::env::var_os(CONFIG_PATH_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH));
        let mut config = Self::load(&path)?;
        if let Some(store_path) = std::env::var_os(STORE_PATH_VAR) {
            config.store_path = PathBuf::from(store_path);
        }
        Ok(config)
    }
}
