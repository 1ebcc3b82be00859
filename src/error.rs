// src/error.rs
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum TaggerError {
    #[error("could not read lexicon {path:?}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed lexicon {path:?}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("tagger failed: {0}")]
    Failed(String),
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("correction store is unavailable")]
    Unavailable,

    #[error("correction store I/O error")]
    Io(#[from] std::io::Error),

    #[error("could not encode correction store")]
    Encode(#[from] bincode::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum AnalyzeError {
    #[error("nothing to analyze: the sentence is blank")]
    EmptySentence,

    #[error(transparent)]
    Tagger(#[from] TaggerError),
}

/// Validation failures (`NothingToSave`, `NoCurrentWord`) never reach the store
/// and are reported separately from store failures.
#[derive(Debug, thiserror::Error)]
pub enum SaveError {
    #[error("enter at least one corrected field")]
    NothingToSave,

    #[error("no word is selected")]
    NoCurrentWord,

    #[error("could not save correction")]
    Store(#[from] StoreError),
}

impl SaveError {
    pub fn is_validation(&self) -> bool {
        matches!(self, SaveError::NothingToSave | SaveError::NoCurrentWord)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not read config {path:?}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed config {path:?}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
