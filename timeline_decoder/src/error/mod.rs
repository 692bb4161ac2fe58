//! Error types.
//!
//! Only structural problems with the surrounding document are errors. Event
//! data and leaf fields never produce one: they degrade to defaults, to an
//! enum's `Unknown` member, or to the `Unknown` event variant.

use std::path::PathBuf;
use thiserror::Error;

/// A timeline document could not be assembled.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("timeline document is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("timeline document root is not a JSON object")]
    NotAnObject,

    #[error("timeline document has no `{0}` object")]
    MissingSection(&'static str),

    #[error("frame {index} is not a JSON object")]
    InvalidFrame { index: usize },

    #[error("participant frame key `{0}` is not an integer participant id")]
    InvalidParticipantKey(String),

    #[error("participant id {0} appears under more than one participant frame key")]
    DuplicateParticipantId(i32),
}

/// Decoder configuration could not be loaded.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid decoder config: {0}")]
    Parse(#[from] toml::de::Error),
}
