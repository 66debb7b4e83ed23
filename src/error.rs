//! Errors raised while loading crash records and configuration.
//!
//! Parsing itself never fails; these only cover the file boundary.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {path}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid crash record JSON in {path}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid parser config")]
    Config(#[from] toml::de::Error),
}
