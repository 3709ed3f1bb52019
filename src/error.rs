use std::path::PathBuf;

/// Errors raised while loading configuration, page content or image assets.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file {path:?}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid content file {path:?}: {source}")]
    ContentParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("failed to load asset {path:?}: {reason}")]
    Asset { path: PathBuf, reason: String },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
