use thiserror::Error;

/// Top-level error type used across the entire workspace.
#[derive(Debug, Error)]
pub enum StripError {
    #[error("config error: {0}")]
    Config(String),

    #[error("resource error: {0}")]
    Resource(String),

    #[error("system error: {0}")]
    System(String),

    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

pub type Result<T, E = StripError> = std::result::Result<T, E>;
