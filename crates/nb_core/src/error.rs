use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("missing credentials: {}", .0.join(", "))]
    MissingCredentials(Vec<String>),

    #[error("invalid query: {0}")]
    InvalidQuery(String),

    #[error("fetch error: {0}")]
    Fetch(String),

    #[error("analysis error: {0}")]
    Analysis(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("external error: {0}")]
    External(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
