use thiserror::Error;

#[derive(Error, Debug)]
pub enum OgpError {
    /// The document carries no `og:` meta tags at all.
    #[error("This document is not an Open Graph object")]
    NotOpenGraphDocument,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl OgpError {
    /// `true` when the input was readable but simply had no Open Graph metadata,
    /// so callers can fall back to other metadata sources.
    pub fn is_not_open_graph(&self) -> bool {
        matches!(self, OgpError::NotOpenGraphDocument)
    }
}

pub type OgpResult<T> = Result<T, OgpError>;
