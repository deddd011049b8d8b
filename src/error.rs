use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("match centre payload not found in page")]
    PayloadNotFound,
    #[error("malformed match centre payload: {0}")]
    MalformedPayload(#[from] serde_json::Error),
    #[error("render failed: {0}")]
    Render(anyhow::Error),
    #[error("no match id in address: {0}")]
    BadAddress(String),
    #[error("persistence error: {0}")]
    Persistence(#[from] rusqlite::Error),
}

impl From<reqwest::Error> for ScrapeError {
    fn from(err: reqwest::Error) -> Self {
        ScrapeError::Render(anyhow::Error::new(err))
    }
}
