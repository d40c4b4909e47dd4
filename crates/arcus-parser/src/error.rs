use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("invalid brand data JSON: {0}")]
    InvalidBrandJson(#[from] serde_json::Error),
}
