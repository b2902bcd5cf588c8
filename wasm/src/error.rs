use thiserror::Error;

/// User-facing text for a rejected search request.
pub const INVALID_REQUEST_MESSAGE: &str = "Please enter valid goal number and number of digits";

#[derive(Debug, Error)]
pub enum PuzzleError {
    #[error("{0}")]
    InvalidInput(String),
    #[error("This combination is already saved!")]
    AlreadySaved,
    #[error("no saved combination at index {index} (list has {len})")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("malformed request: {0}")]
    Json(#[from] serde_json::Error),
}

impl PuzzleError {
    pub(crate) fn invalid_request() -> Self {
        PuzzleError::InvalidInput(INVALID_REQUEST_MESSAGE.to_string())
    }
}
