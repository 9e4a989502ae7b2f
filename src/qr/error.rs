use thiserror::Error;

pub type EncodeResult<T> = Result<T, EncodeError>;

#[derive(Debug, Error)]
pub enum EncodeError {
    #[error("failed to serialize payload: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("accounts per code must be at least 1, got {0}")]
    InvalidSplit(usize),
    #[error("sequence of {0} codes does not fit the sequence counter")]
    SequenceTooLong(usize),
}
