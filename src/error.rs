use thiserror::Error;

#[derive(Error, Debug)]
pub enum DctaError {
    #[error("Malformed draw: {0}")]
    MalformedDraw(String),

    #[error("Candidate out of range: {0} (expected 1..=49)")]
    CandidateOutOfRange(u16),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, DctaError>;
