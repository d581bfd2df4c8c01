use thiserror::Error;

#[derive(Error, Debug)]
pub enum CareError {
    #[error("Invalid schedule: {0}")]
    InvalidSchedule(String),

    #[error("Invalid vital reading: {0}")]
    InvalidVital(String),

    #[error("Invalid contact: {0}")]
    InvalidContact(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Store error: {0}")]
    Store(#[from] eyre::Report),

    #[error("Internal error: {0}")]
    Internal(#[from] Box<dyn std::error::Error + Send + Sync>),
}

pub type CareResult<T> = Result<T, CareError>;
