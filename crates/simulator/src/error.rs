use thiserror::Error;

use gildedrose_core::DomainError;

pub type SimulatorResult<T> = Result<T, SimulatorError>;

#[derive(Debug, Error)]
pub enum SimulatorError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid fixture: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Domain(#[from] DomainError),
}
