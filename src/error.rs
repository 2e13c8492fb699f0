use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum PlanError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Please paste hiring data first before saving to history.")]
    NothingToSave,

    #[error("History record {id} not found")]
    RecordNotFound { id: Uuid },
}

pub type PlanResult<T> = Result<T, PlanError>;
