use thiserror::Error;

use crate::planner::allocator::Phase;

#[derive(Debug, Error)]
pub enum PlanError {
    #[error("Catalog configuration error: {0}")]
    Configuration(String),

    #[error("No eligible foods for diet type '{diet}' ({phase} phase)")]
    EmptyCandidatePool { diet: String, phase: Phase },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, PlanError>;
