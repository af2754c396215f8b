use thiserror::Error;

use crate::user::errors::EmailError;

/// Top-level error for adoption form operations
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AdoptionError {
    #[error("Please fill out all fields. Missing: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    #[error("Invalid email: {0}")]
    InvalidEmail(#[from] EmailError),

    #[error("Database error: {0}")]
    DatabaseError(String),
}
