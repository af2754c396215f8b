use thiserror::Error;

/// Message shown when any required form field is blank.
pub const FILL_ALL_FIELDS_MESSAGE: &str = "Please fill out all fields.";

/// Message shown when the backend rejects a form submission.
pub const SUBMIT_FAILED_MESSAGE: &str = "Failed to submit the form.";

#[derive(Debug, Error)]
pub enum ClientError {
    /// Input rejected before anything was sent.
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    /// Non-2xx answer from the backend. `message` is ready for display.
    #[error("{message}")]
    Api { status: u16, message: String },
}

impl ClientError {
    pub fn validation() -> Self {
        ClientError::Validation(FILL_ALL_FIELDS_MESSAGE.to_string())
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Api { status, .. } => Some(*status),
            ClientError::Transport(e) => e.status().map(|s| s.as_u16()),
            ClientError::Validation(_) => None,
        }
    }
}
