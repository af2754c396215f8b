use async_trait::async_trait;

use crate::domain::adoption::errors::AdoptionError;
use crate::domain::adoption::models::AdoptionForm;
use crate::domain::adoption::models::SubmitAdoptionFormCommand;

/// Port for adoption form operations.
#[async_trait]
pub trait AdoptionServicePort: Send + Sync + 'static {
    /// Persist a validated adoption request.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn submit(
        &self,
        command: SubmitAdoptionFormCommand,
    ) -> Result<AdoptionForm, AdoptionError>;
}

/// Persistence operations for adoption forms.
#[async_trait]
pub trait AdoptionFormRepository: Send + Sync + 'static {
    /// Store a submitted form.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn save(&self, form: AdoptionForm) -> Result<AdoptionForm, AdoptionError>;
}
