use crate::client::AdoptionApi;
use crate::form::AdoptionFormDraft;
use crate::form::PetRef;
use crate::notification::Notification;
use crate::session::SessionContext;

/// Submission of the adoption form for one pet.
///
/// Every outcome becomes a notification; nothing is retried.
pub struct AdoptionFormFlow<A: AdoptionApi> {
    api: A,
}

impl<A: AdoptionApi> AdoptionFormFlow<A> {
    pub fn new(api: A) -> Self {
        Self { api }
    }

    /// Validates the draft, submits it and reports the outcome.
    ///
    /// The draft is cleared only on success so the user can fix and resubmit.
    pub async fn submit(
        &self,
        draft: &mut AdoptionFormDraft,
        session: &SessionContext,
        pet: &PetRef,
    ) -> Notification {
        let request = match draft.validate(session, pet) {
            Ok(request) => request,
            Err(e) => return Notification::error(e.to_string()),
        };

        match self.api.submit_adoption_form(&request).await {
            Ok(()) => {
                tracing::info!(pet_id = %pet.id, "Adoption form submitted");
                draft.clear();
                Notification::success(format!(
                    "Adoption form for {} submitted successfully!",
                    pet.name
                ))
            }
            Err(e) => {
                tracing::warn!(pet_id = %pet.id, error = %e, "Adoption form submission failed");
                Notification::error(e.to_string())
            }
        }
    }
}
