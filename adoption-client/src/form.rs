use serde::Deserialize;
use serde::Serialize;

use crate::errors::ClientError;
use crate::session::SessionContext;

/// The pet an adoption form is being filled for.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PetRef {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
}

/// Fields the user types in. The email comes from the session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdoptionFormDraft {
    pub phone_no: String,
    pub living_situation: String,
    pub previous_experience: String,
    pub family_composition: String,
}

impl AdoptionFormDraft {
    /// Builds the request body, or fails if any field (including the
    /// session email) is blank.
    pub fn validate(
        &self,
        session: &SessionContext,
        pet: &PetRef,
    ) -> Result<AdoptionRequest, ClientError> {
        let filled = [
            &self.phone_no,
            &self.living_situation,
            &self.previous_experience,
            &self.family_composition,
        ]
        .iter()
        .all(|field| !field.trim().is_empty());

        let email = session.email().filter(|_| filled).ok_or_else(ClientError::validation)?;
        if pet.id.trim().is_empty() {
            return Err(ClientError::validation());
        }

        Ok(AdoptionRequest {
            email: email.to_string(),
            phone_no: self.phone_no.clone(),
            living_situation: self.living_situation.clone(),
            previous_experience: self.previous_experience.clone(),
            family_composition: self.family_composition.clone(),
            pet_id: pet.id.clone(),
        })
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Body of `POST /form/save`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdoptionRequest {
    pub email: String,
    pub phone_no: String,
    pub living_situation: String,
    pub previous_experience: String,
    pub family_composition: String,
    pub pet_id: String,
}
