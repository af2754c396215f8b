use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::adoption::models::AdoptionForm;
use crate::domain::adoption::models::AdoptionFormFields;
use crate::domain::adoption::models::SubmitAdoptionFormCommand;
use crate::domain::adoption::ports::AdoptionServicePort;
use crate::domain::user::ports::AuthServicePort;
use crate::inbound::http::router::AppState;

pub async fn save_form<AS, FS>(
    State(state): State<AppState<AS, FS>>,
    Json(body): Json<SaveFormRequestBody>,
) -> Result<ApiSuccess<AdoptionFormData>, ApiError>
where
    AS: AuthServicePort,
    FS: AdoptionServicePort,
{
    let command = SubmitAdoptionFormCommand::try_from(AdoptionFormFields::from(body))?;

    state
        .adoption_service
        .submit(command)
        .await
        .map_err(ApiError::from)
        .map(|form| ApiSuccess::new(StatusCode::CREATED, (&form).into()))
}

/// Every field is optional at the wire level so that missing ones are
/// reported together instead of as a deserialization failure.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveFormRequestBody {
    email: Option<String>,
    phone_no: Option<String>,
    living_situation: Option<String>,
    previous_experience: Option<String>,
    family_composition: Option<String>,
    pet_id: Option<String>,
}

impl From<SaveFormRequestBody> for AdoptionFormFields {
    fn from(body: SaveFormRequestBody) -> Self {
        Self {
            email: body.email,
            phone_no: body.phone_no,
            living_situation: body.living_situation,
            previous_experience: body.previous_experience,
            family_composition: body.family_composition,
            pet_id: body.pet_id,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdoptionFormData {
    pub id: String,
    pub email: String,
    pub phone_no: String,
    pub living_situation: String,
    pub previous_experience: String,
    pub family_composition: String,
    pub pet_id: String,
    pub submitted_at: DateTime<Utc>,
}

impl From<&AdoptionForm> for AdoptionFormData {
    fn from(form: &AdoptionForm) -> Self {
        Self {
            id: form.id.to_string(),
            email: form.email.as_str().to_string(),
            phone_no: form.phone_no.as_str().to_string(),
            living_situation: form.living_situation.as_str().to_string(),
            previous_experience: form.previous_experience.as_str().to_string(),
            family_composition: form.family_composition.as_str().to_string(),
            pet_id: form.pet_id.as_str().to_string(),
            submitted_at: form.submitted_at,
        }
    }
}
