use std::fmt;

use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use crate::domain::adoption::errors::AdoptionError;
use crate::domain::user::models::EmailAddress;

/// Adoption request submitted for a pet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdoptionForm {
    pub id: AdoptionFormId,
    pub email: EmailAddress,
    pub phone_no: FormText,
    pub living_situation: FormText,
    pub previous_experience: FormText,
    pub family_composition: FormText,
    pub pet_id: PetId,
    pub submitted_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AdoptionFormId(pub Uuid);

impl AdoptionFormId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for AdoptionFormId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for AdoptionFormId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Identifier of the pet an application refers to.
///
/// Opaque to this service; pets are catalogued elsewhere.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PetId(String);

impl PetId {
    /// Returns `None` for blank identifiers.
    pub fn new(id: &str) -> Option<Self> {
        let id = id.trim();
        (!id.is_empty()).then(|| Self(id.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Free-text answer on the form, trimmed and never blank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormText(String);

impl FormText {
    /// Returns `None` for blank answers.
    pub fn new(text: &str) -> Option<Self> {
        let text = text.trim();
        (!text.is_empty()).then(|| Self(text.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Raw form fields as received from a client.
#[derive(Debug, Clone, Default)]
pub struct AdoptionFormFields {
    pub email: Option<String>,
    pub phone_no: Option<String>,
    pub living_situation: Option<String>,
    pub previous_experience: Option<String>,
    pub family_composition: Option<String>,
    pub pet_id: Option<String>,
}

/// Command to submit an adoption form with validated fields.
#[derive(Debug)]
pub struct SubmitAdoptionFormCommand {
    pub email: EmailAddress,
    pub phone_no: FormText,
    pub living_situation: FormText,
    pub previous_experience: FormText,
    pub family_composition: FormText,
    pub pet_id: PetId,
}

impl TryFrom<AdoptionFormFields> for SubmitAdoptionFormCommand {
    type Error = AdoptionError;

    /// Every field is required. All blank fields are reported together so a
    /// client can highlight them in one pass.
    fn try_from(fields: AdoptionFormFields) -> Result<Self, Self::Error> {
        fn text(value: &Option<String>) -> Option<FormText> {
            value.as_deref().and_then(FormText::new)
        }

        let email = fields.email.as_deref().map(str::trim).filter(|s| !s.is_empty());
        let phone_no = text(&fields.phone_no);
        let living_situation = text(&fields.living_situation);
        let previous_experience = text(&fields.previous_experience);
        let family_composition = text(&fields.family_composition);
        let pet_id = fields.pet_id.as_deref().and_then(PetId::new);

        match (
            email,
            phone_no,
            living_situation,
            previous_experience,
            family_composition,
            pet_id,
        ) {
            (
                Some(email),
                Some(phone_no),
                Some(living_situation),
                Some(previous_experience),
                Some(family_composition),
                Some(pet_id),
            ) => Ok(Self {
                email: EmailAddress::new(email.to_string())?,
                phone_no,
                living_situation,
                previous_experience,
                family_composition,
                pet_id,
            }),
            (email, phone_no, living_situation, previous_experience, family_composition, pet_id) => {
                let missing = [
                    ("email", email.is_none()),
                    ("phoneNo", phone_no.is_none()),
                    ("livingSituation", living_situation.is_none()),
                    ("previousExperience", previous_experience.is_none()),
                    ("familyComposition", family_composition.is_none()),
                    ("petId", pet_id.is_none()),
                ]
                .into_iter()
                .filter_map(|(name, missing)| missing.then_some(name))
                .collect();

                Err(AdoptionError::MissingFields(missing))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_fields() -> AdoptionFormFields {
        AdoptionFormFields {
            email: Some("alice@example.com".to_string()),
            phone_no: Some("555-0100".to_string()),
            living_situation: Some("House with a garden".to_string()),
            previous_experience: Some("Two cats".to_string()),
            family_composition: Some("Two adults".to_string()),
            pet_id: Some("64b7f0c2a1".to_string()),
        }
    }

    #[test]
    fn test_complete_form_converts() {
        let command = SubmitAdoptionFormCommand::try_from(complete_fields()).unwrap();

        assert_eq!(command.email.as_str(), "alice@example.com");
        assert_eq!(command.pet_id.as_str(), "64b7f0c2a1");
    }

    #[test]
    fn test_answers_are_trimmed() {
        let mut fields = complete_fields();
        fields.living_situation = Some("  Flat  ".to_string());

        let command = SubmitAdoptionFormCommand::try_from(fields).unwrap();
        assert_eq!(command.living_situation.as_str(), "Flat");
    }

    #[test]
    fn test_missing_and_blank_fields_are_all_reported() {
        let fields = AdoptionFormFields {
            phone_no: Some("   ".to_string()),
            family_composition: None,
            ..complete_fields()
        };

        let result = SubmitAdoptionFormCommand::try_from(fields);
        assert_eq!(
            result.unwrap_err(),
            AdoptionError::MissingFields(vec!["phoneNo", "familyComposition"])
        );
    }

    #[test]
    fn test_invalid_email() {
        let fields = AdoptionFormFields {
            email: Some("not-an-email".to_string()),
            ..complete_fields()
        };

        let result = SubmitAdoptionFormCommand::try_from(fields);
        assert!(matches!(result, Err(AdoptionError::InvalidEmail(_))));
    }
}
