use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::adoption::errors::AdoptionError;
use crate::domain::adoption::models::AdoptionForm;
use crate::domain::adoption::models::AdoptionFormId;
use crate::domain::adoption::models::SubmitAdoptionFormCommand;
use crate::domain::adoption::ports::AdoptionFormRepository;
use crate::domain::adoption::ports::AdoptionServicePort;

pub struct AdoptionService<FR>
where
    FR: AdoptionFormRepository,
{
    repository: Arc<FR>,
}

impl<FR> AdoptionService<FR>
where
    FR: AdoptionFormRepository,
{
    pub fn new(repository: Arc<FR>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<FR> AdoptionServicePort for AdoptionService<FR>
where
    FR: AdoptionFormRepository,
{
    async fn submit(
        &self,
        command: SubmitAdoptionFormCommand,
    ) -> Result<AdoptionForm, AdoptionError> {
        let form = AdoptionForm {
            id: AdoptionFormId::new(),
            email: command.email,
            phone_no: command.phone_no,
            living_situation: command.living_situation,
            previous_experience: command.previous_experience,
            family_composition: command.family_composition,
            pet_id: command.pet_id,
            submitted_at: Utc::now(),
        };

        let saved = self.repository.save(form).await?;

        tracing::info!(
            form_id = %saved.id,
            pet_id = saved.pet_id.as_str(),
            "Adoption form submitted"
        );

        Ok(saved)
    }
}

#[cfg(test)]
mod tests {
    use mockall::mock;

    use super::*;
    use crate::domain::adoption::models::AdoptionFormFields;

    mock! {
        pub TestAdoptionFormRepository {}

        #[async_trait]
        impl AdoptionFormRepository for TestAdoptionFormRepository {
            async fn save(&self, form: AdoptionForm) -> Result<AdoptionForm, AdoptionError>;
        }
    }

    fn command() -> SubmitAdoptionFormCommand {
        SubmitAdoptionFormCommand::try_from(AdoptionFormFields {
            email: Some("alice@example.com".to_string()),
            phone_no: Some("555-0100".to_string()),
            living_situation: Some("House with a garden".to_string()),
            previous_experience: Some("Two cats".to_string()),
            family_composition: Some("Two adults".to_string()),
            pet_id: Some("pet-42".to_string()),
        })
        .unwrap()
    }

    #[tokio::test]
    async fn test_submit_persists_form() {
        let mut repository = MockTestAdoptionFormRepository::new();

        repository
            .expect_save()
            .withf(|form| {
                form.pet_id.as_str() == "pet-42"
                    && form.email.as_str() == "alice@example.com"
                    && form.family_composition.as_str() == "Two adults"
            })
            .times(1)
            .returning(|form| Ok(form));

        let service = AdoptionService::new(Arc::new(repository));

        let form = service.submit(command()).await.expect("submission failed");
        assert_eq!(form.phone_no.as_str(), "555-0100");
    }

    #[tokio::test]
    async fn test_submit_propagates_store_failure() {
        let mut repository = MockTestAdoptionFormRepository::new();

        repository
            .expect_save()
            .times(1)
            .returning(|_| Err(AdoptionError::DatabaseError("connection reset".to_string())));

        let service = AdoptionService::new(Arc::new(repository));

        let result = service.submit(command()).await;
        assert!(matches!(result, Err(AdoptionError::DatabaseError(_))));
    }
}
