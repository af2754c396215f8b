use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::adoption::errors::AdoptionError;
use crate::domain::adoption::models::AdoptionForm;
use crate::domain::adoption::ports::AdoptionFormRepository;

pub struct PostgresAdoptionFormRepository {
    pool: PgPool,
}

impl PostgresAdoptionFormRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AdoptionFormRepository for PostgresAdoptionFormRepository {
    async fn save(&self, form: AdoptionForm) -> Result<AdoptionForm, AdoptionError> {
        sqlx::query(
            r#"
            INSERT INTO adoption_forms (
                id, email, phone_no, living_situation, previous_experience,
                family_composition, pet_id, submitted_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(form.id.0)
        .bind(form.email.as_str())
        .bind(form.phone_no.as_str())
        .bind(form.living_situation.as_str())
        .bind(form.previous_experience.as_str())
        .bind(form.family_composition.as_str())
        .bind(form.pet_id.as_str())
        .bind(form.submitted_at)
        .execute(&self.pool)
        .await
        .map_err(|e| AdoptionError::DatabaseError(e.to_string()))?;

        Ok(form)
    }
}
