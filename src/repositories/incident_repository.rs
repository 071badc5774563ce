use crate::models::incident::{Incident, IncidentWithRefs};
use crate::utils::errors::AppError;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

const SELECT_WITH_REFS: &str = r#"
    SELECT i.id, i.rental_id, i.incident_type_id, i.occurred_at, i.description, i.cost,
           t.name AS incident_type
    FROM incidents i
    JOIN incident_types t ON i.incident_type_id = t.id
"#;

pub struct IncidentRepository {
    pool: PgPool,
}

impl IncidentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        rental_id: Uuid,
        incident_type_id: Uuid,
        occurred_at: DateTime<Utc>,
        description: String,
        cost: Option<Decimal>,
    ) -> Result<Incident, AppError> {
        let incident = sqlx::query_as::<_, Incident>(
            r#"
            INSERT INTO incidents (id, rental_id, incident_type_id, occurred_at, description, cost)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(rental_id)
        .bind(incident_type_id)
        .bind(occurred_at)
        .bind(description)
        .bind(cost)
        .fetch_one(&self.pool)
        .await?;

        Ok(incident)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Incident>, AppError> {
        let incident = sqlx::query_as::<_, Incident>("SELECT * FROM incidents WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(incident)
    }

    pub async fn find_by_id_with_refs(
        &self,
        id: Uuid,
    ) -> Result<Option<IncidentWithRefs>, AppError> {
        let query = format!("{} WHERE i.id = $1", SELECT_WITH_REFS);
        let incident = sqlx::query_as::<_, IncidentWithRefs>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(incident)
    }

    pub async fn list_by_rental(&self, rental_id: Uuid) -> Result<Vec<IncidentWithRefs>, AppError> {
        let query = format!(
            "{} WHERE i.rental_id = $1 ORDER BY i.occurred_at DESC",
            SELECT_WITH_REFS
        );
        let incidents = sqlx::query_as::<_, IncidentWithRefs>(&query)
            .bind(rental_id)
            .fetch_all(&self.pool)
            .await?;

        Ok(incidents)
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        sqlx::query("DELETE FROM incidents WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
