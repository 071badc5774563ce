use crate::models::client::Client;
use crate::utils::errors::AppError;
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

pub struct ClientRepository {
    pool: PgPool,
}

impl ClientRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        full_name: String,
        dni: String,
        phone: Option<String>,
        email: Option<String>,
    ) -> Result<Client, AppError> {
        let client = sqlx::query_as::<_, Client>(
            r#"
            INSERT INTO clients (id, full_name, dni, phone, email, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(full_name)
        .bind(dni)
        .bind(phone)
        .bind(email)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(client)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Client>, AppError> {
        let client = sqlx::query_as::<_, Client>("SELECT * FROM clients WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(client)
    }

    pub async fn list(&self) -> Result<Vec<Client>, AppError> {
        let clients =
            sqlx::query_as::<_, Client>("SELECT * FROM clients ORDER BY full_name")
                .fetch_all(&self.pool)
                .await?;

        Ok(clients)
    }

    pub async fn dni_exists(
        &self,
        dni: &str,
        exclude_client: Option<Uuid>,
    ) -> Result<bool, AppError> {
        let result: (bool,) = sqlx::query_as(
            "SELECT EXISTS(
                 SELECT 1 FROM clients WHERE dni = $1 AND ($2::uuid IS NULL OR id <> $2)
             )",
        )
        .bind(dni)
        .bind(exclude_client)
        .fetch_one(&self.pool)
        .await?;

        Ok(result.0)
    }

    pub async fn update(
        &self,
        id: Uuid,
        full_name: String,
        dni: String,
        phone: Option<String>,
        email: Option<String>,
    ) -> Result<Client, AppError> {
        let client = sqlx::query_as::<_, Client>(
            r#"
            UPDATE clients
            SET full_name = $2, dni = $3, phone = $4, email = $5
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(full_name)
        .bind(dni)
        .bind(phone)
        .bind(email)
        .fetch_one(&self.pool)
        .await?;

        Ok(client)
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        sqlx::query("DELETE FROM clients WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
