use crate::models::lookup::{Category, IncidentType, MaintenanceType};
use crate::utils::errors::AppError;
use sqlx::PgPool;
use uuid::Uuid;

/// Repositorio de las tablas lookup (categorías y tipos)
pub struct LookupRepository {
    pool: PgPool,
}

impl LookupRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    // --- Categorías de vehículo ---

    pub async fn list_categories(&self) -> Result<Vec<Category>, AppError> {
        let categories =
            sqlx::query_as::<_, Category>("SELECT * FROM categories ORDER BY name")
                .fetch_all(&self.pool)
                .await?;

        Ok(categories)
    }

    pub async fn find_category(&self, id: Uuid) -> Result<Option<Category>, AppError> {
        let category = sqlx::query_as::<_, Category>("SELECT * FROM categories WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(category)
    }

    pub async fn create_category(&self, name: String) -> Result<Category, AppError> {
        let category = sqlx::query_as::<_, Category>(
            "INSERT INTO categories (id, name) VALUES ($1, $2) RETURNING *",
        )
        .bind(Uuid::new_v4())
        .bind(name)
        .fetch_one(&self.pool)
        .await?;

        Ok(category)
    }

    // --- Tipos de mantenimiento ---

    pub async fn list_maintenance_types(&self) -> Result<Vec<MaintenanceType>, AppError> {
        let types = sqlx::query_as::<_, MaintenanceType>(
            "SELECT * FROM maintenance_types ORDER BY name",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(types)
    }

    pub async fn find_maintenance_type(
        &self,
        id: Uuid,
    ) -> Result<Option<MaintenanceType>, AppError> {
        let maintenance_type =
            sqlx::query_as::<_, MaintenanceType>("SELECT * FROM maintenance_types WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(maintenance_type)
    }

    pub async fn create_maintenance_type(&self, name: String) -> Result<MaintenanceType, AppError> {
        let maintenance_type = sqlx::query_as::<_, MaintenanceType>(
            "INSERT INTO maintenance_types (id, name) VALUES ($1, $2) RETURNING *",
        )
        .bind(Uuid::new_v4())
        .bind(name)
        .fetch_one(&self.pool)
        .await?;

        Ok(maintenance_type)
    }

    // --- Tipos de incidente ---

    pub async fn list_incident_types(&self) -> Result<Vec<IncidentType>, AppError> {
        let types =
            sqlx::query_as::<_, IncidentType>("SELECT * FROM incident_types ORDER BY name")
                .fetch_all(&self.pool)
                .await?;

        Ok(types)
    }

    pub async fn find_incident_type(&self, id: Uuid) -> Result<Option<IncidentType>, AppError> {
        let incident_type =
            sqlx::query_as::<_, IncidentType>("SELECT * FROM incident_types WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(incident_type)
    }

    pub async fn create_incident_type(&self, name: String) -> Result<IncidentType, AppError> {
        let incident_type = sqlx::query_as::<_, IncidentType>(
            "INSERT INTO incident_types (id, name) VALUES ($1, $2) RETURNING *",
        )
        .bind(Uuid::new_v4())
        .bind(name)
        .fetch_one(&self.pool)
        .await?;

        Ok(incident_type)
    }
}
