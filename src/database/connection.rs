//! Conexión a PostgreSQL
//!
//! Este módulo maneja la conexión a la base de datos PostgreSQL.

use crate::config::database::DatabaseConfig;
use anyhow::Result;
use sqlx::PgPool;

/// Conexión a la base de datos con su pool asociado
pub struct DatabaseConnection {
    pool: PgPool,
}

impl DatabaseConnection {
    /// Crear la conexión usando la configuración por defecto (DATABASE_URL)
    pub async fn new_default() -> Result<Self> {
        let config = DatabaseConfig::default();
        let pool = config.create_pool().await?;

        // Verificación rápida de que la conexión funciona
        sqlx::query("SELECT 1").execute(&pool).await?;

        Ok(Self { pool })
    }

    /// Obtener el pool de conexiones
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}
