use crate::dto::client_dto::{ClientResponse, CreateClientRequest, UpdateClientRequest};
use crate::repositories::client_repository::ClientRepository;
use crate::utils::errors::{conflict_error, AppError};
use crate::utils::validation::validate_dni;
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

pub struct ClientController {
    repository: ClientRepository,
}

impl ClientController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: ClientRepository::new(pool),
        }
    }

    pub async fn create(&self, request: CreateClientRequest) -> Result<ClientResponse, AppError> {
        request.validate()?;

        validate_dni(&request.dni)
            .map_err(|_| AppError::BadRequest("formato de DNI inválido".to_string()))?;

        if self.repository.dni_exists(&request.dni, None).await? {
            return Err(conflict_error("Cliente", "DNI", &request.dni));
        }

        let client = self
            .repository
            .create(request.full_name, request.dni, request.phone, request.email)
            .await?;

        Ok(client.into())
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<ClientResponse, AppError> {
        let client = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Cliente {} no encontrado", id)))?;

        Ok(client.into())
    }

    pub async fn list(&self) -> Result<Vec<ClientResponse>, AppError> {
        let clients = self.repository.list().await?;
        Ok(clients.into_iter().map(Into::into).collect())
    }

    pub async fn update(
        &self,
        id: Uuid,
        request: UpdateClientRequest,
    ) -> Result<ClientResponse, AppError> {
        request.validate()?;

        let current = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Cliente {} no encontrado", id)))?;

        let dni = match request.dni {
            Some(dni) => {
                validate_dni(&dni)
                    .map_err(|_| AppError::BadRequest("formato de DNI inválido".to_string()))?;
                if dni != current.dni && self.repository.dni_exists(&dni, Some(id)).await? {
                    return Err(conflict_error("Cliente", "DNI", &dni));
                }
                dni
            }
            None => current.dni,
        };

        let client = self
            .repository
            .update(
                id,
                request.full_name.unwrap_or(current.full_name),
                dni,
                request.phone.or(current.phone),
                request.email.or(current.email),
            )
            .await?;

        Ok(client.into())
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Cliente {} no encontrado", id)))?;

        self.repository.delete(id).await?;

        Ok(())
    }
}
