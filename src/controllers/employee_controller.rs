use crate::dto::employee_dto::{CreateEmployeeRequest, EmployeeResponse, UpdateEmployeeRequest};
use crate::repositories::employee_repository::EmployeeRepository;
use crate::utils::errors::AppError;
use crate::utils::validation::validate_dni;
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

pub struct EmployeeController {
    repository: EmployeeRepository,
}

impl EmployeeController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: EmployeeRepository::new(pool),
        }
    }

    pub async fn create(
        &self,
        request: CreateEmployeeRequest,
    ) -> Result<EmployeeResponse, AppError> {
        request.validate()?;

        validate_dni(&request.dni)
            .map_err(|_| AppError::BadRequest("formato de DNI inválido".to_string()))?;

        let employee = self
            .repository
            .create(request.full_name, request.dni, request.email)
            .await?;

        Ok(employee.into())
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<EmployeeResponse, AppError> {
        let employee = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Empleado {} no encontrado", id)))?;

        Ok(employee.into())
    }

    pub async fn list(&self) -> Result<Vec<EmployeeResponse>, AppError> {
        let employees = self.repository.list().await?;
        Ok(employees.into_iter().map(Into::into).collect())
    }

    pub async fn update(
        &self,
        id: Uuid,
        request: UpdateEmployeeRequest,
    ) -> Result<EmployeeResponse, AppError> {
        request.validate()?;

        let current = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Empleado {} no encontrado", id)))?;

        let dni = match request.dni {
            Some(dni) => {
                validate_dni(&dni)
                    .map_err(|_| AppError::BadRequest("formato de DNI inválido".to_string()))?;
                dni
            }
            None => current.dni,
        };

        let employee = self
            .repository
            .update(
                id,
                request.full_name.unwrap_or(current.full_name),
                dni,
                request.email.unwrap_or(current.email),
            )
            .await?;

        Ok(employee.into())
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Empleado {} no encontrado", id)))?;

        self.repository.delete(id).await?;

        Ok(())
    }
}
