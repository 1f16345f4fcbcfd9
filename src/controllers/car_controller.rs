use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::car_dto::CreateCarRequest;
use crate::models::Car;
use crate::repositories::car_repository::CarRepository;
use crate::utils::errors::{conflict_error, not_found_error, validation_error, AppError};
use crate::utils::validation::validate_not_empty;

pub struct CarController {
    repository: CarRepository,
}

impl CarController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: CarRepository::new(pool),
        }
    }

    pub async fn create(&self, request: CreateCarRequest) -> Result<Car, AppError> {
        request.validate()?;

        // length() no rechaza strings de solo espacios
        validate_not_empty(&request.brand)
            .map_err(|_| validation_error("brand", "brand is required"))?;
        validate_not_empty(&request.model)
            .map_err(|_| validation_error("model", "model is required"))?;

        // La matrícula identifica al coche de cara al cliente
        if self
            .repository
            .license_plate_exists(&request.license_plate)
            .await?
        {
            return Err(conflict_error("Car", "license_plate", &request.license_plate));
        }

        self.repository
            .create(
                request.brand,
                request.model,
                request.year,
                request.license_plate,
            )
            .await
    }

    pub async fn list_all(&self) -> Result<Vec<Car>, AppError> {
        self.repository.find_all().await
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<Car, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Car"))
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let deleted = self.repository.delete(id).await?;
        if !deleted {
            return Err(not_found_error("Car"));
        }
        Ok(())
    }
}
