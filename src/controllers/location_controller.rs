use std::collections::HashMap;

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::location_dto::{
    AvailabilityResponse, CheckAvailabilityRequest, CreateLocationRequest, LocationWithCarResponse,
    UpdateLocationRequest,
};
use crate::models::{Car, Location};
use crate::repositories::car_repository::CarRepository;
use crate::repositories::location_repository::LocationRepository;
use crate::utils::errors::{bad_request_error, not_found_error, validation_error, AppError};
use crate::utils::validation::{validate_date_or_datetime, validate_uuid};

/// Tarifa plana por día usada en la simulación de precio
pub const FLAT_RATE_PER_DAY: f64 = 50.0;

const INVALID_RANGE_MSG: &str = "Invalid start or end date.";

pub struct LocationController {
    locations: LocationRepository,
    cars: CarRepository,
}

impl LocationController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            locations: LocationRepository::new(pool.clone()),
            cars: CarRepository::new(pool),
        }
    }

    pub async fn create(&self, request: CreateLocationRequest) -> Result<Location, AppError> {
        request.validate()?;
        validate_date_order(request.start_date, request.end_date)?;

        self.locations
            .create(request.car_id, request.start_date, request.end_date)
            .await
    }

    /// Listado con el coche poblado. Lectura explícita en dos pasos:
    /// primero las locations, luego los coches referenciados por lote.
    pub async fn list_all(&self) -> Result<Vec<LocationWithCarResponse>, AppError> {
        let locations = self.locations.find_all().await?;

        let mut car_ids: Vec<Uuid> = locations.iter().map(|l| l.car_id).collect();
        car_ids.sort_unstable();
        car_ids.dedup();

        let cars: HashMap<Uuid, Car> = self
            .cars
            .find_by_ids(&car_ids)
            .await?
            .into_iter()
            .map(|car| (car.id, car))
            .collect();

        let response = locations
            .into_iter()
            .map(|location| {
                let car = cars.get(&location.car_id).cloned();
                LocationWithCarResponse::from_location(location, car)
            })
            .collect();

        Ok(response)
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<Location, AppError> {
        self.locations
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Location"))
    }

    /// Actualización parcial: fusionar los campos recibidos sobre el registro
    /// actual y re-validar el resultado antes de persistir.
    pub async fn update(
        &self,
        id: Uuid,
        request: UpdateLocationRequest,
    ) -> Result<Location, AppError> {
        request.validate()?;

        let current = self
            .locations
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Location"))?;

        let car_id = request.car_id.unwrap_or(current.car_id);
        let start_date = request.start_date.or(current.start_date);
        let end_date = request.end_date.or(current.end_date);

        validate_date_order(start_date, end_date)?;

        self.locations
            .update(id, car_id, start_date, end_date)
            .await?
            .ok_or_else(|| not_found_error("Location"))
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let deleted = self.locations.delete(id).await?;
        if !deleted {
            return Err(not_found_error("Location"));
        }
        Ok(())
    }

    /// Verificar si el coche está libre en el intervalo pedido y simular el
    /// precio. Lectura pura, no escribe nada: una creación posterior no está
    /// coordinada con esta verificación.
    pub async fn check_availability(
        &self,
        request: CheckAvailabilityRequest,
    ) -> Result<AvailabilityResponse, AppError> {
        let car_id = validate_uuid(&request.car_id)
            .map_err(|_| bad_request_error("Invalid carId."))?;

        let (start_date, end_date) = match (&request.start_date, &request.end_date) {
            (Some(start), Some(end)) => {
                let start = validate_date_or_datetime(start)
                    .map_err(|_| bad_request_error(INVALID_RANGE_MSG))?;
                let end = validate_date_or_datetime(end)
                    .map_err(|_| bad_request_error(INVALID_RANGE_MSG))?;
                (start, end)
            }
            _ => return Err(bad_request_error(INVALID_RANGE_MSG)),
        };

        if start_date >= end_date {
            return Err(bad_request_error(INVALID_RANGE_MSG));
        }

        let existing = self
            .locations
            .find_overlapping(car_id, start_date, end_date)
            .await?;

        if existing.is_some() {
            return Ok(AvailabilityResponse::unavailable(
                "Car is already rented for the selected dates.",
            ));
        }

        Ok(AvailabilityResponse::available(rental_price(
            start_date, end_date,
        )))
    }

    /// Démarrer la location: fija start_date al instante actual
    pub async fn start(&self, id: Uuid) -> Result<Location, AppError> {
        self.locations
            .set_start_date(id, Utc::now())
            .await?
            .ok_or_else(|| not_found_error("Location"))
    }

    /// Terminer la location: fija end_date al instante actual.
    /// No se comprueba end_date > start_date; terminar antes de
    /// démarrer es representable.
    pub async fn end(&self, id: Uuid) -> Result<Location, AppError> {
        self.locations
            .set_end_date(id, Utc::now())
            .await?
            .ok_or_else(|| not_found_error("Location"))
    }
}

/// Precio estimado: duración en días (puede ser fraccional) por la tarifa plana
pub fn rental_price(start_date: DateTime<Utc>, end_date: DateTime<Utc>) -> f64 {
    let duration_days = (end_date - start_date).num_milliseconds() as f64 / 86_400_000.0;
    duration_days * FLAT_RATE_PER_DAY
}

/// Invariante del modelo: cuando ambas fechas están presentes,
/// start_date debe ser estrictamente anterior a end_date
fn validate_date_order(
    start_date: Option<DateTime<Utc>>,
    end_date: Option<DateTime<Utc>>,
) -> Result<(), AppError> {
    if let (Some(start), Some(end)) = (start_date, end_date) {
        if start >= end {
            return Err(validation_error(
                "end_date",
                "endDate must be after startDate",
            ));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn date(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
    }

    #[test]
    fn test_rental_price_full_days() {
        let price = rental_price(date(2024, 2, 1), date(2024, 2, 4));
        assert_eq!(price, 3.0 * FLAT_RATE_PER_DAY);
    }

    #[test]
    fn test_rental_price_fractional_days() {
        let start = Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2024, 2, 1, 12, 0, 0).unwrap();
        assert_eq!(rental_price(start, end), 0.5 * FLAT_RATE_PER_DAY);
    }

    #[test]
    fn test_date_order_accepts_missing_dates() {
        assert!(validate_date_order(None, None).is_ok());
        assert!(validate_date_order(Some(date(2024, 1, 10)), None).is_ok());
        assert!(validate_date_order(None, Some(date(2024, 1, 15))).is_ok());
    }

    #[test]
    fn test_date_order_rejects_inverted_interval() {
        let result = validate_date_order(Some(date(2024, 1, 15)), Some(date(2024, 1, 10)));
        assert!(result.is_err());

        let equal = validate_date_order(Some(date(2024, 1, 10)), Some(date(2024, 1, 10)));
        assert!(equal.is_err());
    }

    #[test]
    fn test_date_order_accepts_valid_interval() {
        assert!(validate_date_order(Some(date(2024, 1, 10)), Some(date(2024, 1, 15))).is_ok());
    }
}
