use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::{Car, Location};

// Request para crear una location
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateLocationRequest {
    pub car_id: Uuid,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
}

// Request para actualizar una location (campos parciales)
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateLocationRequest {
    pub car_id: Option<Uuid>,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
}

// Request para verificar disponibilidad. car_id y las fechas llegan como
// strings y se validan explícitamente en el controller.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckAvailabilityRequest {
    pub car_id: String,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

/// Respuesta de la simulación de disponibilidad.
/// status es "disponible" (con precio estimado) o "en location".
#[derive(Debug, Serialize)]
pub struct AvailabilityResponse {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl AvailabilityResponse {
    pub fn available(price: f64) -> Self {
        Self {
            status: "disponible".to_string(),
            price: Some(price),
            message: None,
        }
    }

    pub fn unavailable(message: &str) -> Self {
        Self {
            status: "en location".to_string(),
            price: None,
            message: Some(message.to_string()),
        }
    }
}

// Location con su coche poblado, para el listado
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationWithCarResponse {
    pub id: Uuid,
    pub car_id: Uuid,
    pub car: Option<Car>,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl LocationWithCarResponse {
    pub fn from_location(location: Location, car: Option<Car>) -> Self {
        Self {
            id: location.id,
            car_id: location.car_id,
            car,
            start_date: location.start_date,
            end_date: location.end_date,
            created_at: location.created_at,
        }
    }
}

// Response genérica
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub message: Option<String>,
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            message: None,
            data: Some(data),
        }
    }

    pub fn success_with_message(data: T, message: String) -> Self {
        Self {
            success: true,
            message: Some(message),
            data: Some(data),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_availability_response_available_omits_message() {
        let body = serde_json::to_value(AvailabilityResponse::available(150.0)).unwrap();
        assert_eq!(body["status"], "disponible");
        assert_eq!(body["price"], 150.0);
        assert!(body.get("message").is_none());
    }

    #[test]
    fn test_availability_response_unavailable_omits_price() {
        let body = serde_json::to_value(AvailabilityResponse::unavailable(
            "Car is already rented for the selected dates.",
        ))
        .unwrap();
        assert_eq!(body["status"], "en location");
        assert!(body.get("price").is_none());
        assert!(body["message"].as_str().unwrap().contains("already rented"));
    }
}
