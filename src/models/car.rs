//! Modelo de Car
//!
//! Mapea exactamente a la tabla cars. Las locations referencian un coche
//! via car_id (relación uno a muchos).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Car {
    pub id: Uuid,
    pub brand: String,
    pub model: String,
    pub year: Option<i32>,
    pub license_plate: String,
    pub created_at: DateTime<Utc>,
}
