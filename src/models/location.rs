//! Modelo de Location
//!
//! Este módulo contiene el struct Location que representa una reserva
//! de alquiler de coche. Mapea exactamente a la tabla locations con
//! primary key 'id'.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Location principal - una reserva que vincula un coche a un intervalo de fechas.
/// start_date y end_date quedan en NULL hasta que el alquiler comienza/termina.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub id: Uuid,
    pub car_id: Uuid,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}
