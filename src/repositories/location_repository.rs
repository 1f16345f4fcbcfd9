use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::Location;
use crate::utils::errors::AppError;

pub struct LocationRepository {
    pool: PgPool,
}

impl LocationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        car_id: Uuid,
        start_date: Option<DateTime<Utc>>,
        end_date: Option<DateTime<Utc>>,
    ) -> Result<Location, AppError> {
        let location = sqlx::query_as::<_, Location>(
            r#"
            INSERT INTO locations (id, car_id, start_date, end_date, created_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(car_id)
        .bind(start_date)
        .bind(end_date)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(location)
    }

    /// Listado completo, la reserva más reciente primero
    pub async fn find_all(&self) -> Result<Vec<Location>, AppError> {
        let locations =
            sqlx::query_as::<_, Location>("SELECT * FROM locations ORDER BY created_at DESC")
                .fetch_all(&self.pool)
                .await?;

        Ok(locations)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Location>, AppError> {
        let location = sqlx::query_as::<_, Location>("SELECT * FROM locations WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(location)
    }

    /// Persistir el registro ya fusionado por el controller.
    /// created_at e id nunca cambian.
    pub async fn update(
        &self,
        id: Uuid,
        car_id: Uuid,
        start_date: Option<DateTime<Utc>>,
        end_date: Option<DateTime<Utc>>,
    ) -> Result<Option<Location>, AppError> {
        let location = sqlx::query_as::<_, Location>(
            r#"
            UPDATE locations
            SET car_id = $2, start_date = $3, end_date = $4
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(car_id)
        .bind(start_date)
        .bind(end_date)
        .fetch_optional(&self.pool)
        .await?;

        Ok(location)
    }

    pub async fn delete(&self, id: Uuid) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM locations WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Buscar una reserva existente del coche cuyo intervalo se solape con el
    /// solicitado. Test de intersección con límites inclusivos:
    /// existente.start_date <= fin solicitado AND existente.end_date >= inicio solicitado.
    /// Las reservas sin fechas no participan (NULL no satisface la comparación).
    pub async fn find_overlapping(
        &self,
        car_id: Uuid,
        start_date: DateTime<Utc>,
        end_date: DateTime<Utc>,
    ) -> Result<Option<Location>, AppError> {
        let location = sqlx::query_as::<_, Location>(
            r#"
            SELECT * FROM locations
            WHERE car_id = $1 AND start_date <= $3 AND end_date >= $2
            LIMIT 1
            "#,
        )
        .bind(car_id)
        .bind(start_date)
        .bind(end_date)
        .fetch_optional(&self.pool)
        .await?;

        Ok(location)
    }

    /// Marcar el inicio del alquiler. Sobrescribe cualquier start_date previo.
    pub async fn set_start_date(
        &self,
        id: Uuid,
        start_date: DateTime<Utc>,
    ) -> Result<Option<Location>, AppError> {
        let location = sqlx::query_as::<_, Location>(
            "UPDATE locations SET start_date = $2 WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(start_date)
        .fetch_optional(&self.pool)
        .await?;

        Ok(location)
    }

    /// Marcar el fin del alquiler. No se verifica end_date > start_date.
    pub async fn set_end_date(
        &self,
        id: Uuid,
        end_date: DateTime<Utc>,
    ) -> Result<Option<Location>, AppError> {
        let location = sqlx::query_as::<_, Location>(
            "UPDATE locations SET end_date = $2 WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(end_date)
        .fetch_optional(&self.pool)
        .await?;

        Ok(location)
    }
}
