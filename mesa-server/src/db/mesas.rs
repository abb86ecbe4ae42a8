//! Mesa database operations

use chrono::{DateTime, Utc};
use shared::models::mesa::{EstadoCount, EstadoMesa, Mesa, MesaCreate, MesaStats, MesaUpdate};
use sqlx::PgPool;
use uuid::Uuid;

pub async fn list(pool: &PgPool) -> Result<Vec<Mesa>, sqlx::Error> {
    sqlx::query_as("SELECT * FROM mesas ORDER BY numero_mesa")
        .fetch_all(pool)
        .await
}

pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<Mesa>, sqlx::Error> {
    sqlx::query_as("SELECT * FROM mesas WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}

/// Insert a mesa, applying the schema defaults for omitted fields.
/// A duplicate numero_mesa surfaces as a unique constraint violation.
pub async fn create(
    pool: &PgPool,
    id: Uuid,
    data: &MesaCreate,
    now: DateTime<Utc>,
) -> Result<Mesa, sqlx::Error> {
    let estado = data.estado.unwrap_or(EstadoMesa::Libre);
    let capacidad = data.capacidad.unwrap_or(4);
    let pedido_pendiente = data.pedido_pendiente.unwrap_or(false);
    let ultima_actualizacion = data.ultima_actualizacion.unwrap_or(now);

    sqlx::query_as(
        r#"
        INSERT INTO mesas (
            id, numero_mesa, estado, capacidad, pedido_pendiente, ultima_actualizacion
        )
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING *
        "#,
    )
    .bind(id)
    .bind(data.numero_mesa)
    .bind(estado)
    .bind(capacidad)
    .bind(pedido_pendiente)
    .bind(ultima_actualizacion)
    .fetch_one(pool)
    .await
}

/// Merge the supplied fields and refresh the update timestamp.
/// Returns `None` when no row matches the id.
pub async fn update(
    pool: &PgPool,
    id: Uuid,
    data: &MesaUpdate,
    now: DateTime<Utc>,
) -> Result<Option<Mesa>, sqlx::Error> {
    sqlx::query_as(
        r#"
        UPDATE mesas SET
            numero_mesa = COALESCE($1, numero_mesa),
            estado = COALESCE($2, estado),
            capacidad = COALESCE($3, capacidad),
            pedido_pendiente = COALESCE($4, pedido_pendiente),
            ultima_actualizacion = $5
        WHERE id = $6
        RETURNING *
        "#,
    )
    .bind(data.numero_mesa)
    .bind(data.estado)
    .bind(data.capacidad)
    .bind(data.pedido_pendiente)
    .bind(now)
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// Delete a mesa, returning the removed row when it existed.
pub async fn delete(pool: &PgPool, id: Uuid) -> Result<Option<Mesa>, sqlx::Error> {
    sqlx::query_as("DELETE FROM mesas WHERE id = $1 RETURNING *")
        .bind(id)
        .fetch_optional(pool)
        .await
}

/// Aggregate statistics: per-estado counts, average capacity, total count
/// and pending-order count. Averages and totals are zero on an empty
/// collection.
pub async fn stats(pool: &PgPool) -> Result<MesaStats, sqlx::Error> {
    let estados: Vec<EstadoCount> = sqlx::query_as(
        "SELECT estado, COUNT(*) AS count FROM mesas GROUP BY estado ORDER BY estado",
    )
    .fetch_all(pool)
    .await?;

    let (promedio_capacidad, total_mesas): (f64, i64) = sqlx::query_as(
        "SELECT COALESCE(AVG(capacidad), 0)::DOUBLE PRECISION, COUNT(*) FROM mesas",
    )
    .fetch_one(pool)
    .await?;

    let pedidos_pendientes: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM mesas WHERE pedido_pendiente")
            .fetch_one(pool)
            .await?;

    Ok(MesaStats {
        estados,
        promedio_capacidad,
        total_mesas,
        pedidos_pendientes,
    })
}
