//! Mesa (dining table) model
//!
//! Wire field names keep the original API's Spanish camelCase contract
//! (`numeroMesa`, `pedidoPendiente`, `ultimaActualizacion`).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Table occupancy state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[cfg_attr(
    feature = "db",
    sqlx(type_name = "estado_mesa", rename_all = "lowercase")
)]
pub enum EstadoMesa {
    Libre,
    Ocupada,
    Reservada,
}

impl EstadoMesa {
    /// Wire representation of the state
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Libre => "libre",
            Self::Ocupada => "ocupada",
            Self::Reservada => "reservada",
        }
    }
}

/// Error returned when parsing an unknown estado value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidEstado(pub String);

impl std::fmt::Display for InvalidEstado {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid estado: {}", self.0)
    }
}

impl std::error::Error for InvalidEstado {}

impl std::str::FromStr for EstadoMesa {
    type Err = InvalidEstado;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "libre" => Ok(Self::Libre),
            "ocupada" => Ok(Self::Ocupada),
            "reservada" => Ok(Self::Reservada),
            other => Err(InvalidEstado(other.to_string())),
        }
    }
}

impl std::fmt::Display for EstadoMesa {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Mesa entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Mesa {
    pub id: Uuid,
    pub numero_mesa: i32,
    pub estado: EstadoMesa,
    pub capacidad: i32,
    pub pedido_pendiente: bool,
    pub ultima_actualizacion: DateTime<Utc>,
}

/// Create mesa payload (produced by the schema validator)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MesaCreate {
    pub numero_mesa: i32,
    pub estado: Option<EstadoMesa>,
    pub capacidad: Option<i32>,
    pub pedido_pendiente: Option<bool>,
    pub ultima_actualizacion: Option<DateTime<Utc>>,
}

/// Partial update payload (produced by the schema validator)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MesaUpdate {
    pub numero_mesa: Option<i32>,
    pub estado: Option<EstadoMesa>,
    pub capacidad: Option<i32>,
    pub pedido_pendiente: Option<bool>,
    pub ultima_actualizacion: Option<DateTime<Utc>>,
}

impl MesaUpdate {
    /// True when no field was supplied; an empty update must not refresh
    /// the record's timestamp.
    pub fn is_empty(&self) -> bool {
        self.numero_mesa.is_none()
            && self.estado.is_none()
            && self.capacidad.is_none()
            && self.pedido_pendiente.is_none()
            && self.ultima_actualizacion.is_none()
    }
}

/// Per-estado mesa count
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct EstadoCount {
    pub estado: EstadoMesa,
    pub count: i64,
}

/// Aggregate statistics over the mesa collection
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MesaStats {
    pub estados: Vec<EstadoCount>,
    pub promedio_capacidad: f64,
    pub total_mesas: i64,
    pub pedidos_pendientes: i64,
}
