//! Payload validation for the mesa resource
//!
//! Mirrors the two schemas of the original API: a create schema with a
//! required table number, and a partial-update schema with every field
//! optional. Field errors are collected in one pass and returned as a
//! field-keyed details map, so a bad payload never reaches persistence.

use chrono::{DateTime, Utc};
use serde_json::Value;
use shared::error::{AppError, AppResult};
use shared::models::mesa::{EstadoMesa, MesaCreate, MesaUpdate};

/// Per-field validation failures collected over a single pass
#[derive(Default)]
struct FieldErrors(Vec<(&'static str, &'static str)>);

impl FieldErrors {
    fn push(&mut self, field: &'static str, message: &'static str) {
        self.0.push((field, message));
    }

    fn into_result(self) -> AppResult<()> {
        if self.0.is_empty() {
            return Ok(());
        }
        let mut err = AppError::validation("Validation failed");
        for (field, message) in self.0 {
            err = err.with_detail(field, message);
        }
        Err(err)
    }
}

/// Validate a create payload. `numeroMesa` is required; every other field
/// is optional with per-field rules. Unknown fields are ignored.
pub fn parse_mesa_create(body: &Value) -> AppResult<MesaCreate> {
    let obj = require_object(body)?;
    let mut errors = FieldErrors::default();

    let numero_mesa = match obj.get("numeroMesa") {
        Some(v) => positive_int(v, "numeroMesa", &mut errors),
        None => {
            errors.push("numeroMesa", "is required");
            None
        }
    };
    let estado = obj.get("estado").and_then(|v| estado_value(v, &mut errors));
    let capacidad = obj
        .get("capacidad")
        .and_then(|v| positive_int(v, "capacidad", &mut errors));
    let pedido_pendiente = obj
        .get("pedidoPendiente")
        .and_then(|v| bool_value(v, "pedidoPendiente", &mut errors));
    let ultima_actualizacion = obj
        .get("ultimaActualizacion")
        .and_then(|v| fecha_value(v, "ultimaActualizacion", &mut errors));

    errors.into_result()?;

    let Some(numero_mesa) = numero_mesa else {
        return Err(AppError::validation("Validation failed").with_detail("numeroMesa", "is required"));
    };

    Ok(MesaCreate {
        numero_mesa,
        estado,
        capacidad,
        pedido_pendiente,
        ultima_actualizacion,
    })
}

/// Validate a partial-update payload: all fields of the create schema made
/// optional, same per-field rules.
pub fn parse_mesa_update(body: &Value) -> AppResult<MesaUpdate> {
    let obj = require_object(body)?;
    let mut errors = FieldErrors::default();

    let update = MesaUpdate {
        numero_mesa: obj
            .get("numeroMesa")
            .and_then(|v| positive_int(v, "numeroMesa", &mut errors)),
        estado: obj.get("estado").and_then(|v| estado_value(v, &mut errors)),
        capacidad: obj
            .get("capacidad")
            .and_then(|v| positive_int(v, "capacidad", &mut errors)),
        pedido_pendiente: obj
            .get("pedidoPendiente")
            .and_then(|v| bool_value(v, "pedidoPendiente", &mut errors)),
        ultima_actualizacion: obj
            .get("ultimaActualizacion")
            .and_then(|v| fecha_value(v, "ultimaActualizacion", &mut errors)),
    };

    errors.into_result()?;
    Ok(update)
}

// ── Field rules ──

fn require_object(body: &Value) -> AppResult<&serde_json::Map<String, Value>> {
    body.as_object()
        .ok_or_else(|| AppError::validation("Request body must be a JSON object"))
}

fn positive_int(v: &Value, field: &'static str, errors: &mut FieldErrors) -> Option<i32> {
    match v.as_i64() {
        Some(n) if n >= 1 => match i32::try_from(n) {
            Ok(n) => return Some(n),
            Err(_) => errors.push(field, "is out of range"),
        },
        _ => errors.push(field, "must be a positive integer"),
    }
    None
}

fn estado_value(v: &Value, errors: &mut FieldErrors) -> Option<EstadoMesa> {
    match v.as_str().and_then(|s| s.parse::<EstadoMesa>().ok()) {
        Some(estado) => Some(estado),
        None => {
            errors.push("estado", "must be one of libre, ocupada, reservada");
            None
        }
    }
}

fn bool_value(v: &Value, field: &'static str, errors: &mut FieldErrors) -> Option<bool> {
    match v.as_bool() {
        Some(b) => Some(b),
        None => {
            errors.push(field, "must be a boolean");
            None
        }
    }
}

fn fecha_value(v: &Value, field: &'static str, errors: &mut FieldErrors) -> Option<DateTime<Utc>> {
    match v.as_str().and_then(|s| DateTime::parse_from_rfc3339(s).ok()) {
        Some(fecha) => Some(fecha.with_timezone(&Utc)),
        None => {
            errors.push(field, "must be an RFC 3339 datetime string");
            None
        }
    }
}
