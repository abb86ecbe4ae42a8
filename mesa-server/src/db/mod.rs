//! Database access layer

pub mod mesas;
pub mod users;

/// True when the error is a storage-level unique constraint violation.
///
/// Uniqueness (user email, mesa number) is enforced by unique indexes
/// alone; handlers translate violations into 409 responses.
pub fn is_unique_violation(e: &sqlx::Error) -> bool {
    matches!(e, sqlx::Error::Database(db) if db.is_unique_violation())
}
