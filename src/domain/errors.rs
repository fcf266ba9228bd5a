//! Domain error types
//!
//! These errors are framework-agnostic and represent business-level failures.

use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    /// Entity absent
    #[error("Not found: {0}")]
    NotFound(String),
    /// Duplicate relationship, or a delete blocked by dependent rows
    #[error("Conflict: {0}")]
    Conflict(String),
    /// Mismatched identifiers, self-reference or a field that failed validation
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    /// Stale write detected by the version check
    #[error("Concurrency conflict: {0}")]
    ConcurrencyConflict(String),
    /// Database/persistence error
    #[error("Database error: {0}")]
    Database(String),
}

impl DomainError {
    pub fn not_found(entity: &str, id: i32) -> Self {
        DomainError::NotFound(format!("{} {} not found", entity, id))
    }
}

// Conversion from SeaORM errors (used in infrastructure layer)
impl From<DbErr> for DomainError {
    fn from(e: DbErr) -> Self {
        match e.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(msg)) => return DomainError::Conflict(msg),
            Some(SqlErr::ForeignKeyConstraintViolation(msg)) => {
                return DomainError::Conflict(msg);
            }
            _ => {}
        }

        match e {
            DbErr::RecordNotFound(msg) => DomainError::NotFound(msg),
            DbErr::RecordNotUpdated => {
                DomainError::ConcurrencyConflict("record was modified or removed".to_string())
            }
            other => DomainError::Database(other.to_string()),
        }
    }
}
