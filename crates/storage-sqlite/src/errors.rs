//! Failures raised inside the SQLite layer.
//!
//! Everything leaves this crate as a `tither_core::Error`; the variants here
//! only exist so Diesel and r2d2 errors can be matched before translation.

use diesel::result::{DatabaseErrorKind, Error as DieselError};
use thiserror::Error;
use tither_core::errors::{DatabaseError, Error};

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Could not open SQLite database: {0}")]
    ConnectionFailed(#[from] diesel::ConnectionError),

    #[error("No pooled connection available: {0}")]
    PoolError(#[from] r2d2::Error),

    #[error("Diesel query failed: {0}")]
    QueryFailed(#[from] DieselError),

    #[error("Could not apply migrations: {0}")]
    MigrationFailed(String),

    /// A JSON list column or a decimal text column failed to decode.
    #[error("Malformed column value: {0}")]
    SerializationError(String),

    #[error("Database directory error: {0}")]
    Io(#[from] std::io::Error),

    /// A core error raised inside a write job; passed through unchanged.
    #[error(transparent)]
    Core(#[from] Error),
}

impl From<serde_json::Error> for StorageError {
    fn from(err: serde_json::Error) -> Self {
        StorageError::SerializationError(err.to_string())
    }
}

impl From<rust_decimal::Error> for StorageError {
    fn from(err: rust_decimal::Error) -> Self {
        StorageError::SerializationError(err.to_string())
    }
}

impl From<StorageError> for Error {
    fn from(err: StorageError) -> Self {
        let db_err = match err {
            StorageError::Core(e) => return e,
            StorageError::ConnectionFailed(e) => DatabaseError::ConnectionFailed(e.to_string()),
            StorageError::PoolError(e) => DatabaseError::PoolCreationFailed(e.to_string()),
            StorageError::QueryFailed(DieselError::NotFound) => {
                DatabaseError::NotFound("query returned no rows".to_string())
            }
            StorageError::QueryFailed(DieselError::DatabaseError(kind, info)) => {
                let message = info.message().to_string();
                match kind {
                    DatabaseErrorKind::UniqueViolation => DatabaseError::UniqueViolation(message),
                    DatabaseErrorKind::ForeignKeyViolation => {
                        DatabaseError::ForeignKeyViolation(message)
                    }
                    _ => DatabaseError::QueryFailed(message),
                }
            }
            StorageError::QueryFailed(e) => DatabaseError::QueryFailed(e.to_string()),
            StorageError::MigrationFailed(e) => DatabaseError::MigrationFailed(e),
            StorageError::SerializationError(e) => DatabaseError::Internal(e),
            StorageError::Io(e) => DatabaseError::Internal(e.to_string()),
        };
        Error::Database(db_err)
    }
}

/// Converts read-path Diesel and r2d2 results into core results. The orphan
/// rule forbids `From<DieselError> for tither_core::Error`, hence the detour
/// through [`StorageError`].
pub trait IntoCore<T> {
    fn into_core(self) -> tither_core::Result<T>;
}

impl<T> IntoCore<T> for std::result::Result<T, DieselError> {
    fn into_core(self) -> tither_core::Result<T> {
        self.map_err(|e| StorageError::from(e).into())
    }
}

impl<T> IntoCore<T> for std::result::Result<T, r2d2::Error> {
    fn into_core(self) -> tither_core::Result<T> {
        self.map_err(|e| StorageError::from(e).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_maps_to_core_not_found() {
        let err: Error = StorageError::QueryFailed(DieselError::NotFound).into();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_core_errors_pass_through() {
        let err: Error = StorageError::from(Error::InvalidAmount("0".to_string())).into();
        assert!(matches!(err, Error::InvalidAmount(_)));
    }
}
