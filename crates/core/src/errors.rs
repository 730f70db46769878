//! Error types shared by every Tither crate.
//!
//! Nothing here depends on a database driver. The storage crate translates
//! Diesel and pool failures into [`DatabaseError`] before they reach callers.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Root error of the giving platform.
///
/// `InvalidAmount`, `InvalidConfiguration` and `UnknownOrganization` come out
/// of the round-up calculator and the ledger; the remaining variants cover
/// input checks and persistence.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Invalid round-up configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Unknown organization: {0}")]
    UnknownOrganization(String),

    #[error("Invalid request: {0}")]
    Validation(#[from] ValidationError),

    #[error("{0} not found")]
    NotFound(String),

    #[error("Conflict: {0}")]
    ConstraintViolation(String),

    #[error("Storage failure: {0}")]
    Database(#[from] DatabaseError),

    #[error("Unexpected failure: {0}")]
    Unexpected(String),
}

/// Persistence failures, carried as plain messages.
#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("Could not open the database: {0}")]
    ConnectionFailed(String),

    #[error("Could not build the connection pool: {0}")]
    PoolCreationFailed(String),

    #[error("Query failed: {0}")]
    QueryFailed(String),

    #[error("No such row: {0}")]
    NotFound(String),

    /// A duplicate slug, or a donor email already used in the organization.
    #[error("Duplicate value: {0}")]
    UniqueViolation(String),

    /// The row points at an organization, donor or fund that does not exist.
    #[error("Missing referenced row: {0}")]
    ForeignKeyViolation(String),

    #[error("Schema migration failed: {0}")]
    MigrationFailed(String),

    #[error("Storage internal error: {0}")]
    Internal(String),
}

#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("{0}")]
    InvalidInput(String),

    #[error("'{0}' is required")]
    MissingField(String),

    #[error("Not a decimal number: {0}")]
    DecimalParse(#[from] rust_decimal::Error),
}

impl Error {
    /// True when the error means the addressed record does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Error::NotFound(_) | Error::Database(DatabaseError::NotFound(_))
        )
    }
}

impl From<rust_decimal::Error> for Error {
    fn from(err: rust_decimal::Error) -> Self {
        Error::Validation(ValidationError::DecimalParse(err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_covers_both_layers() {
        assert!(Error::NotFound("Fund f-1".to_string()).is_not_found());
        assert!(Error::Database(DatabaseError::NotFound("row".to_string())).is_not_found());
        assert!(!Error::UnknownOrganization("org".to_string()).is_not_found());
    }

    #[test]
    fn messages_name_the_problem() {
        let err = Error::Validation(ValidationError::MissingField("fundId".to_string()));
        assert_eq!(err.to_string(), "Invalid request: 'fundId' is required");
        assert_eq!(
            Error::NotFound("Fund f-1".to_string()).to_string(),
            "Fund f-1 not found"
        );
    }
}
