use thiserror::Error;

#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("Database connection error: {0}")]
    ConnectionError(String),

    #[error("Query execution error: {0}")]
    QueryError(#[from] sqlx::Error),

    #[error("Integrity constraint violation: {0}")]
    IntegrityError(String),

    #[error("Record not found: {0}")]
    NotFound(String),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid data: {0}")]
    InvalidData(String),
}

impl DatabaseError {
    /// True when the failure is a constraint violation reported by
    /// Postgres (or mapped explicitly by a query)
    pub fn is_integrity_error(&self) -> bool {
        match self {
            Self::IntegrityError(_) => true,
            Self::QueryError(e) => {
                if let Some(db_error) = e.as_database_error() {
                    // PostgreSQL integrity constraint violation codes
                    matches!(db_error.code().as_deref(),
                        Some("23505") | // unique_violation
                        Some("23503") | // foreign_key_violation
                        Some("23514")   // check_violation
                    )
                } else {
                    false
                }
            }
            _ => false,
        }
    }

    /// Check if this error is safe to retry from a fresh transaction.
    /// The ledger itself never retries; callers use this to decide whether
    /// a lost lock-wait or serialization conflict is worth another attempt.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::QueryError(e) => {
                if let Some(db_error) = e.as_database_error() {
                    matches!(db_error.code().as_deref(),
                        Some("40001") | // serialization_failure
                        Some("40P01")   // deadlock_detected
                    )
                } else {
                    false
                }
            }
            Self::ConnectionError(_) => true,
            _ => false,
        }
    }
}

pub type Result<T> = std::result::Result<T, DatabaseError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connection_errors_are_retryable() {
        let err = DatabaseError::ConnectionError("pool exhausted".to_string());
        assert!(err.is_retryable());
    }

    #[test]
    fn test_validation_errors_are_not_retryable() {
        let err = DatabaseError::InvalidData("bad row".to_string());
        assert!(!err.is_retryable());
        assert!(!err.is_integrity_error());
    }

    #[test]
    fn test_integrity_error_variant() {
        let err = DatabaseError::IntegrityError("duplicate redemption".to_string());
        assert!(err.is_integrity_error());
        assert!(!err.is_retryable());
    }
}
