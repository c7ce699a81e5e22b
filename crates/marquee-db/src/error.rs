//! Error types for the data layer.
//!
//! Every store method returns [`DbError`]. Write failures are classified at
//! conversion time -- constraint violations, connectivity failures, and
//! other query errors are distinct variants -- so callers can collapse them
//! into one user-facing message while keeping the distinction for logs and
//! tests.

/// Errors that can occur in the data layer.
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    /// A schema constraint rejected the statement (foreign key, unique,
    /// check -- `PostgreSQL` error class 23).
    #[error("constraint violation: {0}")]
    Constraint(String),

    /// The database could not be reached or the pool gave up.
    #[error("connectivity error: {0}")]
    Connectivity(String),

    /// Any other `PostgreSQL` query failure.
    #[error("query error: {0}")]
    Query(sqlx::Error),

    /// A `PostgreSQL` migration failed.
    #[error("migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// A configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

impl DbError {
    /// Whether this error is a schema constraint violation.
    pub const fn is_constraint(&self) -> bool {
        matches!(self, Self::Constraint(_))
    }

    /// Short tag for structured log fields.
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Constraint(_) => "constraint",
            Self::Connectivity(_) => "connectivity",
            Self::Query(_) => "query",
            Self::Migration(_) => "migration",
            Self::Config(_) => "config",
        }
    }
}

impl From<sqlx::Error> for DbError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::Database(db) if db.code().is_some_and(|c| c.starts_with("23")) => {
                Self::Constraint(db.message().to_owned())
            }
            sqlx::Error::Io(io) => Self::Connectivity(format!("i/o error: {io}")),
            e @ (sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed) => {
                Self::Connectivity(e.to_string())
            }
            other => Self::Query(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pool_errors_classify_as_connectivity() {
        let err = DbError::from(sqlx::Error::PoolTimedOut);
        assert!(matches!(err, DbError::Connectivity(_)));
        assert_eq!(err.kind(), "connectivity");
    }

    #[test]
    fn row_not_found_classifies_as_query() {
        let err = DbError::from(sqlx::Error::RowNotFound);
        assert!(matches!(err, DbError::Query(_)));
        assert!(!err.is_constraint());
    }
}
