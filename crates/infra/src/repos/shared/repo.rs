use sqlx::error::ErrorKind;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RepoError {
    /// No connection to the database could be obtained
    #[error("Storage is unavailable: {0}")]
    Unavailable(String),
    #[error("Constraint violated: {0}")]
    ConstraintViolation(String),
    #[error("Statement failed: {0}")]
    Statement(String),
}

impl RepoError {
    /// Used where a connection is acquired, any failure there means the
    /// database could not be reached.
    pub fn unavailable(e: sqlx::Error) -> Self {
        Self::Unavailable(e.to_string())
    }
}

impl From<sqlx::Error> for RepoError {
    fn from(e: sqlx::Error) -> Self {
        match &e {
            sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::Io(_)
            | sqlx::Error::Tls(_) => Self::Unavailable(e.to_string()),
            sqlx::Error::Database(db_err) => match db_err.kind() {
                ErrorKind::UniqueViolation
                | ErrorKind::ForeignKeyViolation
                | ErrorKind::NotNullViolation
                | ErrorKind::CheckViolation => {
                    Self::ConstraintViolation(db_err.message().to_string())
                }
                _ => Self::Statement(e.to_string()),
            },
            _ => Self::Statement(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pool_errors_mean_unavailable() {
        assert!(matches!(
            RepoError::from(sqlx::Error::PoolTimedOut),
            RepoError::Unavailable(_)
        ));
        assert!(matches!(
            RepoError::from(sqlx::Error::RowNotFound),
            RepoError::Statement(_)
        ));
    }
}
