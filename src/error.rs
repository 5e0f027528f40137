use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("data store unavailable")]
    DataUnavailable(#[from] anyhow::Error),

    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    Unauthorized(String),
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        AppError::DataUnavailable(e.into())
    }
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::DataUnavailable(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if let AppError::DataUnavailable(ref cause) = self {
            error!(error = %cause, "data store query failed");
        }
        // the Display of DataUnavailable never carries the underlying cause
        (self.status(), Json(json!({ "error": self.to_string() }))).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;

fn is_unique_violation(err: &anyhow::Error) -> bool {
    err.downcast_ref::<sqlx::Error>()
        .and_then(|e| e.as_database_error())
        .is_some_and(|db| db.is_unique_violation())
}

/// A 409 carrying `msg` when the write lost a unique-constraint race,
/// otherwise the usual data-store failure.
pub fn conflict_on_unique(err: anyhow::Error, msg: &str) -> AppError {
    if is_unique_violation(&err) {
        AppError::Conflict(msg.to_string())
    } else {
        AppError::DataUnavailable(err)
    }
}

/// Fails with a 400 carrying `msg` unless `cond` holds.
pub fn ensure(cond: bool, msg: &str) -> AppResult<()> {
    if cond {
        Ok(())
    } else {
        Err(AppError::Validation(msg.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::error::{DatabaseError, ErrorKind};

    #[test]
    fn data_unavailable_hides_cause() {
        let err = AppError::from(anyhow::anyhow!("connection refused: 10.0.0.3:5432"));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.to_string(), "data store unavailable");
    }

    #[test]
    fn statuses_follow_variant() {
        assert_eq!(AppError::NotFound("workout").status(), StatusCode::NOT_FOUND);
        assert_eq!(AppError::NotFound("workout").to_string(), "workout not found");
        assert_eq!(
            AppError::Validation("sets must be at least 1".into()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(AppError::Conflict("taken".into()).status(), StatusCode::CONFLICT);
        assert_eq!(
            AppError::Unauthorized("nope".into()).status(),
            StatusCode::UNAUTHORIZED
        );
    }

    #[derive(Debug)]
    struct PgError {
        unique: bool,
    }

    impl std::fmt::Display for PgError {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.write_str(self.message())
        }
    }

    impl std::error::Error for PgError {}

    impl DatabaseError for PgError {
        fn message(&self) -> &str {
            "duplicate key value violates unique constraint \"users_email_key\""
        }
        fn as_error(&self) -> &(dyn std::error::Error + Send + Sync + 'static) {
            self
        }
        fn as_error_mut(&mut self) -> &mut (dyn std::error::Error + Send + Sync + 'static) {
            self
        }
        fn into_error(self: Box<Self>) -> Box<dyn std::error::Error + Send + Sync + 'static> {
            self
        }
        fn kind(&self) -> ErrorKind {
            if self.unique {
                ErrorKind::UniqueViolation
            } else {
                ErrorKind::Other
            }
        }
    }

    #[test]
    fn detects_unique_violation_through_anyhow() {
        let dup = anyhow::Error::from(sqlx::Error::Database(Box::new(PgError { unique: true })));
        assert!(is_unique_violation(&dup));

        let other = anyhow::Error::from(sqlx::Error::Database(Box::new(PgError { unique: false })));
        assert!(!is_unique_violation(&other));
        assert!(!is_unique_violation(&anyhow::Error::from(sqlx::Error::RowNotFound)));
        assert!(!is_unique_violation(&anyhow::anyhow!("socket closed")));
    }

    #[test]
    fn lost_insert_race_is_a_conflict() {
        let dup = anyhow::Error::from(sqlx::Error::Database(Box::new(PgError { unique: true })));
        let err = conflict_on_unique(dup, "Email already registered");
        assert!(matches!(err, AppError::Conflict(_)));
        assert_eq!(err.status(), StatusCode::CONFLICT);
        assert_eq!(err.to_string(), "Email already registered");

        let down = anyhow::Error::from(sqlx::Error::PoolTimedOut);
        let err = conflict_on_unique(down, "Email already registered");
        assert!(matches!(err, AppError::DataUnavailable(_)));
    }
}
