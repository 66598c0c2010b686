use actix_web::{http::StatusCode, HttpResponse};
use company_registry_api_structs::FailureResponse;
use company_registry_infra::RepoError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("{0}")]
    InternalError(String),
    #[error("Could not connect to the database.")]
    StorageUnavailable,
    #[error("Invalid data provided: {0}")]
    BadClientData(String),
    #[error("The request conflicts with stored data: {0}")]
    Conflict(String),
    /// Reported with status 200 and `success: false`, which is what
    /// existing clients of this api expect
    #[error("{0}")]
    NotFound(String),
}

impl RegistryError {
    /// Maps a storage error, `failure_message` is shown when the statement
    /// itself failed
    pub fn from_storage(e: RepoError, failure_message: &str) -> Self {
        match e {
            RepoError::Unavailable(_) => Self::StorageUnavailable,
            RepoError::ConstraintViolation(msg) => Self::Conflict(msg),
            RepoError::Statement(_) => Self::InternalError(failure_message.into()),
        }
    }
}

impl actix_web::error::ResponseError for RegistryError {
    fn status_code(&self) -> StatusCode {
        match *self {
            Self::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::StorageUnavailable => StatusCode::INTERNAL_SERVER_ERROR,
            Self::BadClientData(_) => StatusCode::BAD_REQUEST,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::NotFound(_) => StatusCode::OK,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(FailureResponse::new(self.to_string()))
    }
}
