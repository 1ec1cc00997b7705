use thiserror::Error;

use crate::domain::types::TypeConstraintError;
use crate::importer::ImportError;

pub mod auth;
pub mod imports;
pub mod orders;
pub mod products;

/// Generic error type used by service layer functions.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ServiceError {
    /// Malformed or missing caller input.
    #[error("{0}")]
    Validation(String),
    /// Bad credentials or a missing/invalid token.
    #[error("帳號或密碼錯誤")]
    Unauthorized,
    /// Requested resource was not found.
    #[error("not found")]
    NotFound,
    /// The external source was unreachable or unparseable.
    #[error("{0}")]
    Import(String),
    /// An unexpected internal error occurred. Details are logged, never
    /// surfaced to the caller.
    #[error("internal error")]
    Internal,
}

/// Convenient alias for results returned from service functions.
pub type ServiceResult<T> = Result<T, ServiceError>;

impl From<TypeConstraintError> for ServiceError {
    fn from(err: TypeConstraintError) -> Self {
        ServiceError::Validation(err.to_string())
    }
}

impl From<validator::ValidationErrors> for ServiceError {
    fn from(err: validator::ValidationErrors) -> Self {
        ServiceError::Validation(err.to_string())
    }
}

impl From<ImportError> for ServiceError {
    fn from(err: ImportError) -> Self {
        match err {
            ImportError::InvalidSource => ServiceError::Validation(err.to_string()),
            ImportError::Failed(_) => ServiceError::Import(err.to_string()),
        }
    }
}
