//! Page-level workflows on top of the repository traits.

use thiserror::Error;

use crate::repository::errors::ApiError;

pub mod books;
pub mod cart;
pub mod categories;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("form error: {0}")]
    Form(String),

    #[error("type constraint violated: {0}")]
    TypeConstraint(String),

    #[error("user is not authenticated")]
    Unauthorized,
}

pub type ServiceResult<T> = Result<T, ServiceError>;
