use sea_orm::DbErr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Not found")]
    NotFound,

    #[error("Invalid pagination: {0}")]
    InvalidPagination(String),

    #[error("Invalid input: {0}")]
    Invalid(String),

    #[error("Database error: {0}")]
    Database(#[source] DbErr),
}

