use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum DomainError {
    #[error("{message}")]
    Validation {
        field: &'static str,
        message: &'static str,
    },

    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("unexpected domain error: {0}")]
    Unexpected(String),
}
