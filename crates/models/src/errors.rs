use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("invalid JSON data")]
    InvalidData,
    #[error("json document not found")]
    NotFound,
}
