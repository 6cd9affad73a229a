use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DomainError {
    #[error("Not authoritative for {0}")]
    NotAuthoritative(String),
}
