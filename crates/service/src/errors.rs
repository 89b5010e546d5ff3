use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("student {0} not found")]
    NotFound(i64),
    #[error("storage error: {0}")]
    Storage(String),
    #[error("serialization error: {0}")]
    Serialization(String),
}

impl ServiceError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}
