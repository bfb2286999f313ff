use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientbookError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("This {kind} already exists: {name}")]
    DuplicateEntity { kind: &'static str, name: String },

    #[error("{kind} not found: {name}")]
    EntityNotFound { kind: &'static str, name: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ClientbookError>;
