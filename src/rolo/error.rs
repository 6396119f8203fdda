use thiserror::Error;

#[derive(Error, Debug)]
pub enum RoloError {
    #[error("Invalid phone number format: {0}")]
    InvalidPhone(String),

    #[error("Invalid birthday format: {0}")]
    InvalidBirthday(String),

    #[error("Phone number not found: {0}")]
    PhoneNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, RoloError>;
