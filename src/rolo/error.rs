use thiserror::Error;

#[derive(Error, Debug)]
pub enum RoloError {
    #[error("Invalid phone {0:?}: expected exactly 12 decimal digits")]
    InvalidPhone(String),

    #[error("Invalid birthday {0:?}: expected a real date in DD-MM-YYYY format")]
    InvalidBirthday(String),

    #[error("Contact not found: {0}")]
    NotFound(String),

    #[error("Phone index {index} is out of range ({len} phone(s) on record)")]
    PhoneIndexOutOfRange { index: usize, len: usize },

    #[error("Missing required {0}")]
    EmptyInput(&'static str),

    #[error("Corrupt contacts data: {0}")]
    Corrupt(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, RoloError>;
