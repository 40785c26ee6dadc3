use thiserror::Error;

#[derive(Error, Debug)]
pub enum InventoryError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid {field}: '{value}' ({reason})")]
    InvalidInputError {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, InventoryError>;
