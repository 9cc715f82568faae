use thiserror::Error;

#[derive(Error, Debug)]
pub enum AgroError {
    #[error("series length mismatch: {left} has {left_len} entries, {right} has {right_len}")]
    LengthMismatch {
        left: &'static str,
        left_len: usize,
        right: &'static str,
        right_len: usize,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid data: {0}")]
    InvalidData(String),

    #[error("Unknown crop: {0}")]
    UnknownCrop(String),
}

pub type Result<T> = std::result::Result<T, AgroError>;
