use figment::Error as FigmentError;
use sqlx::Error as SqlxError;
use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum BuzzError {
    #[error("Database error: {0}")]
    Database(#[from] SqlxError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] FigmentError),

    #[error("record for table `{table}` did not serialize to an object")]
    InvalidRecord { table: &'static str },
}
