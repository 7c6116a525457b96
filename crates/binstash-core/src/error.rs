use std::path::PathBuf;

use thiserror::Error;

pub type CoreResult<T> = Result<T, CoreError>;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("size must be >= 0, got {0}")]
    NegativeSize(i64),

    #[error("duration must be >= 0, got {0}")]
    NegativeDuration(f64),

    #[error("file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
