use thiserror::Error;

pub type Result<T> = std::result::Result<T, GitPulseError>;

#[derive(Error, Debug)]
pub enum GitPulseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Interchange format error: {0}")]
    Format(#[from] serde_json::Error),
}
