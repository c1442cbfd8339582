use thiserror::Error;

#[derive(Debug, Error)]
pub enum SlewmeterError {
    #[error("Load error: {0}")]
    Load(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SlewmeterError>;
