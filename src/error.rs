use thiserror::Error;

#[derive(Error, Debug)]
pub enum SnakeError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Settings file error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Audio error: {0}")]
    Audio(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("A tick timer is already running")]
    TimerAlreadyActive,
}

pub type Result<T> = std::result::Result<T, SnakeError>;
