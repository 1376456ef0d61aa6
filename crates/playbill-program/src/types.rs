use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProgramError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("Unknown layout token: {0}")]
    UnknownLayoutToken(String),
    #[error("Booklet error: {0}")]
    Booklet(#[from] playbill_booklet::BookletError),
}

pub type Result<T> = std::result::Result<T, ProgramError>;
