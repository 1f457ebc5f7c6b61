use thiserror::Error;

#[derive(Error, Debug)]
pub enum HttpError {
    #[error("Request timed out: {0}")]
    Timeout(String),

    #[error("Connection failed: {0}")]
    Connect(String),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Invalid response body: {0}")]
    InvalidBody(String),
}

pub type Result<T> = std::result::Result<T, HttpError>;
