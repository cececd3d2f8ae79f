//! Session store errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("session storage is unavailable")]
    Io(#[from] std::io::Error),

    #[error("stored session is unreadable")]
    Corrupt(#[from] serde_json::Error),
}
