use crate::session::SessionId;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SeminarError {
    #[error("Data file not found: {0}")]
    DataFileNotFound(PathBuf),

    #[error("Invalid session {id}: {reason}")]
    InvalidSession { id: SessionId, reason: String },

    #[error("Duplicate session id: {0}")]
    DuplicateSession(SessionId),

    #[error("Unknown user: {0}")]
    UnknownUser(String),

    #[error("Session not found: {0}")]
    SessionNotFound(SessionId),

    #[error("Session {0} is full")]
    SessionFull(SessionId),

    #[error("Session {0} is not open for registration")]
    SessionNotOpen(SessionId),

    #[error("{username} is already registered for session {id}")]
    AlreadyRegistered { id: SessionId, username: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("GUI error: {0}")]
    Gui(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SeminarError>;
