use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ProbeError {
    #[error("credential '{0}' is not set (check your .env file or environment)")]
    MissingCredential(String),

    #[error("failed to read env file {path}: {reason}")]
    CredentialFile { path: PathBuf, reason: String },

    #[error("roster file not found at {0}")]
    RosterNotFound(PathBuf),

    #[error("invalid roster: {0}")]
    InvalidRoster(String),

    #[error("failed to build http client: {0}")]
    HttpClient(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ProbeError>;
