use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("unsupported platform: {os} (only windows and linux are supported)")]
    UnsupportedPlatform { os: String },

    #[error("profile listing failed: {detail}")]
    Listing { detail: String },

    #[error("user store error: {path}: {detail}")]
    Store { path: PathBuf, detail: String },

    #[error("invalid input: {0}")]
    Validation(String),

    #[error("username already exists: {0}")]
    DuplicateUser(String),

    #[error("no account matches that username and email")]
    UnknownAccount,

    #[error("password hashing failed: {0}")]
    Hash(#[from] bcrypt::BcryptError),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, Error>;
