//! Error taxonomy for settlement file ingestion.

use thiserror::Error;

/// Main error type for the settlement pipeline.
#[derive(Error, Debug)]
pub enum SettleError {
    /// A line could not be shaped into a record for its channel: too
    /// short, a required field missing, or undecodable bytes.
    #[error("input shape error: {0}")]
    InputShape(String),

    /// A reference was extracted but the amount field was not numeric.
    #[error("amount parse error: {0}")]
    AmountParse(String),

    /// Invalid channel id, invalid area, missing file, or file over
    /// the size limit.
    #[error("validation error: {0}")]
    Validation(String),

    /// Unknown job id.
    #[error("job not found: {0}")]
    JobNotFound(String),

    /// Any uncaught failure inside a worker.
    #[error("internal error: {0}")]
    Internal(String),

    /// IO error (reading uploads, writing archives).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Archive assembly failure from the `zip` crate.
    #[error("archive error: {0}")]
    Archive(#[from] zip::result::ZipError),
}

impl SettleError {
    /// Build an [`SettleError::InputShape`] error.
    pub fn input_shape(msg: impl Into<String>) -> Self {
        Self::InputShape(msg.into())
    }

    /// Build an [`SettleError::AmountParse`] error.
    pub fn amount_parse(msg: impl Into<String>) -> Self {
        Self::AmountParse(msg.into())
    }

    /// Build a [`SettleError::Validation`] error.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`SettleError::JobNotFound`] error.
    pub fn job_not_found(id: impl Into<String>) -> Self {
        Self::JobNotFound(id.into())
    }

    /// Build a [`SettleError::Internal`] error.
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}

/// Result type alias for settlement pipeline operations.
pub type SettleResult<T> = Result<T, SettleError>;
