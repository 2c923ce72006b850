use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("{0}")]
    NotFound(String),
    #[error("{0:#}")]
    Internal(#[from] eyre::Error),
}

impl ReportError {
    pub fn not_found(msg: impl Into<String>) -> Self {
        ReportError::NotFound(msg.into())
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ReportError::NotFound(_))
    }
}
