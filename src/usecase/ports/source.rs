use crate::domain::entities::employee::EmployeeRecord;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceError {
    NotFound(String),
    Unsupported(String),
    Message(String),
}

impl std::fmt::Display for SourceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SourceError::NotFound(path) => write!(f, "roster file not found: {path}"),
            SourceError::Unsupported(ext) => write!(f, "unsupported roster format: {ext}"),
            SourceError::Message(message) => write!(f, "{message}"),
        }
    }
}

impl std::error::Error for SourceError {}

pub trait EmployeeSource: Send + Sync {
    /// Human-readable origin, used in status lines and logs.
    fn describe(&self) -> String;

    fn load(&self) -> Result<Vec<EmployeeRecord>, SourceError>;
}
