use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::domain::entities::employee::EmployeeRecord;
use crate::infra::source::file::FileEmployeeSource;
use crate::usecase::ports::source::{EmployeeSource, SourceError};

pub struct ImportService {
    default_roster: PathBuf,
}

impl ImportService {
    pub fn new(default_roster: PathBuf) -> Self {
        Self { default_roster }
    }

    pub fn default_roster(&self) -> &Path {
        &self.default_roster
    }

    pub fn load_from(&self, source: Arc<dyn EmployeeSource>) -> Result<Vec<EmployeeRecord>, SourceError> {
        let employees = source.load()?;
        tracing::info!(source = %source.describe(), rows = employees.len(), "roster loaded");
        Ok(employees)
    }

    pub fn load_path(&self, path: &Path) -> Result<Vec<EmployeeRecord>, SourceError> {
        self.load_from(Arc::new(FileEmployeeSource::new(path)))
    }

    /// A roster that does not exist yet is an empty roster.
    pub fn load_default(&self) -> Result<Vec<EmployeeRecord>, SourceError> {
        match self.load_path(&self.default_roster) {
            Err(SourceError::NotFound(path)) => {
                tracing::info!(%path, "no roster file yet, starting empty");
                Ok(Vec::new())
            }
            other => other,
        }
    }
}
