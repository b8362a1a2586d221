use std::path::PathBuf;

use crate::domain::entities::employee::EmployeeRecord;
use crate::infra::import::csv::read_employees_csv;
use crate::infra::import::json::read_employees_json;
use crate::infra::import::xlsx::read_employees_xlsx;
use crate::usecase::ports::source::{EmployeeSource, SourceError};

/// Extensions `FileEmployeeSource` knows how to read.
pub const ROSTER_EXTENSIONS: [&str; 6] = ["json", "csv", "xlsx", "xlsm", "xls", "ods"];

/// Roster backed by a file on disk; the reader is chosen by extension.
pub struct FileEmployeeSource {
    pub path: PathBuf,
}

impl FileEmployeeSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn extension(&self) -> String {
        self.path
            .extension()
            .and_then(|e| e.to_str())
            .map(|s| s.to_ascii_lowercase())
            .unwrap_or_default()
    }
}

impl EmployeeSource for FileEmployeeSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn load(&self) -> Result<Vec<EmployeeRecord>, SourceError> {
        if !self.path.is_file() {
            return Err(SourceError::NotFound(self.describe()));
        }

        let result = match self.extension().as_str() {
            "json" => read_employees_json(&self.path),
            "csv" => read_employees_csv(&self.path),
            "xlsx" | "xlsm" | "xls" | "ods" => read_employees_xlsx(&self.path),
            other => return Err(SourceError::Unsupported(other.to_string())),
        };

        result.map_err(|err| SourceError::Message(format!("{err:#}")))
    }
}
