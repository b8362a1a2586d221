use std::path::Path;

use anyhow::{Context, Result};

use crate::domain::entities::employee::EmployeeRecord;
use crate::infra::import::rows::{map_headers, record_from_row};

pub fn read_employees_csv(csv_path: &Path) -> Result<Vec<EmployeeRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(csv_path)
        .with_context(|| format!("failed to open csv: {}", csv_path.display()))?;
    let headers = reader
        .headers()
        .with_context(|| format!("failed to read headers from csv: {}", csv_path.display()))?
        .clone();

    if headers.is_empty() {
        anyhow::bail!("csv header is required")
    }

    let header_cells: Vec<&str> = headers.iter().collect();
    let mapping = map_headers(&header_cells)?;

    let mut employees = Vec::new();
    for (row_idx, record) in reader.records().enumerate() {
        let record =
            record.with_context(|| format!("failed to parse csv record #{}", row_idx + 1))?;
        let cells: Vec<&str> = record.iter().collect();
        if let Some(employee) = record_from_row(&mapping, &cells) {
            employees.push(employee);
        }
    }

    tracing::debug!(path = %csv_path.display(), rows = employees.len(), "csv roster read");
    Ok(employees)
}
