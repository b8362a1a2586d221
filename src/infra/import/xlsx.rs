use std::path::Path;

use anyhow::{Context, Result};
use calamine::{open_workbook_auto, Data, Reader};
use chrono::{NaiveDate, TimeDelta};

use crate::domain::entities::employee::EmployeeRecord;
use crate::infra::import::rows::{format_display_date, map_headers, normalize_date, record_from_row};

pub fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::String(v) => v.trim().to_string(),
        Data::Float(v) if v.fract() == 0.0 && v.abs() < 1e15 => format!("{}", *v as i64),
        Data::Float(v) => v.to_string(),
        Data::Int(v) => v.to_string(),
        Data::Bool(v) => v.to_string(),
        Data::DateTime(v) => {
            excel_serial_to_date(v.as_f64()).map_or_else(|| v.to_string(), format_display_date)
        }
        Data::DateTimeIso(v) => normalize_date(v),
        Data::DurationIso(v) => v.to_string(),
        Data::Error(v) => format!("{v:?}"),
        Data::Empty => String::new(),
    }
}

/// Excel serial day numbers count from 1899-12-30.
fn excel_serial_to_date(serial: f64) -> Option<NaiveDate> {
    let epoch = NaiveDate::from_ymd_opt(1899, 12, 30)?;
    let days = TimeDelta::try_days(serial.trunc() as i64)?;
    epoch.checked_add_signed(days)
}

/// Reads the first worksheet; its first row is the header.
pub fn read_employees_xlsx(xlsx_path: &Path) -> Result<Vec<EmployeeRecord>> {
    let mut workbook = open_workbook_auto(xlsx_path)
        .with_context(|| format!("failed to open workbook: {}", xlsx_path.display()))?;
    let range = workbook
        .worksheet_range_at(0)
        .context("workbook has no worksheet")?
        .with_context(|| format!("failed to read first sheet of {}", xlsx_path.display()))?;

    let mut rows = range
        .rows()
        .map(|r| r.iter().map(cell_to_string).collect::<Vec<String>>());
    let Some(headers) = rows.next() else {
        anyhow::bail!("worksheet is empty")
    };
    let mapping = map_headers(&headers)?;

    let employees: Vec<EmployeeRecord> = rows
        .filter_map(|row| record_from_row(&mapping, &row))
        .collect();

    tracing::debug!(path = %xlsx_path.display(), rows = employees.len(), "workbook roster read");
    Ok(employees)
}
