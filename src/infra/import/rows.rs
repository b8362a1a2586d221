use anyhow::Result;
use chrono::NaiveDate;

use crate::domain::entities::employee::{EmployeeField, EmployeeRecord};

const DISPLAY_DATE_FORMAT: &str = "%m/%d/%Y";

/// Maps header cells onto employee fields. Unknown columns map to `None`.
pub fn map_headers<S: AsRef<str>>(headers: &[S]) -> Result<Vec<Option<EmployeeField>>> {
    let mapping: Vec<Option<EmployeeField>> = headers
        .iter()
        .map(|header| EmployeeField::from_key(header.as_ref()))
        .collect();

    if mapping.iter().all(Option::is_none) {
        anyhow::bail!("roster header has no known employee columns")
    }

    Ok(mapping)
}

/// Builds a record from one row of cells. Empty cells and cells past the end of a
/// short row leave the field missing; a row with no values at all yields `None`.
pub fn record_from_row<S: AsRef<str>>(
    mapping: &[Option<EmployeeField>],
    row: &[S],
) -> Option<EmployeeRecord> {
    let mut record = EmployeeRecord::default();
    let mut any_value = false;

    for (col_idx, field) in mapping.iter().enumerate() {
        let Some(field) = field else {
            continue;
        };
        let value = row.get(col_idx).map(|cell| cell.as_ref().trim()).unwrap_or("");
        if value.is_empty() {
            continue;
        }
        any_value = true;
        if field.is_date() {
            record.set_field(*field, normalize_date(value));
        } else {
            record.set_field(*field, value);
        }
    }

    any_value.then_some(record)
}

/// Rewrites ISO dates (`2021-03-04`, optionally followed by a time) as `03/04/2021`.
/// Anything else is returned unchanged.
pub fn normalize_date(value: &str) -> String {
    let cut = value.len().min(10);
    let Some((date_part, rest)) = value.get(..cut).zip(value.get(cut..)) else {
        return value.to_string();
    };
    if !(rest.is_empty() || rest.starts_with('T')) {
        return value.to_string();
    }
    match NaiveDate::parse_from_str(date_part, "%Y-%m-%d") {
        Ok(date) => date.format(DISPLAY_DATE_FORMAT).to_string(),
        Err(_) => value.to_string(),
    }
}

pub fn format_display_date(date: NaiveDate) -> String {
    date.format(DISPLAY_DATE_FORMAT).to_string()
}

/// Dates that went through `normalize_date` on the way in.
pub fn normalize_record_dates(record: &mut EmployeeRecord) {
    for field in EmployeeField::ALL.into_iter().filter(|f| f.is_date()) {
        let normalized = record.field(field).map(normalize_date);
        if let Some(value) = normalized {
            record.set_field(field, value);
        }
    }
}
