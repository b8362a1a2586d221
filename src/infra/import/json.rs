use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::domain::entities::employee::EmployeeRecord;
use crate::infra::import::rows::normalize_record_dates;

/// A roster file is either a bare array of records or a `{ "content": [...] }` payload.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RosterDocument {
    Records(Vec<EmployeeRecord>),
    Payload { content: Vec<EmployeeRecord> },
}

pub fn parse_employees_json(text: &str) -> Result<Vec<EmployeeRecord>> {
    let document: RosterDocument =
        serde_json::from_str(text).context("roster json is neither a record array nor a content payload")?;
    let mut employees = match document {
        RosterDocument::Records(records) => records,
        RosterDocument::Payload { content } => content,
    };
    employees.iter_mut().for_each(normalize_record_dates);
    Ok(employees)
}

pub fn read_employees_json(json_path: &Path) -> Result<Vec<EmployeeRecord>> {
    let text = std::fs::read_to_string(json_path)
        .with_context(|| format!("failed to read json: {}", json_path.display()))?;
    let employees = parse_employees_json(&text)
        .with_context(|| format!("failed to parse json: {}", json_path.display()))?;
    tracing::debug!(path = %json_path.display(), rows = employees.len(), "json roster read");
    Ok(employees)
}
