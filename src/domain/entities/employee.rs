use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EmployeeField {
    FirstName,
    LastName,
    StartDate,
    Department,
    DateOfBirth,
    Street,
    City,
    State,
    ZipCode,
}

impl EmployeeField {
    /// Columns in display order.
    pub const ALL: [EmployeeField; 9] = [
        EmployeeField::FirstName,
        EmployeeField::LastName,
        EmployeeField::StartDate,
        EmployeeField::Department,
        EmployeeField::DateOfBirth,
        EmployeeField::Street,
        EmployeeField::City,
        EmployeeField::State,
        EmployeeField::ZipCode,
    ];

    /// Wire name used by roster files.
    pub fn key(self) -> &'static str {
        match self {
            EmployeeField::FirstName => "firstName",
            EmployeeField::LastName => "lastName",
            EmployeeField::StartDate => "startDate",
            EmployeeField::Department => "department",
            EmployeeField::DateOfBirth => "dateOfBirth",
            EmployeeField::Street => "street",
            EmployeeField::City => "city",
            EmployeeField::State => "states",
            EmployeeField::ZipCode => "zipCode",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            EmployeeField::FirstName => "First Name",
            EmployeeField::LastName => "Last Name",
            EmployeeField::StartDate => "Start Date",
            EmployeeField::Department => "Department",
            EmployeeField::DateOfBirth => "Date of Birth",
            EmployeeField::Street => "Street",
            EmployeeField::City => "City",
            EmployeeField::State => "State",
            EmployeeField::ZipCode => "Zip Code",
        }
    }

    pub fn is_date(self) -> bool {
        matches!(self, EmployeeField::StartDate | EmployeeField::DateOfBirth)
    }

    /// Resolves a header cell or wire name, ignoring case and surrounding whitespace.
    pub fn from_key(raw: &str) -> Option<Self> {
        let needle = raw.trim();
        Self::ALL.into_iter().find(|field| {
            field.key().eq_ignore_ascii_case(needle) || field.label().eq_ignore_ascii_case(needle)
        })
    }
}

/// One row of the roster. Every field may be missing in source data; readers treat
/// a missing field as empty text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EmployeeRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(rename = "states", skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zip_code: Option<String>,
}

impl EmployeeRecord {
    pub fn field(&self, field: EmployeeField) -> Option<&str> {
        let value = match field {
            EmployeeField::FirstName => &self.first_name,
            EmployeeField::LastName => &self.last_name,
            EmployeeField::StartDate => &self.start_date,
            EmployeeField::Department => &self.department,
            EmployeeField::DateOfBirth => &self.date_of_birth,
            EmployeeField::Street => &self.street,
            EmployeeField::City => &self.city,
            EmployeeField::State => &self.state,
            EmployeeField::ZipCode => &self.zip_code,
        };
        value.as_deref()
    }

    pub fn field_or_empty(&self, field: EmployeeField) -> &str {
        self.field(field).unwrap_or("")
    }

    pub fn set_field(&mut self, field: EmployeeField, value: impl Into<String>) {
        let slot = match field {
            EmployeeField::FirstName => &mut self.first_name,
            EmployeeField::LastName => &mut self.last_name,
            EmployeeField::StartDate => &mut self.start_date,
            EmployeeField::Department => &mut self.department,
            EmployeeField::DateOfBirth => &mut self.date_of_birth,
            EmployeeField::Street => &mut self.street,
            EmployeeField::City => &mut self.city,
            EmployeeField::State => &mut self.state,
            EmployeeField::ZipCode => &mut self.zip_code,
        };
        *slot = Some(value.into());
    }

    /// Builds a record from `(field, value)` pairs; fields not listed stay missing.
    #[cfg(test)]
    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (EmployeeField, &'a str)>) -> Self {
        let mut record = EmployeeRecord::default();
        for (field, value) in pairs {
            record.set_field(field, value);
        }
        record
    }
}
