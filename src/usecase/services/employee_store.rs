use crate::domain::entities::employee::EmployeeRecord;

/// The roster list owned by the page layer. Every mutation bumps `revision`, which
/// views compare against to learn that the collection was replaced.
#[derive(Debug, Clone, Default)]
pub struct EmployeeStore {
    employees: Vec<EmployeeRecord>,
    revision: u64,
}

impl EmployeeStore {
    pub fn set_employees(&mut self, employees: Vec<EmployeeRecord>) {
        tracing::info!(count = employees.len(), "employee list replaced");
        self.employees = employees;
        self.revision += 1;
    }

    pub fn add_employee(&mut self, employee: EmployeeRecord) {
        self.employees.push(employee);
        self.revision += 1;
        tracing::info!(count = self.employees.len(), "employee added");
    }

    pub fn employees(&self) -> &[EmployeeRecord] {
        &self.employees
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }
}
