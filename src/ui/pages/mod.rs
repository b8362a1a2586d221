pub mod create_employee;
pub mod employees;
