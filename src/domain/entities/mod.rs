pub mod employee;
pub mod roster;
