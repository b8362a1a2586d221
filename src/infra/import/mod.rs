pub mod csv;
pub mod json;
pub mod rows;
pub mod xlsx;
