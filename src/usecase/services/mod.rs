pub mod employee_store;
pub mod import_service;
pub mod render_model;
pub mod roster_view;
