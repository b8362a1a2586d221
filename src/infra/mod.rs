pub mod import;
pub mod source;
