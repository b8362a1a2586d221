pub mod modal;
pub mod roster_table;
