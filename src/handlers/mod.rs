pub mod command;
pub mod registration;
