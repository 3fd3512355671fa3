pub mod command;
pub mod registration;
pub mod whitelist;
