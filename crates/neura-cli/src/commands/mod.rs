pub mod chat;
pub mod config;
pub mod energy;
pub mod finance;
pub mod fitness;
pub mod focus;
pub mod insights;
pub mod shell;
pub mod task;
