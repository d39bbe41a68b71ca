pub mod config;
pub mod parse_csv;
pub mod scheduler;
pub mod types;
