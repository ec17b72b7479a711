pub mod config;
pub mod ease;
