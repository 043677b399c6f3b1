pub mod config;
pub mod domains;
pub mod error;
pub mod models;
