//! Configuration, domain types and shared in-process state

pub mod config;
pub mod image_cache;
pub mod models;
