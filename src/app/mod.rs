// src/app/mod.rs
//
// Application wiring: configuration, logging, bootstrap.

pub mod bootstrap;
pub mod config;

pub use bootstrap::{bootstrap, init_logging, init_logging_from};
pub use config::{AppConfig, StorageBackend, DEFAULT_QUOTA_BYTES};
