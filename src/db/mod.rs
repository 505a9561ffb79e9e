// src/db/mod.rs
//
// Database module
//
// Provides:
// - Connection pooling
// - Schema initialization

pub mod connection;
pub mod migrations;

pub use connection::{
    create_connection_pool, create_test_pool, default_database_path, get_connection,
    ConnectionPool, PooledConn,
};

pub use migrations::{initialize_database, verify_database_integrity};
