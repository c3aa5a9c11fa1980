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
    create_connection_pool, create_connection_pool_at, create_test_connection, create_test_pool,
    get_database_path, ConnectionPool, PooledConn,
};

pub use migrations::initialize_database;
