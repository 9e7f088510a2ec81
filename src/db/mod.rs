//! Database layer (MySQL bootstrap).

pub mod mysql;

pub use mysql::Database;
