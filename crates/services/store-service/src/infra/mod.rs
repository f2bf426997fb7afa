//! Infrastructure layer - database connection and schema migrations.

pub(crate) mod db;
pub mod migrations;

pub use db::Database;
pub use migrations::Migrator;
