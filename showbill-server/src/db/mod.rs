//! Database layer: pool, schema migrations, and one repository per record type

pub mod migrations;
pub mod pool;
pub mod repos;

pub use pool::create_pool;
pub use repos::DbError;
