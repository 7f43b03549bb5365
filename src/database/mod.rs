pub mod connection;
pub mod query;

pub use connection::Database;
