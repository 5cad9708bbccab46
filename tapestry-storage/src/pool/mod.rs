//! SQLite connection handling: one serialized write connection and a
//! round-robin pool of readers. The engine owns both directly and decides
//! routing per operation.

pub mod pragmas;
pub mod read_pool;
pub mod write_connection;

pub use read_pool::ReadPool;
pub use write_connection::WriteConnection;
