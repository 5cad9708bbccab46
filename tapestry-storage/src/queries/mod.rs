//! Raw SQL operations, grouped per table. The engine owns connection
//! routing; everything here takes a plain `&Connection`.

pub mod cache_ops;
pub mod event_ops;
pub mod relation_ops;
