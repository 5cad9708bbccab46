//! # tapestry-cache
//!
//! Key-value cache of fetched external content with access-count/recency
//! metadata. Entries live in the cached_content table of the shared store;
//! producers read the cache while being gathered, independent of the
//! graph's cycle locking.

pub mod engine;
pub mod score;

pub use engine::ContentCache;
