//! Durable storage for the venue pipeline.
//!
//! Two stores sit on top of one [`KeyValueStore`] seam: [`CacheStore`] keeps
//! the last successfully fetched venue list, and [`StatusStore`] keeps the
//! user's favorite/disliked markers. They have independent lifecycles and
//! never read each other's slots.

pub mod cache;
pub mod error;
pub mod file;
pub mod kv;
pub mod memory;
pub mod status;

pub use cache::CacheStore;
pub use error::StoreError;
pub use file::FileKeyValueStore;
pub use kv::KeyValueStore;
pub use memory::MemoryKeyValueStore;
pub use status::StatusStore;
