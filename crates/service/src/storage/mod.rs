//! Storage abstractions for the client
//!
//! `KeyValueStore` is the seam the session layer writes through; the JSON
//! file store backs it in production and `MemoryStore` in tests.

pub mod json_map_store;
pub mod kv;

pub use json_map_store::JsonMapStore;
pub use kv::{KeyValueStore, MemoryStore};
