// Cache module for the repository list.
// Session-scoped or on-disk key/value storage with expiring entries.

pub mod entry;
pub mod paths;
pub mod store;

pub use entry::ExpiringCache;
pub use store::{FileStore, KeyValueStore, MemoryStore};
