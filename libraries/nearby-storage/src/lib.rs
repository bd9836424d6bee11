//! Nearby Storage
//!
//! Durable client-side state for the Nearby resource-client layer.
//!
//! # Architecture
//!
//! - **[`KeyValueStore`]**: the narrow `get`/`set`/`remove` capability every
//!   component receives at construction. Nothing reaches for global state.
//! - **[`MemoryStore`]**: volatile implementation for tests and throwaway sessions.
//! - **[`FileStore`]**: durable implementation persisted as one JSON file.
//! - **[`ProviderReplica`]**: the provider list used when the API is unreachable.
//!
//! # Example
//!
//! ```rust
//! use nearby_storage::{keys, KeyValueStore, MemoryStore, ProviderReplica};
//!
//! # fn example() -> Result<(), nearby_storage::StorageError> {
//! let store = MemoryStore::new();
//! store.set(keys::AUTH_TOKEN, "abc")?;
//!
//! let replica = ProviderReplica::new(&store);
//! assert!(replica.read_all()?.is_empty());
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

mod error;
mod file;
mod replica;
mod store;

pub mod keys;

pub use error::{Result, StorageError};
pub use file::FileStore;
pub use replica::ProviderReplica;
pub use store::{read_json, write_json, KeyValueStore, MemoryStore};
