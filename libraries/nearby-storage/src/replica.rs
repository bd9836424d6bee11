//! Local replica of provider listings
//!
//! When the API cannot be reached, provider reads and creations fall back to
//! a list kept in durable storage under [`keys::LOCAL_PROVIDERS`]. The list is
//! ordered by insertion; the last entry stands in for "my provider" because
//! the store is not partitioned per user.
//!
//! Writes are read-modify-write without locking across calls. That is sound
//! for a single caller at a time; several processes sharing one store can
//! lose updates.

use crate::error::Result;
use crate::keys;
use crate::store::{read_json, write_json, KeyValueStore};
use nearby_core::{Provider, ProviderId};
use tracing::debug;

/// Accessor over the provider list in durable storage
pub struct ProviderReplica<'a> {
    store: &'a dyn KeyValueStore,
}

impl<'a> ProviderReplica<'a> {
    pub fn new(store: &'a dyn KeyValueStore) -> Self {
        Self { store }
    }

    /// All stored providers in insertion order.
    ///
    /// An absent key yields an empty list. Malformed content is returned as
    /// an error rather than silently discarded.
    pub fn read_all(&self) -> Result<Vec<Provider>> {
        Ok(read_json(self.store, keys::LOCAL_PROVIDERS)?.unwrap_or_default())
    }

    /// Append a provider and write the full list back.
    pub fn append(&self, provider: &Provider) -> Result<()> {
        let mut providers = self.read_all()?;
        providers.push(provider.clone());
        write_json(self.store, keys::LOCAL_PROVIDERS, &providers)?;

        debug!(id = provider.id, total = providers.len(), "Appended provider to local replica");
        Ok(())
    }

    pub fn find_by_id(&self, id: ProviderId) -> Result<Option<Provider>> {
        Ok(self.read_all()?.into_iter().find(|p| p.id == id))
    }

    /// The most recently appended provider.
    pub fn latest(&self) -> Result<Option<Provider>> {
        Ok(self.read_all()?.pop())
    }

    /// Overwrite the most recently appended provider.
    ///
    /// Returns `false` without writing when the replica is empty.
    pub fn replace_latest(&self, provider: &Provider) -> Result<bool> {
        let mut providers = self.read_all()?;
        let Some(last) = providers.last_mut() else {
            return Ok(false);
        };
        *last = provider.clone();
        write_json(self.store, keys::LOCAL_PROVIDERS, &providers)?;

        debug!(id = provider.id, "Replaced latest provider in local replica");
        Ok(true)
    }

    /// Drop the most recently appended provider, returning it.
    pub fn remove_latest(&self) -> Result<Option<Provider>> {
        let mut providers = self.read_all()?;
        let removed = providers.pop();
        if let Some(provider) = &removed {
            write_json(self.store, keys::LOCAL_PROVIDERS, &providers)?;
            debug!(id = provider.id, remaining = providers.len(), "Removed provider from local replica");
        }
        Ok(removed)
    }

    pub fn len(&self) -> Result<usize> {
        Ok(self.read_all()?.len())
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }
}
