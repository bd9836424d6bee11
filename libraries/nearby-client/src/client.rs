//! Main Nearby client.

use crate::auth::AuthClient;
use crate::bookings::BookingsClient;
use crate::config::{ClientConfig, OfflineSettings};
use crate::error::Result;
use crate::providers::ProvidersClient;
use crate::services::ServicesClient;
use crate::transport::Transport;
use nearby_storage::KeyValueStore;
use std::sync::Arc;
use tracing::info;

/// Main client for the Nearby API.
///
/// Owns the transport and the durable store, and hands out one short-lived
/// client per entity family. Each of them shares the same store, so a
/// credential saved by [`AuthClient::login`] is attached to every later
/// request.
///
/// # Example
///
/// ```ignore
/// use nearby_client::{ClientConfig, NearbyClient};
/// use nearby_storage::MemoryStore;
/// use std::sync::Arc;
///
/// let client = NearbyClient::new(
///     ClientConfig::new("https://nearby.example.com/api"),
///     Arc::new(MemoryStore::new()),
/// )?;
///
/// let session = client.auth().login("dana@example.com", "secret").await;
/// println!("Signed in as {}", session.user.name);
///
/// let providers = client.providers().list(&Default::default()).await?;
/// println!("{} providers nearby", providers.len());
/// ```
pub struct NearbyClient {
    transport: Transport,
    store: Arc<dyn KeyValueStore>,
    offline: OfflineSettings,
}

impl NearbyClient {
    /// Create a new client with the given configuration and durable store.
    pub fn new(config: ClientConfig, store: Arc<dyn KeyValueStore>) -> Result<Self> {
        let transport = Transport::new(&config, Arc::clone(&store))?;

        info!(
            base_url = %transport.base_url(),
            mirror_writes = config.offline.mirror_writes,
            "Nearby client ready"
        );

        Ok(Self {
            transport,
            store,
            offline: config.offline,
        })
    }

    /// Get the API root.
    pub fn base_url(&self) -> &str {
        self.transport.base_url()
    }

    pub fn store(&self) -> &dyn KeyValueStore {
        self.store.as_ref()
    }

    pub fn transport(&self) -> &Transport {
        &self.transport
    }

    pub fn auth(&self) -> AuthClient<'_> {
        AuthClient::new(&self.transport, self.store.as_ref())
    }

    pub fn providers(&self) -> ProvidersClient<'_> {
        ProvidersClient::new(&self.transport, self.store.as_ref(), &self.offline)
    }

    pub fn services(&self) -> ServicesClient<'_> {
        ServicesClient::new(&self.transport)
    }

    pub fn bookings(&self) -> BookingsClient<'_> {
        BookingsClient::new(&self.transport)
    }
}
