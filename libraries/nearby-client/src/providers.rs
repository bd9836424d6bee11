//! Provider listings and the signed-in provider's own profile.

use crate::config::OfflineSettings;
use crate::error::{ClientError, Result};
use crate::offline;
use crate::transport::{report_fallback, Transport};
use nearby_core::{
    CreateProviderRequest, Provider, ProviderFilters, ProviderId, ServiceItemDto,
    UpdateProviderRequest,
};
use nearby_storage::{KeyValueStore, ProviderReplica};
use reqwest::Method;
use tracing::{debug, info};

/// Providers client.
///
/// Reads fall back to the local replica when the API cannot be reached,
/// and a failed creation is recorded there so the new listing stays
/// visible for the rest of the session. Service-item mutations have no
/// fallback and just report success. A 2xx with an unreadable body is
/// [`ClientError::Response`] and never touches the replica.
pub struct ProvidersClient<'a> {
    transport: &'a Transport,
    replica: ProviderReplica<'a>,
    offline: &'a OfflineSettings,
}

impl<'a> ProvidersClient<'a> {
    pub(crate) fn new(
        transport: &'a Transport,
        store: &'a dyn KeyValueStore,
        offline: &'a OfflineSettings,
    ) -> Self {
        Self {
            transport,
            replica: ProviderReplica::new(store),
            offline,
        }
    }

    /// List providers matching `filters`.
    ///
    /// The offline fallback returns every replica entry; filters are not
    /// applied to it.
    pub async fn list(&self, filters: &ProviderFilters) -> Result<Vec<Provider>> {
        let query = filters.query_pairs();

        match self.transport.get::<Vec<Provider>>("/providers", &query).await {
            Ok(providers) => {
                debug!(count = providers.len(), "Fetched providers");
                Ok(providers)
            }
            Err(err) if !err.is_failure() => Err(ClientError::response(err)),
            Err(err) => {
                report_fallback("list_providers", &err);
                Ok(self.replica.read_all()?)
            }
        }
    }

    pub async fn get_by_id(&self, id: ProviderId) -> Result<Option<Provider>> {
        let path = format!("/providers/{}", id);

        match self.transport.get::<Provider>(&path, &[]).await {
            Ok(provider) => Ok(Some(provider)),
            Err(err) if !err.is_failure() => Err(ClientError::response(err)),
            Err(err) => {
                report_fallback("get_provider", &err);
                Ok(self.replica.find_by_id(id)?)
            }
        }
    }

    /// Create a provider profile.
    ///
    /// Offline, a listing is derived from the request, appended to the
    /// replica and returned as if the API had created it. Every call adds
    /// a new record.
    pub async fn create(&self, request: &CreateProviderRequest) -> Result<Provider> {
        match self
            .transport
            .post::<_, Provider>("/providers", request)
            .await
        {
            Ok(provider) => {
                info!(id = provider.id, name = %provider.name, "Provider created");
                Ok(provider)
            }
            Err(err) if !err.is_failure() => Err(ClientError::response(err)),
            Err(err) => {
                report_fallback("create_provider", &err);
                let provider = offline::offline_provider(offline::next_id(), request)?;
                self.replica.append(&provider)?;
                info!(id = provider.id, name = %provider.name, "Provider created locally");
                Ok(provider)
            }
        }
    }

    /// The signed-in user's provider profile.
    ///
    /// Offline this is the most recent replica entry, since the replica is
    /// not partitioned per user.
    pub async fn get_mine(&self) -> Result<Option<Provider>> {
        match self.transport.get::<Provider>("/providers/my", &[]).await {
            Ok(provider) => Ok(Some(provider)),
            Err(err) if !err.is_failure() => Err(ClientError::response(err)),
            Err(err) => {
                report_fallback("get_my_provider", &err);
                Ok(self.replica.latest()?)
            }
        }
    }

    /// Update the signed-in user's provider profile.
    ///
    /// `None` when the API cannot be reached, unless offline writes are
    /// mirrored, in which case the latest replica entry is updated instead.
    pub async fn update_mine(&self, request: &UpdateProviderRequest) -> Result<Option<Provider>> {
        match self
            .transport
            .put::<_, Provider>("/providers/my", request)
            .await
        {
            Ok(provider) => {
                info!(id = provider.id, "Provider updated");
                Ok(Some(provider))
            }
            Err(err) if !err.is_failure() => Err(ClientError::response(err)),
            Err(err) => {
                report_fallback("update_my_provider", &err);
                if !self.offline.mirror_writes {
                    return Ok(None);
                }

                let Some(mut provider) = self.replica.latest()? else {
                    return Ok(None);
                };
                request.apply_to(&mut provider);
                self.replica.replace_latest(&provider)?;
                info!(id = provider.id, "Provider updated locally");
                Ok(Some(provider))
            }
        }
    }

    /// Delete the signed-in user's provider profile.
    ///
    /// `false` when the API cannot be reached, unless offline writes are
    /// mirrored, in which case the latest replica entry is dropped.
    pub async fn delete_mine(&self) -> Result<bool> {
        match self.transport.delete("/providers/my").await {
            Ok(()) => {
                info!("Provider deleted");
                Ok(true)
            }
            Err(err) => {
                report_fallback("delete_my_provider", &err);
                if !self.offline.mirror_writes {
                    return Ok(false);
                }
                Ok(self.replica.remove_latest()?.is_some())
            }
        }
    }

    pub async fn add_service(&self, item: &ServiceItemDto) -> bool {
        let path = "/providers/my/services".to_string();
        self.mutate_service(Method::POST, path, Some(item), "add_service")
            .await
    }

    pub async fn update_service(&self, service_id: i64, item: &ServiceItemDto) -> bool {
        let path = format!("/providers/my/services/{}", service_id);
        self.mutate_service(Method::PUT, path, Some(item), "update_service")
            .await
    }

    pub async fn delete_service(&self, service_id: i64) -> bool {
        let path = format!("/providers/my/services/{}", service_id);
        self.mutate_service(Method::DELETE, path, None, "delete_service")
            .await
    }

    async fn mutate_service(
        &self,
        method: Method,
        path: String,
        item: Option<&ServiceItemDto>,
        operation: &'static str,
    ) -> bool {
        match self.transport.send(method, &path, item, &[]).await {
            Ok(()) => true,
            Err(err) => {
                report_fallback(operation, &err);
                false
            }
        }
    }
}
