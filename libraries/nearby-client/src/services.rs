//! Public service catalogue.

use crate::transport::{report_fallback, Transport};
use nearby_core::ServiceCategory;
use tracing::debug;

/// Catalogue client. There is no local copy; offline the catalogue is empty.
pub struct ServicesClient<'a> {
    transport: &'a Transport,
}

impl<'a> ServicesClient<'a> {
    pub(crate) fn new(transport: &'a Transport) -> Self {
        Self { transport }
    }

    pub async fn list(&self) -> Vec<ServiceCategory> {
        match self.transport.get::<Vec<ServiceCategory>>("/services", &[]).await {
            Ok(services) => {
                debug!(count = services.len(), "Fetched service catalogue");
                services
            }
            Err(err) => {
                report_fallback("list_services", &err);
                Vec::new()
            }
        }
    }
}
