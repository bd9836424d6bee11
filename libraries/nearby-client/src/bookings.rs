//! Bookings of provider services.

use crate::error::{ClientError, Result};
use crate::transport::{report_fallback, Transport};
use nearby_core::{Booking, BookingId, CreateBookingRequest};
use tracing::{info, warn};

/// Bookings client.
///
/// A booking is a real-world commitment, so creating or cancelling one is
/// never faked offline: a failed call comes back as
/// [`ClientError::Booking`] and nothing is written locally. Any 2xx means
/// the server has committed the booking, whatever the body looks like.
pub struct BookingsClient<'a> {
    transport: &'a Transport,
}

impl<'a> BookingsClient<'a> {
    pub(crate) fn new(transport: &'a Transport) -> Self {
        Self { transport }
    }

    /// Book a service.
    ///
    /// `None` when the API accepted the booking without returning a readable
    /// record.
    pub async fn create(&self, request: &CreateBookingRequest) -> Result<Option<Booking>> {
        match self
            .transport
            .post::<_, Option<Booking>>("/bookings", request)
            .await
        {
            Ok(Some(booking)) => {
                info!(
                    id = booking.id,
                    provider_id = booking.provider_id,
                    date = %booking.date,
                    time = %booking.time,
                    "Booking created"
                );
                Ok(Some(booking))
            }
            Ok(None) => {
                info!(provider_id = request.provider_id, "Booking created, no record returned");
                Ok(None)
            }
            Err(err) if !err.is_failure() => {
                warn!(error = %err, "Booking created, response unreadable");
                Ok(None)
            }
            Err(err) => {
                warn!(kind = %err.kind(), error = %err, "Booking could not be created");
                Err(ClientError::booking(err))
            }
        }
    }

    /// Bookings of the signed-in user; empty when the API cannot be reached.
    pub async fn list_mine(&self) -> Result<Vec<Booking>> {
        match self.transport.get::<Vec<Booking>>("/bookings/my", &[]).await {
            Ok(bookings) => Ok(bookings),
            Err(err) if !err.is_failure() => Err(ClientError::response(err)),
            Err(err) => {
                report_fallback("list_my_bookings", &err);
                Ok(Vec::new())
            }
        }
    }

    pub async fn cancel(&self, id: BookingId) -> Result<()> {
        let path = format!("/bookings/{}", id);

        match self.transport.delete(&path).await {
            Ok(()) => {
                info!(id, "Booking cancelled");
                Ok(())
            }
            Err(err) => {
                warn!(id, kind = %err.kind(), error = %err, "Booking could not be cancelled");
                Err(ClientError::booking(err))
            }
        }
    }
}
