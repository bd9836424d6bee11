//! Booking types

use super::{ProviderId, ServiceId};
use serde::{Deserialize, Serialize};

pub type BookingId = i64;

/// Lifecycle state of a booking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Cancelled,
    Completed,
    /// Any status this client does not know about yet
    #[serde(other)]
    Unknown,
}

/// A booking of one provider service at a given date and time
///
/// Only `id` is required on the wire; the API may echo a partial record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: BookingId,
    #[serde(default)]
    pub provider_id: ProviderId,
    #[serde(default)]
    pub service_id: ServiceId,
    /// Calendar date, "YYYY-MM-DD"
    #[serde(default)]
    pub date: String,
    /// Time of day, "HH:MM"
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<BookingStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

/// Request body for `POST /bookings`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingRequest {
    pub provider_id: ProviderId,
    pub service_id: ServiceId,
    pub date: String,
    pub time: String,
    pub address: String,
}
