//! Nearby Client
//!
//! Resource-client layer between UI callers and the Nearby booking API.
//!
//! # Features
//!
//! - **Transport**: one HTTP client with a fixed API root that attaches the
//!   stored bearer credential to every request
//! - **Auth**: login, registration, logout and profile fetch
//! - **Providers**: browse, create and manage provider profiles
//! - **Services**: public service catalogue
//! - **Bookings**: create, list and cancel bookings
//!
//! # Offline behaviour
//!
//! Every operation first calls the API. When that fails, it applies a fixed
//! fallback instead of returning the transport error:
//!
//! | Operation | Fallback |
//! |---|---|
//! | login, register | fabricate a local session |
//! | current user | `None` |
//! | list / get providers, my provider | read the local replica |
//! | create provider | derive a listing and append it to the replica |
//! | update / delete my provider | `None` / `false` (replica untouched by default) |
//! | service items | `false` |
//! | service catalogue, my bookings | empty list |
//! | create / cancel booking | `ClientError::Booking` |
//!
//! A 2xx response whose body cannot be decoded is not a failure, so no
//! fallback runs for it: it comes back as `ClientError::Response`, or as
//! `Ok(None)` from booking creation.
//!
//! # Example
//!
//! ```ignore
//! use nearby_client::{ClientConfig, NearbyClient};
//! use nearby_storage::FileStore;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let store = Arc::new(FileStore::open("./data/nearby-store.json")?);
//!     let client = NearbyClient::new(ClientConfig::new("https://nearby.example.com/api"), store)?;
//!
//!     let session = client.auth().login("dana@example.com", "secret").await;
//!     println!("Signed in as {}", session.user.name);
//!
//!     for service in client.services().list().await {
//!         println!("{}", service.name);
//!     }
//!
//!     Ok(())
//! }
//! ```

mod auth;
mod bookings;
mod client;
mod config;
mod error;
mod providers;
mod services;
mod transport;

pub mod offline;

// Re-export main types
pub use client::NearbyClient;
pub use config::{ClientConfig, OfflineSettings};
pub use error::{ClientError, Result};
pub use transport::{FailureKind, Transport, TransportError, TransportResult};

// Re-export sub-clients for direct use if needed
pub use auth::AuthClient;
pub use bookings::BookingsClient;
pub use providers::ProvidersClient;
pub use services::ServicesClient;
