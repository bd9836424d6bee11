//! Nearby Core
//!
//! Domain and wire types shared by the Nearby resource-client layer.
//!
//! Every type here mirrors the JSON contract of the remote booking API
//! (camelCase field names). The crate has no I/O of its own; transport,
//! persistence and fallback policies live in `nearby-storage` and
//! `nearby-client`.
//!
//! # Example
//!
//! ```rust
//! use nearby_core::{CreateProviderRequest, ProviderLocation, ServiceItemDto};
//!
//! let request = CreateProviderRequest {
//!     business_name: "Sparkle Cleaning".into(),
//!     profession: "Cleaner".into(),
//!     category: "cleaning".into(),
//!     description: "Flats and offices".into(),
//!     experience: "5 years".into(),
//!     location: ProviderLocation {
//!         city: "Almaty".into(),
//!         district: "Medeu".into(),
//!         address: "Abay 10".into(),
//!         postal_code: "050000".into(),
//!     },
//!     services: vec![
//!         ServiceItemDto::new("Standard clean", 40.0, "2h"),
//!         ServiceItemDto::new("Deep clean", 90.0, "5h"),
//!     ],
//!     features: vec!["Eco products".into()],
//!     image: None,
//!     working_hours: None,
//! };
//!
//! assert_eq!(request.min_price(), Some(40.0));
//! assert_eq!(request.location.display(), "Almaty, Medeu");
//! ```

#![forbid(unsafe_code)]

pub mod types;

pub use types::{
    // Accounts
    AccountType, AuthResponse, LoginRequest, RegisterRequest, User,
    // Providers
    CreateProviderRequest, DayHoursDto, Provider, ProviderFilters, ProviderId, ProviderLocation,
    ServiceItemDto, UpdateProviderRequest, WorkingHoursDto,
    // Catalogue
    ServiceCategory, ServiceId,
    // Bookings
    Booking, BookingId, BookingStatus, CreateBookingRequest,
};
