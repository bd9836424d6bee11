mod booking;
mod catalog;
mod provider;
mod user;

pub use booking::{Booking, BookingId, BookingStatus, CreateBookingRequest};
pub use catalog::{ServiceCategory, ServiceId};
pub use provider::{
    CreateProviderRequest, DayHoursDto, Provider, ProviderFilters, ProviderId, ProviderLocation,
    ServiceItemDto, UpdateProviderRequest, WorkingHoursDto,
};
pub use user::{AccountType, AuthResponse, LoginRequest, RegisterRequest, User};
