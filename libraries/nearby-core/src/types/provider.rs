//! Provider types
//!
//! A provider is a business offering services on the platform. The read
//! model (`Provider`) is a flattened listing; the write models carry the
//! structured data the API needs to build one.

use serde::{Deserialize, Serialize};

pub type ProviderId = i64;

/// Provider listing as shown in search results and profile pages
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Provider {
    pub id: ProviderId,
    pub name: String,
    pub profession: String,
    pub rating: f64,
    pub review_count: u32,
    /// Human-readable location, e.g. "Almaty, Medeu"
    pub location: String,
    /// Distance from the viewer, e.g. "1.2 km"
    pub distance: String,
    #[serde(default)]
    pub description: String,
    /// Service names only; prices live on the provider's service items
    #[serde(default)]
    pub services: Vec<String>,
    #[serde(default)]
    pub features: Vec<String>,
    /// Lowest price across the provider's services
    pub price_from: f64,
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_premium: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_available_today: Option<bool>,
}

/// A service offered by a provider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceItemDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    pub price: f64,
    /// Free-form duration, e.g. "1h 30m"
    pub duration: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

impl ServiceItemDto {
    /// Create a service item with an empty description.
    pub fn new(name: impl Into<String>, price: f64, duration: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            price,
            duration: duration.into(),
            description: String::new(),
            is_active: None,
        }
    }
}

/// Structured address supplied when a provider is created
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderLocation {
    pub city: String,
    pub district: String,
    pub address: String,
    pub postal_code: String,
}

impl ProviderLocation {
    /// Flattened form used by the `Provider` listing.
    pub fn display(&self) -> String {
        format!("{}, {}", self.city, self.district)
    }
}

/// Opening hours for a single weekday
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayHoursDto {
    /// Opening time, "HH:MM"
    pub from: String,
    /// Closing time, "HH:MM"
    pub to: String,
    pub enabled: bool,
}

/// Weekly opening hours. Transported as-is, never validated client-side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkingHoursDto {
    pub monday: DayHoursDto,
    pub tuesday: DayHoursDto,
    pub wednesday: DayHoursDto,
    pub thursday: DayHoursDto,
    pub friday: DayHoursDto,
    pub saturday: DayHoursDto,
    pub sunday: DayHoursDto,
}

/// Request body for `POST /providers`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProviderRequest {
    pub business_name: String,
    pub profession: String,
    pub category: String,
    pub description: String,
    pub experience: String,
    pub location: ProviderLocation,
    pub services: Vec<ServiceItemDto>,
    pub features: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub working_hours: Option<WorkingHoursDto>,
}

impl CreateProviderRequest {
    /// Lowest service price, or `None` when no services were supplied.
    pub fn min_price(&self) -> Option<f64> {
        min_price(&self.services)
    }

    pub fn service_names(&self) -> Vec<String> {
        self.services.iter().map(|s| s.name.clone()).collect()
    }
}

/// Request body for `PUT /providers/my`. Unset fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProviderRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub business_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profession: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub services: Option<Vec<ServiceItemDto>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub features: Option<Vec<String>>,
}

impl UpdateProviderRequest {
    /// Apply the set fields to a listing.
    ///
    /// `is_active` has no counterpart on the listing and is ignored. A
    /// non-empty service list replaces the service names and recomputes
    /// `price_from`; an empty one clears the names but keeps the old price.
    pub fn apply_to(&self, provider: &mut Provider) {
        if let Some(name) = &self.business_name {
            provider.name.clone_from(name);
        }
        if let Some(profession) = &self.profession {
            provider.profession.clone_from(profession);
        }
        if let Some(description) = &self.description {
            provider.description.clone_from(description);
        }
        if let Some(location) = &self.location {
            provider.location.clone_from(location);
        }
        if let Some(image) = &self.image {
            provider.image.clone_from(image);
        }
        if let Some(services) = &self.services {
            provider.services = services.iter().map(|s| s.name.clone()).collect();
            if let Some(price) = min_price(services) {
                provider.price_from = price;
            }
        }
        if let Some(features) = &self.features {
            provider.features.clone_from(features);
        }
    }
}

/// Query filters for `GET /providers`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProviderFilters {
    pub category: Option<String>,
    pub location: Option<String>,
    pub min_rating: Option<f64>,
}

impl ProviderFilters {
    pub fn is_empty(&self) -> bool {
        self.category.is_none() && self.location.is_none() && self.min_rating.is_none()
    }

    /// Query parameters in wire form. Unset filters are omitted.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(category) = &self.category {
            pairs.push(("category", category.clone()));
        }
        if let Some(location) = &self.location {
            pairs.push(("location", location.clone()));
        }
        if let Some(min_rating) = self.min_rating {
            pairs.push(("minRating", min_rating.to_string()));
        }
        pairs
    }
}

fn min_price(services: &[ServiceItemDto]) -> Option<f64> {
    services.iter().map(|s| s.price).reduce(f64::min)
}
