//! Records fabricated when the API cannot be reached.
//!
//! Authentication and provider creation are allowed to keep working offline:
//! these helpers derive a plausible local record from the caller's request.

use crate::error::{ClientError, Result};
use chrono::Utc;
use nearby_core::{
    AccountType, AuthResponse, CreateProviderRequest, Provider, RegisterRequest, User,
};
use std::sync::atomic::{AtomicI64, Ordering};
use uuid::Uuid;

/// Prefix of credentials minted locally
pub const OFFLINE_TOKEN_PREFIX: &str = "offline-";

/// Image used for offline providers created without one
pub const PLACEHOLDER_IMAGE: &str = "https://placehold.co/400x300?text=Provider";

/// Distance shown for providers created on this device
pub const LOCAL_DISTANCE: &str = "0 km";

/// Monotonic numeric id source
///
/// Ids look like millisecond timestamps but never repeat within a process:
/// each id is the current time or the previous id plus one, whichever is
/// larger.
#[derive(Debug, Default)]
pub struct IdGenerator {
    last: AtomicI64,
}

impl IdGenerator {
    pub const fn new() -> Self {
        Self {
            last: AtomicI64::new(0),
        }
    }

    pub fn next_id(&self) -> i64 {
        let now = Utc::now().timestamp_millis();
        let mut prev = self.last.load(Ordering::Relaxed);
        loop {
            let next = now.max(prev + 1);
            match self
                .last
                .compare_exchange_weak(prev, next, Ordering::Relaxed, Ordering::Relaxed)
            {
                Ok(_) => return next,
                Err(actual) => prev = actual,
            }
        }
    }
}

static IDS: IdGenerator = IdGenerator::new();

/// Next id from the process-wide generator.
pub fn next_id() -> i64 {
    IDS.next_id()
}

/// Fresh credential, unique across calls.
pub fn mint_token() -> String {
    format!("{}{}", OFFLINE_TOKEN_PREFIX, Uuid::new_v4().simple())
}

/// Text before the first `@`, or the whole address if there is none.
pub fn email_local_part(email: &str) -> &str {
    email.split_once('@').map_or(email, |(local, _)| local)
}

/// Session for a login attempt that could not reach the API.
pub fn offline_login(email: &str) -> AuthResponse {
    let user = local_user(
        email_local_part(email).to_string(),
        email.to_string(),
        String::new(),
        Some(AccountType::Client),
        None,
    );
    AuthResponse {
        user,
        token: mint_token(),
    }
}

/// Session for a registration that could not reach the API.
pub fn offline_registration(request: &RegisterRequest) -> AuthResponse {
    let user = local_user(
        request.name.clone(),
        request.email.clone(),
        request.phone.clone(),
        Some(request.user_type.unwrap_or(AccountType::Client)),
        request.business_name.clone(),
    );
    AuthResponse {
        user,
        token: mint_token(),
    }
}

fn local_user(
    name: String,
    email: String,
    phone: String,
    user_type: Option<AccountType>,
    business_name: Option<String>,
) -> User {
    User {
        id: next_id().to_string(),
        name,
        email,
        phone,
        avatar: None,
        created_at: Some(Utc::now().to_rfc3339()),
        user_type,
        role: None,
        business_name,
        is_blocked: None,
    }
}

/// Listing for a provider whose creation could not reach the API.
///
/// Fails when the request has no services, since `price_from` is the
/// minimum over them.
pub fn offline_provider(id: i64, request: &CreateProviderRequest) -> Result<Provider> {
    let price_from = request.min_price().ok_or_else(|| {
        ClientError::Synthesis("provider has no services to derive a starting price from".into())
    })?;

    Ok(Provider {
        id,
        name: request.business_name.clone(),
        profession: request.profession.clone(),
        rating: 0.0,
        review_count: 0,
        location: request.location.display(),
        distance: LOCAL_DISTANCE.to_string(),
        description: request.description.clone(),
        services: request.service_names(),
        features: request.features.clone(),
        price_from,
        image: request
            .image
            .clone()
            .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string()),
        is_premium: Some(false),
        is_available_today: Some(true),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_strictly_increasing() {
        let ids = IdGenerator::new();
        let mut prev = ids.next_id();
        for _ in 0..1000 {
            let id = ids.next_id();
            assert!(id > prev);
            prev = id;
        }
    }

    #[test]
    fn test_ids_track_wall_clock() {
        let before = Utc::now().timestamp_millis();
        assert!(IdGenerator::new().next_id() >= before);
    }

    #[test]
    fn test_email_local_part() {
        assert_eq!(email_local_part("dana@example.com"), "dana");
        assert_eq!(email_local_part("a@b@c"), "a");
        assert_eq!(email_local_part("no-at-sign"), "no-at-sign");
        assert_eq!(email_local_part("@example.com"), "");
    }

    #[test]
    fn test_tokens_are_prefixed_and_unique() {
        let a = mint_token();
        let b = mint_token();
        assert!(a.starts_with(OFFLINE_TOKEN_PREFIX));
        assert!(a.len() > OFFLINE_TOKEN_PREFIX.len());
        assert_ne!(a, b);
    }

    #[test]
    fn test_registration_keeps_supplied_fields() {
        let request = RegisterRequest {
            name: "Marat".into(),
            email: "marat@example.com".into(),
            phone: "+7 701 111 22 33".into(),
            password: "secret".into(),
            user_type: Some(AccountType::Provider),
            business_name: Some("Marat Repairs".into()),
        };

        let auth = offline_registration(&request);
        assert_eq!(auth.user.name, "Marat");
        assert_eq!(auth.user.phone, "+7 701 111 22 33");
        assert_eq!(auth.user.user_type, Some(AccountType::Provider));
        assert_eq!(auth.user.business_name.as_deref(), Some("Marat Repairs"));
        assert!(auth.user.id.parse::<i64>().is_ok());
    }
}
