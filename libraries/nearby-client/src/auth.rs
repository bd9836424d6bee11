//! Authentication against the Nearby API.

use crate::offline;
use crate::transport::{report_fallback, Transport};
use nearby_core::{AuthResponse, LoginRequest, RegisterRequest, User};
use nearby_storage::{keys, read_json, write_json, KeyValueStore};
use reqwest::Method;
use tracing::{debug, info, warn};

/// Authentication client.
///
/// Login and registration never fail: if the API cannot be reached a local
/// session is fabricated so the user is not blocked. Either way the
/// credential and the user are kept in durable storage, where the
/// transport picks the credential up for every later request.
pub struct AuthClient<'a> {
    transport: &'a Transport,
    store: &'a dyn KeyValueStore,
}

impl<'a> AuthClient<'a> {
    pub(crate) fn new(transport: &'a Transport, store: &'a dyn KeyValueStore) -> Self {
        Self { transport, store }
    }

    /// Login with email and password.
    pub async fn login(&self, email: &str, password: &str) -> AuthResponse {
        debug!(email = %email, "Attempting login");

        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };

        let auth = match self
            .transport
            .post::<_, AuthResponse>("/auth/login", &request)
            .await
        {
            Ok(auth) => {
                info!(user_id = %auth.user.id, "Login successful");
                auth
            }
            Err(err) => {
                report_fallback("login", &err);
                offline::offline_login(email)
            }
        };

        self.remember(&auth);
        auth
    }

    /// Register a new account.
    pub async fn register(&self, request: &RegisterRequest) -> AuthResponse {
        debug!(email = %request.email, "Attempting registration");

        let auth = match self
            .transport
            .post::<_, AuthResponse>("/auth/register", request)
            .await
        {
            Ok(auth) => {
                info!(user_id = %auth.user.id, "Registration successful");
                auth
            }
            Err(err) => {
                report_fallback("register", &err);
                offline::offline_registration(request)
            }
        };

        self.remember(&auth);
        auth
    }

    /// End the session.
    ///
    /// The stored credential and user are cleared whatever the server says.
    pub async fn logout(&self) {
        if let Err(err) = self
            .transport
            .send::<()>(Method::POST, "/auth/logout", None, &[])
            .await
        {
            debug!(error = %err, "Logout request failed, clearing local session anyway");
        }

        for key in [keys::AUTH_TOKEN, keys::CURRENT_USER] {
            if let Err(e) = self.store.remove(key) {
                warn!(key, error = %e, "Failed to clear session entry");
            }
        }
        info!("Logged out");
    }

    /// Fetch the signed-in user from the API.
    ///
    /// Unlike login, this never fabricates a user: `None` when the call fails.
    pub async fn current_user(&self) -> Option<User> {
        match self.transport.get::<User>("/auth/me", &[]).await {
            Ok(user) => {
                if let Err(e) = write_json(self.store, keys::CURRENT_USER, &user) {
                    warn!(error = %e, "Failed to cache current user");
                }
                Some(user)
            }
            Err(err) => {
                debug!(kind = %err.kind(), error = %err, "Current user unavailable");
                None
            }
        }
    }

    /// User cached by the last login, registration or profile fetch.
    pub fn cached_user(&self) -> Option<User> {
        read_json(self.store, keys::CURRENT_USER).unwrap_or_else(|e| {
            warn!(error = %e, "Ignoring unreadable cached user");
            None
        })
    }

    /// The stored bearer credential.
    pub fn token(&self) -> Option<String> {
        self.store.get(keys::AUTH_TOKEN).ok().flatten()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    fn remember(&self, auth: &AuthResponse) {
        if let Err(e) = self.store.set(keys::AUTH_TOKEN, &auth.token) {
            warn!(error = %e, "Failed to persist credential");
        }
        if let Err(e) = write_json(self.store, keys::CURRENT_USER, &auth.user) {
            warn!(error = %e, "Failed to cache user");
        }
    }
}
