//! Durable storage keys shared by every component.

/// Bearer credential of the current session
pub const AUTH_TOKEN: &str = "nearby.auth_token";

/// JSON-encoded `User` of the current session
pub const CURRENT_USER: &str = "nearby.current_user";

/// JSON-encoded array of `Provider` records kept for offline use
pub const LOCAL_PROVIDERS: &str = "nearby.local_providers";
