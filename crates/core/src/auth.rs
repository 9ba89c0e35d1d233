//! Authentication gate.
//!
//! Credentials are checked by exact match against a fixed in-memory
//! allow-list. There is no hashing, lockout, or session expiry; this is
//! a single-tenant gate, not account infrastructure. Unknown usernames
//! and wrong passwords fail identically so the response never confirms
//! which usernames exist.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// One allow-list entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credential {
    pub username: String,
    pub password: String,
    pub name: String,
    pub role: String,
}

/// The record handed back on a successful login and persisted as the
/// session snapshot. Never carries the password.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    pub username: String,
    pub name: String,
    pub role: String,
}

/// The single message every authentication failure produces.
pub const INVALID_CREDENTIALS: &str = "invalid credentials";

/// Check a username/password pair against the allow-list.
pub fn authenticate(
    allow_list: &[Credential],
    username: &str,
    password: &str,
) -> Result<SessionUser, CoreError> {
    allow_list
        .iter()
        .find(|entry| entry.username == username && entry.password == password)
        .map(|entry| SessionUser {
            username: entry.username.clone(),
            name: entry.name.clone(),
            role: entry.role.clone(),
        })
        .ok_or_else(|| CoreError::Unauthorized(INVALID_CREDENTIALS.to_string()))
}
