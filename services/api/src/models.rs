//! API models for request and response payloads

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub mod game;

/// Full user payload for registration and replacement
#[derive(Debug, Clone, Deserialize)]
pub struct UserPayload {
    pub nombre: String,
    pub email: String,
    pub password: String,
}

/// Request for user login
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Stored user row, including the password hash. Internal only,
/// never serialized to a response.
#[derive(Debug, Clone)]
pub struct User {
    pub id: Uuid,
    pub nombre: String,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Response for user operations
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: Uuid,
    pub nombre: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            nombre: user.nombre,
            email: user.email,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}
