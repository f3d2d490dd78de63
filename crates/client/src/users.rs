//! User types
//!
//! Wire shapes for the current-user endpoint.

use serde::Deserialize;

/// The authenticated user a token belongs to
#[derive(Debug, Clone, Deserialize)]
pub struct User {
    /// Unique user identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Account email address
    pub email: String,
    /// Role assigned to the user
    pub role: Role,
}

/// A user's role within the organization
#[derive(Debug, Clone, Deserialize)]
pub struct Role {
    /// Unique role identifier
    pub id: String,
    /// Role display name
    pub name: String,
}
