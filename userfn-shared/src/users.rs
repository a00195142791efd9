use serde::{Deserialize, Serialize};

///
/// A stored user as it is returned to clients.
///
/// Keys follow the column names of the `users` table.
///
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct UserResponse {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    /// ISO-8601 timestamp assigned by the database.
    pub created_on: Option<String>,
}

///
/// Informational body for mutations and lookups without a result.
///
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
