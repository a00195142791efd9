use chrono::{DateTime, Utc};
use userfn_shared::users::UserResponse;

///
/// Client supplied identifier of a user.
///
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UserId(String);

impl UserId {
    ///
    /// Parse a [`UserId`] from a [`String`].
    ///
    /// An empty identifier is treated as absent.
    ///
    pub fn parse(value: String) -> Result<UserId, String> {
        if validator::validate_length(&value, Some(1), None, None) {
            Ok(Self(value))
        } else {
            Err("Missing user id!".to_string())
        }
    }
}

impl AsRef<str> for UserId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

///
/// Provides a non-empty name value, used for `first_name`, `last_name` and `username`.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserName(String);

impl UserName {
    ///
    /// Parse a [UserName] from a [String].
    ///
    pub fn parse(value: String) -> Result<UserName, String> {
        if validator::validate_length(&value, Some(1), None, None) {
            Ok(Self(value))
        } else {
            Err("Empty names are not allowed!".to_string())
        }
    }
}

impl AsRef<str> for UserName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for UserName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

///
/// The mutable fields of a user. Updates always replace all of them.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserDetails {
    pub first_name: UserName,
    pub last_name: UserName,
    pub username: UserName,
}

///
/// Contains validated data to create a new user.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub id: UserId,
    pub details: UserDetails,
}

///
/// Model to fetch a user from the database with.
///
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct UserModel {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub created_on: Option<DateTime<Utc>>,
}

impl From<UserModel> for UserResponse {
    fn from(val: UserModel) -> Self {
        Self {
            id: val.id,
            first_name: val.first_name,
            last_name: val.last_name,
            username: val.username,
            created_on: val.created_on.map(|created_on| created_on.to_rfc3339()),
        }
    }
}

///
/// Result of looking up a single user. Absence is not an error.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserLookup {
    Found(UserModel),
    NotFound,
}

impl From<Option<UserModel>> for UserLookup {
    fn from(value: Option<UserModel>) -> Self {
        match value {
            Some(user) => Self::Found(user),
            None => Self::NotFound,
        }
    }
}
