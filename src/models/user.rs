//! User model and related types

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use validator::Validate;

use super::enums::Role;
use crate::error::{ClientError, ClientResult};

/// User record as returned by the service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub username: String,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub role: Role,
    /// Deactivated users keep their record with `active == false`
    pub active: bool,
    /// Service timestamps, kept as sent
    pub created_at: String,
    pub updated_at: String,
}

/// Create user request
#[skip_serializing_none]
#[derive(Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    pub phone: Option<String>,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
    pub role: Role,
    pub active: bool,
}

// Password stays out of logs
impl std::fmt::Debug for NewUser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NewUser")
            .field("username", &self.username)
            .field("name", &self.name)
            .field("email", &self.email)
            .field("phone", &self.phone)
            .field("role", &self.role)
            .field("active", &self.active)
            .finish_non_exhaustive()
    }
}

impl NewUser {
    /// Active user with the default role
    pub fn new(
        username: impl Into<String>,
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            name: name.into(),
            email: email.into(),
            phone: None,
            password: password.into(),
            role: Role::default(),
            active: true,
        }
    }

    pub fn with_role(mut self, role: Role) -> Self {
        self.role = role;
        self
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    pub fn check(&self) -> ClientResult<()> {
        self.validate()?;
        if self.username.trim().is_empty() || self.name.trim().is_empty() {
            return Err(ClientError::Validation(
                "Username and name are required".to_string(),
            ));
        }
        Ok(())
    }
}

/// Partial user update
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPatch {
    pub username: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub role: Option<Role>,
    pub active: Option<bool>,
}

impl From<&User> for UserPatch {
    fn from(user: &User) -> Self {
        Self {
            username: Some(user.username.clone()),
            name: Some(user.name.clone()),
            email: Some(user.email.clone()),
            phone: user.phone.clone(),
            role: Some(user.role),
            active: Some(user.active),
        }
    }
}
