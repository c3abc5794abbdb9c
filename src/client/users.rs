//! User operations

use crate::{
    error::ClientResult,
    models::{NewUser, User, UserPatch},
    transport::{ApiRequest, Transport},
};

use super::{json_body, ApiClient};

impl<T: Transport> ApiClient<T> {
    pub async fn list_users(&self) -> ClientResult<Vec<User>> {
        self.fetch(ApiRequest::get(&["users"])).await
    }

    pub async fn get_user(&self, id: i64) -> ClientResult<User> {
        self.fetch(ApiRequest::get(&["users", &id.to_string()])).await
    }

    pub async fn create_user(&self, user: &NewUser) -> ClientResult<User> {
        user.check()?;
        let created: User = self
            .fetch(ApiRequest::post(&["users"]).with_body(json_body(user)?))
            .await?;
        tracing::info!(id = created.id, username = %created.username, "user created");
        Ok(created)
    }

    pub async fn update_user(&self, id: i64, patch: &UserPatch) -> ClientResult<User> {
        self.fetch(ApiRequest::put(&["users", &id.to_string()]).with_body(json_body(patch)?)).await
    }

    pub async fn delete_user(&self, id: i64) -> ClientResult<()> {
        self.fetch_deleted(ApiRequest::delete(&["users", &id.to_string()])).await?;
        tracing::info!(id, "user deleted");
        Ok(())
    }

    /// Soft delete: the record stays with `active == false`
    pub async fn deactivate_user(&self, id: i64) -> ClientResult<User> {
        self.fetch(ApiRequest::put(&["users", &id.to_string(), "deactivate"])).await
    }

    pub async fn activate_user(&self, id: i64) -> ClientResult<User> {
        self.fetch(ApiRequest::put(&["users", &id.to_string(), "activate"])).await
    }
}
