//! Lending operations
//!
//! Status transitions are enforced by the service; whatever it answers to
//! a return or extend call is passed back unchanged.

use crate::{
    error::ClientResult,
    models::{Lending, LendingPatch, NewLending},
    transport::{ApiRequest, Transport},
};

use super::{json_body, ApiClient};

impl<T: Transport> ApiClient<T> {
    pub async fn list_lendings(&self) -> ClientResult<Vec<Lending>> {
        self.fetch(ApiRequest::get(&["lendings"])).await
    }

    pub async fn get_lending(&self, id: i64) -> ClientResult<Lending> {
        self.fetch(ApiRequest::get(&["lendings", &id.to_string()])).await
    }

    pub async fn create_lending(&self, lending: &NewLending) -> ClientResult<Lending> {
        lending.check()?;
        let created: Lending = self
            .fetch(ApiRequest::post(&["lendings"]).with_body(json_body(lending)?))
            .await?;
        tracing::info!(
            id = created.id,
            book_id = created.book_id,
            user_id = created.user_id,
            due = %created.due_date,
            "lending created"
        );
        Ok(created)
    }

    pub async fn update_lending(&self, id: i64, patch: &LendingPatch) -> ClientResult<Lending> {
        self.fetch(
            ApiRequest::put(&["lendings", &id.to_string()]).with_body(json_body(patch)?),
        )
        .await
    }

    pub async fn delete_lending(&self, id: i64) -> ClientResult<()> {
        self.fetch_deleted(ApiRequest::delete(&["lendings", &id.to_string()])).await?;
        tracing::info!(id, "lending deleted");
        Ok(())
    }

    /// BORROWED or OVERDUE to RETURNED; the service sets `returnedAt`
    pub async fn return_lending(&self, id: i64) -> ClientResult<Lending> {
        let lending: Lending = self
            .fetch(ApiRequest::put(&["lendings", &id.to_string(), "return"]))
            .await?;
        tracing::info!(id, status = %lending.status, "lending returned");
        Ok(lending)
    }

    /// Pushes the due date forward by the service's policy
    pub async fn extend_lending(&self, id: i64) -> ClientResult<Lending> {
        let lending: Lending = self
            .fetch(ApiRequest::put(&["lendings", &id.to_string(), "extend"]))
            .await?;
        tracing::info!(id, due = %lending.due_date, "lending extended");
        Ok(lending)
    }
}
