//! Typed API client
//!
//! One method per service operation, split by resource. Every call is a
//! fresh round trip: nothing is cached, retried, or coalesced.

pub mod books;
pub mod lendings;
pub mod statistics;
pub mod users;

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::{
    config::ApiConfig,
    error::{ClientError, ClientResult},
    transport::{ApiRequest, ApiResponse, HttpTransport, Transport},
};

/// Gateway to the library service
pub struct ApiClient<T = HttpTransport> {
    transport: Arc<T>,
}

impl<T> Clone for ApiClient<T> {
    fn clone(&self) -> Self {
        Self {
            transport: Arc::clone(&self.transport),
        }
    }
}

impl ApiClient<HttpTransport> {
    /// Client over HTTP against `config.base_url`
    pub fn new(config: &ApiConfig) -> ClientResult<Self> {
        Ok(Self::with_transport(HttpTransport::new(config)?))
    }
}

impl<T: Transport> ApiClient<T> {
    pub fn with_transport(transport: T) -> Self {
        Self {
            transport: Arc::new(transport),
        }
    }

    /// Send a request and decode a success body
    async fn fetch<R: DeserializeOwned>(&self, request: ApiRequest) -> ClientResult<R> {
        let response = self.execute(request).await?;
        Ok(serde_json::from_str(&response.body)?)
    }

    /// Send a delete. Only 200 (any body) and 204 count as success; other
    /// 2xx statuses fail like any non-2xx.
    async fn fetch_deleted(&self, request: ApiRequest) -> ClientResult<()> {
        let response = self.execute(request).await?;
        if response.status != 200 && !response.is_no_content() {
            tracing::warn!(status = response.status, "unexpected delete status");
            return Err(ClientError::RequestFailed {
                status: response.status,
                status_text: response.status_text,
            });
        }
        Ok(())
    }

    async fn execute(&self, request: ApiRequest) -> ClientResult<ApiResponse> {
        let method = request.method.clone();
        let path = request.path();

        let response = self.transport.send(request).await.map_err(|e| {
            tracing::warn!(%method, %path, error = %e, "request could not be sent");
            e
        })?;

        tracing::debug!(%method, %path, status = response.status, "response received");

        if !response.is_success() {
            tracing::warn!(
                %method,
                %path,
                status = response.status,
                status_text = %response.status_text,
                "request failed"
            );
            return Err(ClientError::RequestFailed {
                status: response.status,
                status_text: response.status_text,
            });
        }

        Ok(response)
    }
}

/// Serialize a payload into a request body
fn json_body<P: Serialize>(payload: &P) -> ClientResult<serde_json::Value> {
    Ok(serde_json::to_value(payload)?)
}
