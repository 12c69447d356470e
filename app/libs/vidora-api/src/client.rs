//! HTTP client for the platform API
//!
//! Provides convenient methods for the client core to drive the draft,
//! upload, publish and series endpoints over HTTP

use std::time::Duration;

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use tracing::info;
use uuid::Uuid;

use crate::auth::AuthToken;
use crate::error::{ApiError, Result};
use crate::models::{
    CreateSeriesRequest, DraftRecord, DraftUpsertRequest, DraftUpsertResponse, ErrorBody,
    PublishResponse, SeriesSummary, UploadAck, UploadPayload,
};

/// Seam between the client core and the network
///
/// The reqwest implementation below is the production path; tests provide
/// in-memory implementations.
#[async_trait]
pub trait PlatformApi: Send + Sync {
    /// Create or update a draft; create assigns the returned id
    async fn upsert_draft(
        &self,
        token: &AuthToken,
        req: &DraftUpsertRequest,
    ) -> Result<DraftUpsertResponse>;

    /// Fetch a stored draft for resume
    async fn fetch_draft(&self, token: &AuthToken, draft_id: Uuid) -> Result<DraftRecord>;

    /// List the caller's drafts
    async fn list_drafts(&self, token: &AuthToken) -> Result<Vec<DraftRecord>>;

    /// Discard a draft
    async fn delete_draft(&self, token: &AuthToken, draft_id: Uuid) -> Result<()>;

    /// Transmit the binary asset for a draft; distinct from the metadata call
    async fn upload_video(
        &self,
        token: &AuthToken,
        draft_id: Uuid,
        payload: UploadPayload,
    ) -> Result<UploadAck>;

    /// Convert draft + uploaded asset into published content
    async fn finalize_draft(&self, token: &AuthToken, draft_id: Uuid) -> Result<PublishResponse>;

    /// List series available for episode association
    async fn list_series(&self, token: &AuthToken) -> Result<Vec<SeriesSummary>>;

    /// Create a new series
    async fn create_series(
        &self,
        token: &AuthToken,
        req: &CreateSeriesRequest,
    ) -> Result<SeriesSummary>;
}

/// Reqwest-backed platform API client
pub struct PlatformClient {
    client: Client,
    base_url: String,
}

impl PlatformClient {
    /// Create a new client; the timeout bounds every request including the
    /// binary upload
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ApiError::Internal(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/api/v1/{}", self.base_url, path)
    }

    async fn parse<T>(response: Response) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let status = response.status();
        if !status.is_success() {
            return Err(Self::error_for(status, response).await);
        }

        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Transport(format!("Parse failed: {}", e)))
    }

    async fn expect_success(response: Response) -> Result<()> {
        let status = response.status();
        if !status.is_success() {
            return Err(Self::error_for(status, response).await);
        }
        Ok(())
    }

    async fn error_for(status: StatusCode, response: Response) -> ApiError {
        let text = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        let message = serde_json::from_str::<ErrorBody>(&text)
            .ok()
            .and_then(ErrorBody::into_message)
            .unwrap_or(text);
        ApiError::from_status(status.as_u16(), message)
    }
}

#[async_trait]
impl PlatformApi for PlatformClient {
    async fn upsert_draft(
        &self,
        token: &AuthToken,
        req: &DraftUpsertRequest,
    ) -> Result<DraftUpsertResponse> {
        info!(update = req.draft_id.is_some(), "upserting draft");

        let response = self
            .client
            .post(self.url("drafts"))
            .bearer_auth(token.as_str())
            .json(req)
            .send()
            .await?;

        Self::parse(response).await
    }

    async fn fetch_draft(&self, token: &AuthToken, draft_id: Uuid) -> Result<DraftRecord> {
        info!(%draft_id, "fetching draft");

        let response = self
            .client
            .get(self.url(&format!("drafts/{}", draft_id)))
            .bearer_auth(token.as_str())
            .send()
            .await?;

        Self::parse(response).await
    }

    async fn list_drafts(&self, token: &AuthToken) -> Result<Vec<DraftRecord>> {
        let response = self
            .client
            .get(self.url("drafts"))
            .bearer_auth(token.as_str())
            .send()
            .await?;

        Self::parse(response).await
    }

    async fn delete_draft(&self, token: &AuthToken, draft_id: Uuid) -> Result<()> {
        info!(%draft_id, "deleting draft");

        let response = self
            .client
            .delete(self.url(&format!("drafts/{}", draft_id)))
            .bearer_auth(token.as_str())
            .send()
            .await?;

        Self::expect_success(response).await
    }

    async fn upload_video(
        &self,
        token: &AuthToken,
        draft_id: Uuid,
        payload: UploadPayload,
    ) -> Result<UploadAck> {
        info!(
            %draft_id,
            file_name = %payload.file_name,
            size = payload.bytes.len(),
            "uploading video asset"
        );

        let part = Part::bytes(payload.bytes)
            .file_name(payload.file_name)
            .mime_str(&payload.mime_type)
            .map_err(|e| ApiError::InvalidRequest(format!("Invalid mime type: {}", e)))?;
        let form = Form::new().part("file", part);

        let response = self
            .client
            .post(self.url(&format!("drafts/{}/video", draft_id)))
            .bearer_auth(token.as_str())
            .multipart(form)
            .send()
            .await?;

        Self::parse(response).await
    }

    async fn finalize_draft(&self, token: &AuthToken, draft_id: Uuid) -> Result<PublishResponse> {
        info!(%draft_id, "finalizing draft");

        let response = self
            .client
            .post(self.url(&format!("drafts/{}/publish", draft_id)))
            .bearer_auth(token.as_str())
            .send()
            .await?;

        Self::parse(response).await
    }

    async fn list_series(&self, token: &AuthToken) -> Result<Vec<SeriesSummary>> {
        let response = self
            .client
            .get(self.url("series"))
            .bearer_auth(token.as_str())
            .send()
            .await?;

        Self::parse(response).await
    }

    async fn create_series(
        &self,
        token: &AuthToken,
        req: &CreateSeriesRequest,
    ) -> Result<SeriesSummary> {
        info!(title = %req.title, "creating series");

        let response = self
            .client
            .post(self.url("series"))
            .bearer_auth(token.as_str())
            .json(req)
            .send()
            .await?;

        Self::parse(response).await
    }
}
