//! In-memory platform API for scenario tests
//!
//! Stores drafts in a map, counts calls per endpoint, and injects failures
//! on demand. No network, no serialization.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{Duration, Utc};
use uuid::Uuid;
use vidora_api::models::{
    CreateSeriesRequest, DraftRecord, DraftUpsertRequest, DraftUpsertResponse, PublishResponse,
    SeriesSummary, UploadAck, UploadPayload, VideoAsset,
};
use vidora_api::{ApiError, AuthToken, PlatformApi};

#[derive(Default)]
struct Inner {
    drafts: HashMap<Uuid, DraftUpsertRequest>,
    last_upsert: Option<DraftUpsertRequest>,
    uploads: Vec<Uuid>,
    series: Vec<SeriesSummary>,
    create_calls: u32,
    update_calls: u32,
    upload_calls: u32,
    finalize_calls: u32,
    fail_upsert: bool,
    fail_upload: bool,
    fail_finalize: bool,
}

#[derive(Default)]
pub struct MockPlatform {
    inner: Mutex<Inner>,
}

impl MockPlatform {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a draft directly, as if a previous session had saved it
    pub fn seed_draft(&self, req: DraftUpsertRequest) -> Uuid {
        let id = req.draft_id.unwrap_or_else(Uuid::new_v4);
        self.inner.lock().unwrap().drafts.insert(id, req);
        id
    }

    pub fn set_fail_upsert(&self, fail: bool) {
        self.inner.lock().unwrap().fail_upsert = fail;
    }

    pub fn set_fail_upload(&self, fail: bool) {
        self.inner.lock().unwrap().fail_upload = fail;
    }

    pub fn set_fail_finalize(&self, fail: bool) {
        self.inner.lock().unwrap().fail_finalize = fail;
    }

    pub fn create_calls(&self) -> u32 {
        self.inner.lock().unwrap().create_calls
    }

    pub fn update_calls(&self) -> u32 {
        self.inner.lock().unwrap().update_calls
    }

    pub fn upload_calls(&self) -> u32 {
        self.inner.lock().unwrap().upload_calls
    }

    pub fn finalize_calls(&self) -> u32 {
        self.inner.lock().unwrap().finalize_calls
    }

    pub fn stored_draft(&self, id: Uuid) -> Option<DraftUpsertRequest> {
        self.inner.lock().unwrap().drafts.get(&id).cloned()
    }

    /// The most recent upsert request, surviving a finalize
    pub fn last_upsert(&self) -> Option<DraftUpsertRequest> {
        self.inner.lock().unwrap().last_upsert.clone()
    }

    fn record_for(inner: &Inner, id: Uuid) -> Option<DraftRecord> {
        let req = inner.drafts.get(&id)?;
        let uploaded = inner.uploads.contains(&id);
        let series = req.series_id.map(|series_id| {
            inner
                .series
                .iter()
                .find(|s| s.id == series_id)
                .cloned()
                .unwrap_or(SeriesSummary {
                    id: series_id,
                    title: "Series".to_string(),
                    episode_count: 0,
                })
        });

        Some(DraftRecord {
            draft_id: id,
            name: req.name.clone(),
            description: req.description.clone(),
            genre: req.genre.clone(),
            access_type: req.access_type.clone(),
            amount: req.amount,
            language: req.language.clone(),
            age_restricted: req.age_restricted,
            content_type: req.content_type.clone(),
            autoplay_start_seconds: req.autoplay_start_seconds,
            unlock_from_seconds: req.unlock_from_seconds,
            community_id: req.community_id.clone(),
            series,
            video: VideoAsset {
                present: uploaded,
                url: uploaded.then(|| format!("https://cdn.test/{}", id)),
                file_name: uploaded.then(|| "demo.mp4".to_string()),
                uploaded_at: uploaded.then(Utc::now),
            },
            expires_at: Utc::now() + Duration::days(30),
        })
    }
}

#[async_trait]
impl PlatformApi for MockPlatform {
    async fn upsert_draft(
        &self,
        _token: &AuthToken,
        req: &DraftUpsertRequest,
    ) -> vidora_api::Result<DraftUpsertResponse> {
        let mut inner = self.inner.lock().unwrap();
        if inner.fail_upsert {
            return Err(ApiError::ServiceUnavailable("draft store offline".into()));
        }

        let draft_id = match req.draft_id {
            Some(id) => {
                if !inner.drafts.contains_key(&id) {
                    return Err(ApiError::NotFound("Draft not found".into()));
                }
                inner.update_calls += 1;
                id
            }
            None => {
                inner.create_calls += 1;
                Uuid::new_v4()
            }
        };

        let mut stored = req.clone();
        stored.draft_id = Some(draft_id);
        inner.last_upsert = Some(stored.clone());
        inner.drafts.insert(draft_id, stored);
        Ok(DraftUpsertResponse { draft_id })
    }

    async fn fetch_draft(
        &self,
        _token: &AuthToken,
        draft_id: Uuid,
    ) -> vidora_api::Result<DraftRecord> {
        let inner = self.inner.lock().unwrap();
        Self::record_for(&inner, draft_id)
            .ok_or_else(|| ApiError::NotFound("Draft not found".into()))
    }

    async fn list_drafts(&self, _token: &AuthToken) -> vidora_api::Result<Vec<DraftRecord>> {
        let inner = self.inner.lock().unwrap();
        let ids: Vec<Uuid> = inner.drafts.keys().copied().collect();
        Ok(ids
            .into_iter()
            .filter_map(|id| Self::record_for(&inner, id))
            .collect())
    }

    async fn delete_draft(&self, _token: &AuthToken, draft_id: Uuid) -> vidora_api::Result<()> {
        let mut inner = self.inner.lock().unwrap();
        if inner.drafts.remove(&draft_id).is_none() {
            return Err(ApiError::NotFound("Draft not found".into()));
        }
        Ok(())
    }

    async fn upload_video(
        &self,
        _token: &AuthToken,
        draft_id: Uuid,
        _payload: UploadPayload,
    ) -> vidora_api::Result<UploadAck> {
        let mut inner = self.inner.lock().unwrap();
        inner.upload_calls += 1;
        if inner.fail_upload {
            return Err(ApiError::ServiceUnavailable("upload stream reset".into()));
        }
        if !inner.drafts.contains_key(&draft_id) {
            return Err(ApiError::NotFound("Draft not found".into()));
        }
        inner.uploads.push(draft_id);
        Ok(UploadAck { draft_id })
    }

    async fn finalize_draft(
        &self,
        _token: &AuthToken,
        draft_id: Uuid,
    ) -> vidora_api::Result<PublishResponse> {
        let mut inner = self.inner.lock().unwrap();
        inner.finalize_calls += 1;
        if inner.fail_finalize {
            return Err(ApiError::ServiceUnavailable("publish queue offline".into()));
        }
        if !inner.uploads.contains(&draft_id) {
            return Err(ApiError::InvalidRequest("no video uploaded".into()));
        }
        inner.drafts.remove(&draft_id);
        Ok(PublishResponse {
            content_id: Uuid::new_v4(),
        })
    }

    async fn list_series(&self, _token: &AuthToken) -> vidora_api::Result<Vec<SeriesSummary>> {
        Ok(self.inner.lock().unwrap().series.clone())
    }

    async fn create_series(
        &self,
        _token: &AuthToken,
        req: &CreateSeriesRequest,
    ) -> vidora_api::Result<SeriesSummary> {
        let series = SeriesSummary {
            id: Uuid::new_v4(),
            title: req.title.clone(),
            episode_count: 0,
        };
        self.inner.lock().unwrap().series.push(series.clone());
        Ok(series)
    }
}
