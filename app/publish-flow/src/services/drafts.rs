/// Draft persistence for the publishing flow
///
/// Maps the in-memory flow state to and from the durable draft record and
/// drives the draft endpoints. A draft is allowed to be arbitrarily
/// partial, unlike a publish.
use std::collections::HashMap;
use std::sync::Arc;

use tracing::info;
use uuid::Uuid;
use vidora_api::models::{AccessTier, DraftRecord, DraftUpsertRequest};
use vidora_api::{AuthToken, PlatformApi};

use crate::config::PublishDefaults;
use crate::error::Result;
use crate::models::{
    AccessChoice, DraftBinding, FlowState, FlowStep, FormatChoice, PlaybackDetails, TimeOffset,
    VideoDetails,
};

pub struct DraftStore {
    api: Arc<dyn PlatformApi>,
    defaults: PublishDefaults,
}

impl DraftStore {
    pub fn new(api: Arc<dyn PlatformApi>, defaults: PublishDefaults) -> Self {
        Self { api, defaults }
    }

    /// Persist the current metadata
    ///
    /// The binding decides create versus update: an unbound flow omits the
    /// draft id and receives a fresh one; a bound flow updates in place.
    /// The caller records the returned id, so a failed save never leaves a
    /// phantom id behind.
    pub async fn save(&self, token: &AuthToken, state: &FlowState) -> Result<Uuid> {
        let req = upsert_request(state, &self.defaults);
        let update = req.draft_id.is_some();
        let response = self.api.upsert_draft(token, &req).await?;
        info!(draft_id = %response.draft_id, update, "draft saved");
        Ok(response.draft_id)
    }

    /// Save and bind the id on success; a failed save leaves the binding
    /// untouched
    pub async fn save_and_bind(&self, token: &AuthToken, state: &mut FlowState) -> Result<Uuid> {
        let id = self.save(token, state).await?;
        state.bind_draft(id);
        Ok(id)
    }

    /// Fetch a stored draft and rebuild flow state from it
    pub async fn resume(&self, token: &AuthToken, draft_id: Uuid) -> Result<FlowState> {
        let record = self.api.fetch_draft(token, draft_id).await?;
        info!(%draft_id, "resuming draft");
        Ok(hydrate(record))
    }

    /// List the caller's stored drafts
    pub async fn list(&self, token: &AuthToken) -> Result<Vec<DraftRecord>> {
        Ok(self.api.list_drafts(token).await?)
    }

    /// Discard a stored draft
    pub async fn delete(&self, token: &AuthToken, draft_id: Uuid) -> Result<()> {
        self.api.delete_draft(token, draft_id).await?;
        info!(%draft_id, "draft deleted");
        Ok(())
    }
}

/// Project flow state into the wire shape
///
/// Description falls back to the title, the genre to the configured
/// default category; time pairs are recombined into whole seconds.
pub fn upsert_request(state: &FlowState, defaults: &PublishDefaults) -> DraftUpsertRequest {
    let (access_type, amount) = match state.details.access {
        Some(AccessChoice::Paid { price }) => (AccessTier::Paid, Some(price)),
        _ => (AccessTier::Free, None),
    };

    DraftUpsertRequest {
        draft_id: state.draft_id(),
        name: state.details.title.clone(),
        description: state.details.title.clone(),
        genre: state
            .playback
            .genre
            .clone()
            .unwrap_or_else(|| defaults.fallback_genre.clone()),
        access_type: access_type.as_str().to_string(),
        amount,
        language: defaults.language.clone(),
        age_restricted: false,
        content_type: state.details.content_type.clone(),
        autoplay_start_seconds: state.playback.autoplay_start.total_seconds(),
        unlock_from_seconds: state.playback.unlock_from.total_seconds(),
        community_id: state.details.community.clone(),
        series_id: state.selected_series().map(|s| s.id),
    }
}

/// Rebuild flow state from a stored draft
///
/// Metadata is already saved, so the flow re-enters at file selection in
/// editing mode. Whole seconds are decomposed back into the minute/second
/// pairs the screens collect.
pub fn hydrate(record: DraftRecord) -> FlowState {
    let access = match record.access_tier() {
        Some(AccessTier::Paid) => Some(AccessChoice::Paid {
            price: record.amount.unwrap_or(0.0),
        }),
        Some(AccessTier::Free) => Some(AccessChoice::Free),
        None => None,
    };

    // A stored series reference implies the episode branch
    let format = match record.series {
        Some(series) => FormatChoice::Episode {
            series: Some(series),
        },
        None => FormatChoice::Single,
    };

    FlowState {
        current_step: FlowStep::FileSelect,
        details: VideoDetails {
            title: record.name,
            community: record.community_id,
            content_type: record.content_type,
            access,
        },
        playback: PlaybackDetails {
            genre: Some(record.genre),
            autoplay_start: TimeOffset::from_total_seconds(record.autoplay_start_seconds),
            unlock_from: TimeOffset::from_total_seconds(record.unlock_from_seconds),
        },
        selected_file: None,
        format,
        binding: DraftBinding::Editing(record.draft_id),
        is_uploading: false,
        upload_progress: 0,
        errors: HashMap::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vidora_api::models::VideoAsset;

    fn defaults() -> PublishDefaults {
        PublishDefaults::default()
    }

    fn record(autoplay_seconds: u32) -> DraftRecord {
        DraftRecord {
            draft_id: Uuid::new_v4(),
            name: "Demo".to_string(),
            description: "Demo".to_string(),
            genre: "Action".to_string(),
            access_type: "paid".to_string(),
            amount: Some(4.99),
            language: "en".to_string(),
            age_restricted: false,
            content_type: Some("YouTube".to_string()),
            autoplay_start_seconds: autoplay_seconds,
            unlock_from_seconds: 90,
            community_id: Some("makers".to_string()),
            series: None,
            video: VideoAsset::default(),
            expires_at: chrono::Utc::now(),
        }
    }

    #[test]
    fn empty_state_still_projects_a_valid_request() {
        let req = upsert_request(&FlowState::new(), &defaults());

        assert!(req.draft_id.is_none());
        assert_eq!(req.name, "");
        assert_eq!(req.genre, "Other");
        assert_eq!(req.access_type, "Free");
        assert!(req.amount.is_none());
        assert_eq!(req.language, "en");
    }

    #[test]
    fn description_falls_back_to_title() {
        let mut state = FlowState::new();
        state.details.title = "My upload".to_string();

        let req = upsert_request(&state, &defaults());
        assert_eq!(req.description, "My upload");
    }

    #[test]
    fn time_pairs_recombine_into_seconds() {
        let mut state = FlowState::new();
        state.playback.autoplay_start = TimeOffset::new(1, 15);
        state.playback.unlock_from = TimeOffset::new(0, 30);

        let req = upsert_request(&state, &defaults());
        assert_eq!(req.autoplay_start_seconds, 75);
        assert_eq!(req.unlock_from_seconds, 30);
    }

    #[test]
    fn bound_state_updates_in_place() {
        let id = Uuid::new_v4();
        let state = FlowState {
            binding: DraftBinding::Saved(id),
            ..FlowState::new()
        };

        assert_eq!(upsert_request(&state, &defaults()).draft_id, Some(id));
    }

    #[test]
    fn hydrate_decomposes_seconds_and_enters_file_select() {
        let state = hydrate(record(75));

        assert_eq!(state.current_step, FlowStep::FileSelect);
        assert!(state.is_editing_draft());
        assert_eq!(state.playback.autoplay_start, TimeOffset::new(1, 15));
        assert_eq!(state.playback.unlock_from, TimeOffset::new(1, 30));
    }

    #[test]
    fn hydrate_normalizes_access_casing() {
        let state = hydrate(record(0));
        assert_eq!(
            state.details.access,
            Some(AccessChoice::Paid { price: 4.99 })
        );
    }

    #[test]
    fn save_projection_roundtrips_through_hydrate() {
        let mut state = FlowState::new();
        state.details.title = "Round trip".to_string();
        state.details.community = Some("makers".to_string());
        state.playback.autoplay_start = TimeOffset::new(2, 5);

        let req = upsert_request(&state, &defaults());
        let id = Uuid::new_v4();
        let stored = DraftRecord {
            draft_id: id,
            name: req.name,
            description: req.description,
            genre: req.genre,
            access_type: req.access_type,
            amount: req.amount,
            language: req.language,
            age_restricted: req.age_restricted,
            content_type: req.content_type,
            autoplay_start_seconds: req.autoplay_start_seconds,
            unlock_from_seconds: req.unlock_from_seconds,
            community_id: req.community_id,
            series: None,
            video: VideoAsset::default(),
            expires_at: chrono::Utc::now(),
        };

        let back = hydrate(stored);
        assert_eq!(back.details.title, "Round trip");
        assert_eq!(back.playback.autoplay_start, TimeOffset::new(2, 5));
        assert_eq!(back.draft_id(), Some(id));
        assert_eq!(back.current_step, FlowStep::FileSelect);
    }
}
