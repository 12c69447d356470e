/// Three-phase publish protocol
///
/// ensure-draft, upload-binary, finalize — in that order, one at a time.
/// Each phase is isolated: a failure stops the run, records a cause under
/// the upload error key, and leaves earlier results (the draft id) in
/// place so a user-triggered retry resumes without duplicating work.
use std::sync::Arc;

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::{info, warn};
use uuid::Uuid;
use vidora_api::{AuthToken, PlatformApi};

use crate::error::{FlowError, Result};
use crate::models::{FlowState, VideoFile};
use crate::services::drafts::DraftStore;

/// Error key the host reads the failure cause from
pub const UPLOAD_ERROR_KEY: &str = "upload";

// Coarse milestones; not proportional to bytes transferred
const PROGRESS_START: u8 = 0;
const PROGRESS_DRAFT_READY: u8 = 30;
const PROGRESS_UPLOADED: u8 = 70;
const PROGRESS_DONE: u8 = 100;

/// Host-facing notifications from a pipeline run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PublishEvent {
    Progress(u8),
    Completed { content_id: Uuid },
    Failed { message: String },
}

/// Result of asking the pipeline to run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PublishOutcome {
    Published { content_id: Uuid },
    /// A run was already in flight; this request was ignored
    AlreadyRunning,
}

pub struct PublishPipeline {
    api: Arc<dyn PlatformApi>,
    drafts: DraftStore,
    events: Option<UnboundedSender<PublishEvent>>,
}

impl PublishPipeline {
    pub fn new(api: Arc<dyn PlatformApi>, drafts: DraftStore) -> Self {
        Self {
            api,
            drafts,
            events: None,
        }
    }

    /// Attach the host's event feed; events are dropped until this is
    /// called
    pub fn subscribe(&mut self) -> UnboundedReceiver<PublishEvent> {
        let (tx, rx) = mpsc::unbounded_channel();
        self.events = Some(tx);
        rx
    }

    /// Run the protocol once
    ///
    /// Requires a credential and a selected file up front; a flow already
    /// uploading is left alone. On failure the state keeps the progress
    /// already reached and the draft id from a completed first phase.
    pub async fn run(
        &self,
        token: Option<&AuthToken>,
        state: &mut FlowState,
    ) -> Result<PublishOutcome> {
        if state.is_uploading {
            warn!("publish requested while a run is in flight; ignoring");
            return Ok(PublishOutcome::AlreadyRunning);
        }

        let token = token.ok_or(FlowError::AuthenticationRequired)?;
        let file = state
            .selected_file
            .clone()
            .ok_or_else(|| FlowError::Validation("No video file selected".to_string()))?;

        state.is_uploading = true;
        state.errors.remove(UPLOAD_ERROR_KEY);
        self.set_progress(state, PROGRESS_START);

        let result = self.run_phases(token, state, file).await;
        state.is_uploading = false;

        match result {
            Ok(content_id) => {
                info!(%content_id, "publish complete");
                self.emit(PublishEvent::Completed { content_id });
                Ok(PublishOutcome::Published { content_id })
            }
            Err(err) => {
                let message = err.to_string();
                warn!(progress = state.upload_progress, "publish failed: {}", message);
                state
                    .errors
                    .insert(UPLOAD_ERROR_KEY.to_string(), message.clone());
                self.emit(PublishEvent::Failed { message });
                Err(err)
            }
        }
    }

    async fn run_phases(
        &self,
        token: &AuthToken,
        state: &mut FlowState,
        file: VideoFile,
    ) -> Result<Uuid> {
        // Phase 1: ensure a draft exists. A prior id is reused as-is, so a
        // retry or a resumed flow never creates a duplicate.
        let draft_id = match state.draft_id() {
            Some(id) => {
                info!(draft_id = %id, "reusing existing draft");
                id
            }
            None => self.drafts.save_and_bind(token, state).await?,
        };
        self.set_progress(state, PROGRESS_DRAFT_READY);

        // Phase 2: the binary transfer, a separate operation from the
        // lightweight metadata call
        self.api
            .upload_video(token, draft_id, file.to_payload())
            .await?;
        self.set_progress(state, PROGRESS_UPLOADED);

        // Phase 3: consume the draft
        let published = self.api.finalize_draft(token, draft_id).await?;
        self.set_progress(state, PROGRESS_DONE);

        Ok(published.content_id)
    }

    fn set_progress(&self, state: &mut FlowState, value: u8) {
        state.upload_progress = value;
        self.emit(PublishEvent::Progress(value));
    }

    fn emit(&self, event: PublishEvent) {
        if let Some(events) = &self.events {
            // A host that went away just stops listening
            let _ = events.send(event);
        }
    }
}
