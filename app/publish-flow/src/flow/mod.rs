/// Flow-state controller for the publishing wizard
///
/// Owns the flow state and applies step transitions: gates come from
/// `validation`, branch targets from `transitions` and `series`. No
/// network call originates here; the service layer is invoked by the host
/// with the state this controller hands out.
pub mod series;
pub mod transitions;
pub mod validation;

use tracing::debug;
use uuid::Uuid;
use vidora_api::models::SeriesSummary;

use crate::models::{
    AccessChoice, FlowState, FlowStep, FormatChoice, TimeOffset, VideoFile, VideoFormat,
};

/// Outcome of a forward navigation request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    Moved(FlowStep),
    /// The gate failed; continue stays disabled, nothing is surfaced
    Blocked,
    /// Already at the terminal step
    AtEnd,
}

/// Outcome of a backward navigation request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Retreat {
    Moved(FlowStep),
    /// First step: the host should close the flow instead of navigating.
    /// Editing mode changes where the host returns the user, not whether
    /// this fires.
    CancelFlow,
}

#[derive(Debug, Default)]
pub struct FlowStateController {
    state: FlowState,
}

impl FlowStateController {
    /// Start a fresh flow at the format screen
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap a state hydrated from a stored draft
    pub fn from_state(state: FlowState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &FlowState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut FlowState {
        &mut self.state
    }

    pub fn current_step(&self) -> FlowStep {
        self.state.current_step
    }

    /// Whether the current step's gate passes; hosts bind this to the
    /// continue action
    pub fn can_continue(&self) -> bool {
        validation::step_is_valid(self.state.current_step, &self.state)
    }

    pub fn advance(&mut self) -> Advance {
        if !self.can_continue() {
            debug!(
                step = self.state.current_step.as_str(),
                "advance blocked by validation"
            );
            return Advance::Blocked;
        }

        match transitions::next_step(self.state.current_step, &self.state) {
            Some(next) => {
                self.state.current_step = next;
                Advance::Moved(next)
            }
            None => Advance::AtEnd,
        }
    }

    pub fn retreat(&mut self) -> Retreat {
        match transitions::prev_step(self.state.current_step, &self.state) {
            Some(prev) => {
                self.state.current_step = prev;
                Retreat::Moved(prev)
            }
            None => Retreat::CancelFlow,
        }
    }

    // ========================================
    // Series detour
    // ========================================

    /// Leave the episode screen for the series picker
    pub fn enter_series_selection(&mut self) -> bool {
        let needs_series = self
            .state
            .video_format()
            .map(series::requires_series)
            .unwrap_or(false);
        if self.state.current_step == FlowStep::EpisodeSelection && needs_series {
            self.state.current_step = FlowStep::SeriesSelection;
            true
        } else {
            false
        }
    }

    /// Adopt an existing series as the episode's home
    pub fn select_series(&mut self, series: SeriesSummary) {
        if let FormatChoice::Episode { series: slot } = &mut self.state.format {
            *slot = Some(series);
        }
    }

    /// Adopt a just-created series and jump straight to the details pages
    pub fn finish_series_creation(&mut self, created: SeriesSummary) {
        if matches!(self.state.format, FormatChoice::Episode { .. }) {
            self.select_series(created);
            self.state.current_step = series::step_after_creation();
        }
    }

    // ========================================
    // Field updates
    // ========================================

    /// Set the single/episode branch; a switch to single drops any series
    pub fn set_video_format(&mut self, format: VideoFormat) {
        let next = match (format, &self.state.format) {
            (VideoFormat::Episode, FormatChoice::Episode { series }) => FormatChoice::Episode {
                series: series.clone(),
            },
            (VideoFormat::Episode, _) => FormatChoice::Episode { series: None },
            (VideoFormat::Single, _) => FormatChoice::Single,
        };
        self.state.format = next;
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.state.details.title = title.into();
    }

    pub fn set_community(&mut self, community: Option<String>) {
        self.state.details.community = community;
    }

    pub fn set_content_type(&mut self, content_type: impl Into<String>) {
        self.state.details.content_type = Some(content_type.into());
    }

    pub fn set_access(&mut self, access: AccessChoice) {
        self.state.details.access = Some(access);
    }

    pub fn set_genre(&mut self, genre: impl Into<String>) {
        self.state.playback.genre = Some(genre.into());
    }

    pub fn set_autoplay_start(&mut self, minutes: u32, seconds: u32) {
        self.state.playback.autoplay_start = TimeOffset::new(minutes, seconds);
    }

    pub fn set_unlock_from(&mut self, minutes: u32, seconds: u32) {
        self.state.playback.unlock_from = TimeOffset::new(minutes, seconds);
    }

    pub fn attach_file(&mut self, file: VideoFile) {
        self.state.selected_file = Some(file);
    }

    pub fn clear_file(&mut self) {
        self.state.selected_file = None;
    }

    /// Record the id handed back by a successful save
    pub fn record_draft_id(&mut self, id: Uuid) {
        self.state.bind_draft(id);
    }

    /// Drop everything and return to a fresh flow; called after a
    /// successful publish or an explicit cancel
    pub fn reset(&mut self) {
        self.state = FlowState::new();
    }
}
