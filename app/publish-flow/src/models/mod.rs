/// In-memory state for the publishing workflow
///
/// This module defines structures for:
/// - FlowStep: the ordered wizard steps
/// - FormatChoice / DraftBinding: tagged branching context
/// - VideoDetails / PlaybackDetails: metadata collected along the way
/// - FlowState: the single-owner aggregate the controller mutates
///
use std::collections::HashMap;

use uuid::Uuid;
use vidora_api::models::{SeriesSummary, UploadPayload};

// ========================================
// Steps
// ========================================

/// Wizard steps in visit order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlowStep {
    FormatSelect,
    EpisodeSelection,
    SeriesSelection,
    SeriesCreation,
    DetailsBasics,
    DetailsContent,
    DetailsAccess,
    FinalDetails,
    FileSelect,
    UploadProgress,
}

impl Default for FlowStep {
    fn default() -> Self {
        Self::FormatSelect
    }
}

impl FlowStep {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FormatSelect => "format_select",
            Self::EpisodeSelection => "episode_selection",
            Self::SeriesSelection => "series_selection",
            Self::SeriesCreation => "series_creation",
            Self::DetailsBasics => "details_basics",
            Self::DetailsContent => "details_content",
            Self::DetailsAccess => "details_access",
            Self::FinalDetails => "final_details",
            Self::FileSelect => "file_select",
            Self::UploadProgress => "upload_progress",
        }
    }
}

// ========================================
// Branching Context
// ========================================

/// The single/episode branch chosen on the first screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VideoFormat {
    Single,
    Episode,
}

/// Format choice plus its series association
///
/// A series can only exist under `Episode`, so a selected series with a
/// single video cannot be represented.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FormatChoice {
    #[default]
    Unset,
    Single,
    Episode { series: Option<SeriesSummary> },
}

impl FormatChoice {
    pub fn format(&self) -> Option<VideoFormat> {
        match self {
            Self::Unset => None,
            Self::Single => Some(VideoFormat::Single),
            Self::Episode { .. } => Some(VideoFormat::Episode),
        }
    }

    pub fn series(&self) -> Option<&SeriesSummary> {
        match self {
            Self::Episode { series } => series.as_ref(),
            _ => None,
        }
    }
}

/// How the flow relates to a remote draft record
///
/// `Editing` is only constructed when resuming a stored draft, so an
/// editing flow always carries its draft id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DraftBinding {
    /// Never persisted
    #[default]
    Detached,
    /// Persisted at least once during this flow
    Saved(Uuid),
    /// Resumed from a stored draft
    Editing(Uuid),
}

impl DraftBinding {
    pub fn draft_id(&self) -> Option<Uuid> {
        match self {
            Self::Detached => None,
            Self::Saved(id) | Self::Editing(id) => Some(*id),
        }
    }

    pub fn is_editing(&self) -> bool {
        matches!(self, Self::Editing(_))
    }
}

// ========================================
// Collected Metadata
// ========================================

/// Free or paid access, with the asking price for paid content
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AccessChoice {
    Free,
    Paid { price: f64 },
}

/// Elapsed time as the minute/second pair the detail screens collect
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TimeOffset {
    pub minutes: u32,
    pub seconds: u32,
}

impl TimeOffset {
    pub fn new(minutes: u32, seconds: u32) -> Self {
        Self { minutes, seconds }
    }

    pub fn from_total_seconds(total: u32) -> Self {
        Self {
            minutes: total / 60,
            seconds: total % 60,
        }
    }

    pub fn total_seconds(&self) -> u32 {
        self.minutes * 60 + self.seconds
    }
}

/// Metadata from the three detail pages
#[derive(Debug, Clone, Default)]
pub struct VideoDetails {
    pub title: String,
    pub community: Option<String>,
    pub content_type: Option<String>,
    pub access: Option<AccessChoice>,
}

/// Metadata from the final page
#[derive(Debug, Clone, Default)]
pub struct PlaybackDetails {
    pub genre: Option<String>,
    pub autoplay_start: TimeOffset,
    pub unlock_from: TimeOffset,
}

/// Opaque handle to the binary asset picked on the file screen
#[derive(Clone)]
pub struct VideoFile {
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl VideoFile {
    pub fn to_payload(&self) -> UploadPayload {
        UploadPayload {
            file_name: self.file_name.clone(),
            mime_type: self.mime_type.clone(),
            bytes: self.bytes.clone(),
        }
    }
}

// File bytes are large; keep them out of Debug output
impl std::fmt::Debug for VideoFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VideoFile")
            .field("file_name", &self.file_name)
            .field("mime_type", &self.mime_type)
            .field("bytes", &self.bytes.len())
            .finish()
    }
}

// ========================================
// Flow State
// ========================================

/// Everything the wizard has collected so far
///
/// Created fresh at flow entry or hydrated from a stored draft; mutated
/// only through the controller; reset on publish or cancel. Never
/// persisted directly — only its draft projection survives a session.
#[derive(Debug, Clone, Default)]
pub struct FlowState {
    pub current_step: FlowStep,
    pub details: VideoDetails,
    pub playback: PlaybackDetails,
    pub selected_file: Option<VideoFile>,
    pub format: FormatChoice,
    pub binding: DraftBinding,
    pub is_uploading: bool,
    /// Last coarse progress value reached; preserved across a failure
    pub upload_progress: u8,
    pub errors: HashMap<String, String>,
}

impl FlowState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn video_format(&self) -> Option<VideoFormat> {
        self.format.format()
    }

    pub fn selected_series(&self) -> Option<&SeriesSummary> {
        self.format.series()
    }

    pub fn draft_id(&self) -> Option<Uuid> {
        self.binding.draft_id()
    }

    pub fn is_editing_draft(&self) -> bool {
        self.binding.is_editing()
    }

    /// Record a draft id after a successful save
    ///
    /// The id is bound at most once per logical draft; an existing binding
    /// is kept, so later saves update the same record.
    pub fn bind_draft(&mut self, id: Uuid) {
        if matches!(self.binding, DraftBinding::Detached) {
            self.binding = DraftBinding::Saved(id);
        }
    }
}
