/// Series-association routing for the format branch
///
/// The episode format detours through the series screens before the
/// details pages; the single format goes straight there. A series created
/// mid-detour short-circuits back to the details pages.
use crate::models::{FlowStep, VideoFormat};

/// First step after the format choice
pub fn entry_step(format: VideoFormat) -> FlowStep {
    match format {
        VideoFormat::Episode => FlowStep::EpisodeSelection,
        VideoFormat::Single => FlowStep::DetailsBasics,
    }
}

/// Whether the format needs a series before the details pages
pub fn requires_series(format: VideoFormat) -> bool {
    matches!(format, VideoFormat::Episode)
}

/// Route after a mid-detour series creation: the fresh series is adopted
/// as the selection, so re-selection is skipped entirely
pub fn step_after_creation() -> FlowStep {
    FlowStep::DetailsBasics
}
