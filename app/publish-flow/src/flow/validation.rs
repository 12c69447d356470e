/// Per-step gate predicates for forward navigation
///
/// Stateless checks over the flow state. A failing gate only disables the
/// continue action; it is never raised as an error.
use crate::models::{AccessChoice, FlowState, FlowStep};

/// Whether the given step has everything it needs to advance
pub fn step_is_valid(step: FlowStep, state: &FlowState) -> bool {
    match step {
        FlowStep::FormatSelect => state.video_format().is_some(),
        FlowStep::EpisodeSelection => true,
        FlowStep::SeriesSelection => state.selected_series().is_some(),
        FlowStep::SeriesCreation => true,
        FlowStep::DetailsBasics => basics_complete(state),
        FlowStep::DetailsContent => content_complete(state),
        FlowStep::DetailsAccess => access_complete(state),
        FlowStep::FinalDetails => state.playback.genre.is_some(),
        FlowStep::FileSelect => state.selected_file.is_some(),
        FlowStep::UploadProgress => true,
    }
}

// Each detail gate includes the previous one, so validity of a later page
// implies validity of the earlier pages over the same fields.

fn basics_complete(state: &FlowState) -> bool {
    !state.details.title.trim().is_empty() && state.details.community.is_some()
}

fn content_complete(state: &FlowState) -> bool {
    basics_complete(state) && state.details.content_type.is_some()
}

fn access_complete(state: &FlowState) -> bool {
    content_complete(state)
        && match state.details.access {
            Some(AccessChoice::Free) => true,
            Some(AccessChoice::Paid { price }) => price > 0.0,
            None => false,
        }
}
