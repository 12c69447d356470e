/// Step transition table for the wizard
///
/// Pure functions over the flow state; the controller applies the result.
/// Forward moves are gated separately by `validation`.
use crate::flow::series;
use crate::models::{FlowState, FlowStep};

/// Next step for a forward transition; `None` from the terminal step
pub fn next_step(step: FlowStep, state: &FlowState) -> Option<FlowStep> {
    match step {
        // The series resolver owns the single/episode branch target
        FlowStep::FormatSelect => match state.video_format() {
            Some(format) => Some(series::entry_step(format)),
            None => Some(FlowStep::DetailsBasics),
        },
        FlowStep::EpisodeSelection => Some(FlowStep::DetailsBasics),
        FlowStep::SeriesSelection => Some(FlowStep::SeriesCreation),
        FlowStep::SeriesCreation => Some(FlowStep::DetailsBasics),
        FlowStep::DetailsBasics => Some(FlowStep::DetailsContent),
        FlowStep::DetailsContent => Some(FlowStep::DetailsAccess),
        FlowStep::DetailsAccess => Some(FlowStep::FinalDetails),
        FlowStep::FinalDetails => Some(FlowStep::FileSelect),
        FlowStep::FileSelect => Some(FlowStep::UploadProgress),
        FlowStep::UploadProgress => None,
    }
}

/// Previous step for a retreat; `None` means the flow exits instead
pub fn prev_step(step: FlowStep, state: &FlowState) -> Option<FlowStep> {
    match step {
        FlowStep::FormatSelect => None,
        FlowStep::EpisodeSelection => Some(FlowStep::FormatSelect),
        FlowStep::SeriesSelection => Some(FlowStep::EpisodeSelection),
        FlowStep::SeriesCreation => Some(FlowStep::SeriesSelection),
        FlowStep::DetailsBasics => {
            if state.selected_series().is_some() {
                Some(FlowStep::EpisodeSelection)
            } else {
                Some(FlowStep::FormatSelect)
            }
        }
        FlowStep::DetailsContent => Some(FlowStep::DetailsBasics),
        FlowStep::DetailsAccess => Some(FlowStep::DetailsContent),
        FlowStep::FinalDetails => Some(FlowStep::DetailsAccess),
        // Always back to the review page, editing mode included
        FlowStep::FileSelect => Some(FlowStep::FinalDetails),
        FlowStep::UploadProgress => Some(FlowStep::FileSelect),
    }
}
