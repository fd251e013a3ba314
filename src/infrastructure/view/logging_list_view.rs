use crate::domain::entities::list_state::ListState;
use crate::domain::ports::secondary::list_view::ListView;

/// Traces every state the list goes through.
pub struct LoggingListView;

impl ListView for LoggingListView {
    fn render(&self, state: &ListState) {
        match &state.error {
            Some(error) => log::debug!(
                "List {:?} with {} videos: {:?}",
                state.phase(),
                state.items.len(),
                error.kind
            ),
            None => log::debug!("List {:?} with {} videos", state.phase(), state.items.len()),
        }
    }
}
