use crate::domain::entities::list_state::ListState;

/// Sink for list state updates.
pub trait ListView: Send + Sync {
    fn render(&self, state: &ListState);
}
