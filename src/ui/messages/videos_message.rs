use crate::domain::entities::query::{SortField, SortOrder};
use crate::domain::services::paginated_list_controller::FetchCompletion;
use iced::widget::scrollable::Viewport;

#[derive(Clone, Debug)]
pub enum VideosMessage {
    ContentChanged(String),
    SearchSubmit,
    SortFieldSelected(SortField),
    SortOrderSelected(SortOrder),
    Scrolled(Viewport),
    Retry,
    VideoSelected(usize),
    VideosLoaded(FetchCompletion),
}
