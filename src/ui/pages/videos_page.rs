use std::collections::HashMap;
use std::sync::Arc;

use crate::domain::entities::query::{Query, SortField, SortOrder};
use crate::domain::entities::video::VideoSummary;
use crate::domain::ports::secondary::list_view::ListView;
use crate::domain::ports::secondary::video_query_service::VideoQueryService;
use crate::domain::services::paginated_list_controller::{
    FetchCompletion, PaginatedListController, PendingFetch,
};
use crate::tr;
use crate::ui::components::search::Search;
use crate::ui::components::sort_pickers::sort_pickers;
use crate::ui::components::video_list::VideoList;
use crate::ui::messages::videos_message::VideosMessage;
use iced::widget::column;
use iced::widget::scrollable::Viewport;
use iced::{Element, Task};

pub struct VideosPage {
    controller: PaginatedListController,
    search: Search,
    video_list: VideoList,
    sort_field: SortField,
    sort_order: SortOrder,
}

impl VideosPage {
    pub fn new(
        service: Arc<dyn VideoQueryService>,
        list_view: Arc<dyn ListView>,
        query: Query,
    ) -> (Self, Task<VideosMessage>) {
        let mut controller = PaginatedListController::new(service, list_view);
        let (search, search_task) = Search::new(query.term());
        let sort_field = query.sort_field();
        let sort_order = query.sort_order();
        let fetch = controller.start(query);

        let page = Self {
            controller,
            search,
            video_list: VideoList::new(),
            sort_field,
            sort_order,
        };
        (page, Task::batch([search_task, perform(fetch)]))
    }

    pub fn title(translations: &HashMap<String, String>) -> String {
        tr!(translations, "videos_page_title")
    }

    pub fn video_at(&self, index: usize) -> Option<&VideoSummary> {
        self.controller.video_at(index)
    }

    pub fn view(&'_ self, translations: &HashMap<String, String>) -> Element<'_, VideosMessage> {
        let search_section = self.search.view(translations);
        let sort_section = sort_pickers(self.sort_field, self.sort_order, translations);
        let videos = self.video_list.view(self.controller.state(), translations);

        column![search_section, sort_section, videos]
            .spacing(20)
            .padding(20)
            .into()
    }

    pub fn update(&mut self, message: VideosMessage) -> Task<VideosMessage> {
        match message {
            VideosMessage::ContentChanged(content) => {
                self.search.query = content;
                Task::none()
            }
            VideosMessage::SearchSubmit => self.process_new_search(),
            VideosMessage::SortFieldSelected(sort_field) => {
                self.sort_field = sort_field;
                self.re_sort()
            }
            VideosMessage::SortOrderSelected(sort_order) => {
                self.sort_order = sort_order;
                self.re_sort()
            }
            VideosMessage::Scrolled(viewport) => self.handle_scroll(&viewport),
            VideosMessage::Retry => perform_maybe(self.controller.retry()),
            // Opening the details view is the app's business.
            VideosMessage::VideoSelected(_) => Task::none(),
            VideosMessage::VideosLoaded(completion) => self.handle_videos_loaded(completion),
        }
    }

    fn process_new_search(&mut self) -> Task<VideosMessage> {
        let Some(term) = self.search.term() else {
            return Task::none();
        };
        let query = Query::new(term).sorted_by(self.sort_field, self.sort_order);
        let fetch = self.controller.start(query);
        Task::batch([self.video_list.snap_to_top(), perform(fetch)])
    }

    fn re_sort(&mut self) -> Task<VideosMessage> {
        match self.controller.re_sort(self.sort_field, self.sort_order) {
            Some(fetch) => Task::batch([self.video_list.snap_to_top(), perform(fetch)]),
            None => Task::none(),
        }
    }

    fn handle_scroll(&mut self, viewport: &Viewport) -> Task<VideosMessage> {
        self.video_list.set_viewport(viewport);
        self.load_more_if_near_end()
    }

    fn handle_videos_loaded(&mut self, completion: FetchCompletion) -> Task<VideosMessage> {
        self.controller.on_fetch_completed(completion);
        // A short page may not fill the viewport, so no scroll event would ask for more.
        self.load_more_if_near_end()
    }

    fn load_more_if_near_end(&mut self) -> Task<VideosMessage> {
        if self
            .video_list
            .reaches_end(self.controller.state().items.len())
        {
            perform_maybe(self.controller.on_scroll_near_end())
        } else {
            Task::none()
        }
    }
}

fn perform(fetch: PendingFetch) -> Task<VideosMessage> {
    Task::perform(fetch, VideosMessage::VideosLoaded)
}

fn perform_maybe(fetch: Option<PendingFetch>) -> Task<VideosMessage> {
    fetch.map_or_else(Task::none, perform)
}
