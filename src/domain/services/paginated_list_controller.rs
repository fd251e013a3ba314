use crate::config::constants::PAGE_SIZE;
use crate::domain::entities::list_state::ListState;
use crate::domain::entities::page::{PageRequest, VideosPage};
use crate::domain::entities::query::{Query, SortField, SortOrder};
use crate::domain::entities::video::VideoSummary;
use crate::domain::errors::fetch_error::FetchError;
use crate::domain::ports::secondary::list_view::ListView;
use crate::domain::ports::secondary::video_query_service::VideoQueryService;
use futures_util::FutureExt;
use futures_util::future::{AbortHandle, Abortable, BoxFuture};
use std::sync::Arc;

/// Outcome of one issued fetch, tagged with the generation it was issued under.
#[derive(Clone, Debug)]
pub struct FetchCompletion {
    pub generation: u64,
    pub request: PageRequest,
    pub result: Result<VideosPage, FetchError>,
}

/// Resolves when the issued fetch completes. A superseded fetch resolves to
/// [`FetchError::Cancelled`].
pub type PendingFetch = BoxFuture<'static, FetchCompletion>;

struct InFlight {
    generation: u64,
    abort: AbortHandle,
}

/// Drives an infinitely scrolling list of videos.
///
/// Every operation runs on the caller's thread. Operations that need data return a
/// [`PendingFetch`]; the caller awaits it wherever it likes and hands the resulting
/// [`FetchCompletion`] back to [`on_fetch_completed`](Self::on_fetch_completed).
/// Only the most recently issued fetch may change the state.
pub struct PaginatedListController {
    service: Arc<dyn VideoQueryService>,
    view: Arc<dyn ListView>,
    page_size: u32,
    query: Option<Query>,
    page_number: u32,
    state: ListState,
    generation: u64,
    in_flight: Option<InFlight>,
    failed_request: Option<PageRequest>,
}

impl PaginatedListController {
    pub fn new(service: Arc<dyn VideoQueryService>, view: Arc<dyn ListView>) -> Self {
        Self {
            service,
            view,
            page_size: PAGE_SIZE,
            query: None,
            page_number: 0,
            state: ListState::default(),
            generation: 0,
            in_flight: None,
            failed_request: None,
        }
    }

    #[must_use]
    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    pub const fn state(&self) -> &ListState {
        &self.state
    }

    pub const fn query(&self) -> Option<&Query> {
        self.query.as_ref()
    }

    pub const fn page_number(&self) -> u32 {
        self.page_number
    }

    pub const fn generation(&self) -> u64 {
        self.generation
    }

    pub const fn is_fetching(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn video_at(&self, index: usize) -> Option<&VideoSummary> {
        self.state.items.get(index)
    }

    /// Shows the first page of `query`, dropping whatever was listed or loading before.
    pub fn start(&mut self, query: Query) -> PendingFetch {
        self.cancel_in_flight();
        log::info!("Loading videos for {query}");

        self.page_number = 1;
        self.failed_request = None;
        self.state = ListState::loading_initial();
        let request = PageRequest::first(query.clone(), self.page_size);
        self.query = Some(query);

        self.publish();
        self.issue(request)
    }

    /// Requests the next page, unless one is already loading, the list is exhausted, or
    /// an error is shown. A page whose request was cancelled is requested again.
    pub fn on_scroll_near_end(&mut self) -> Option<PendingFetch> {
        if self.in_flight.is_some() || self.state.error.is_some() {
            return None;
        }
        if self.failed_request.is_some() {
            return self.retry();
        }
        if !self.state.can_load_more() {
            return None;
        }
        let query = self.query.clone()?;

        self.page_number += 1;
        self.state.is_loading_more = true;
        let request = PageRequest {
            query,
            page_number: self.page_number,
            page_size: self.page_size,
        };

        self.publish();
        Some(self.issue(request))
    }

    /// Issues the last failed request again, unchanged.
    pub fn retry(&mut self) -> Option<PendingFetch> {
        if self.in_flight.is_some() {
            return None;
        }
        let request = self.failed_request.take()?;
        log::info!("Retrying page {} of {}", request.page_number, request.query);

        self.state.error = None;
        if request.is_first() {
            self.state.is_loading_initial = true;
        } else {
            self.state.is_loading_more = true;
        }

        self.publish();
        Some(self.issue(request))
    }

    /// Restarts the current query with another sort. Does nothing before the first
    /// [`start`](Self::start).
    pub fn re_sort(&mut self, sort_field: SortField, sort_order: SortOrder) -> Option<PendingFetch> {
        let query = self.query.clone()?.sorted_by(sort_field, sort_order);
        Some(self.start(query))
    }

    pub fn on_fetch_completed(&mut self, completion: FetchCompletion) {
        let FetchCompletion {
            generation,
            request,
            result,
        } = completion;

        if !self.is_current(generation) {
            log::debug!(
                "Dropping stale page {} of {} (generation {generation}, current {})",
                request.page_number,
                request.query,
                self.generation
            );
            return;
        }
        self.in_flight = None;

        match result {
            Ok(page) => self.apply_page(&request, page),
            Err(error) => self.apply_failure(request, &error),
        }
        self.publish();
    }

    fn apply_page(&mut self, request: &PageRequest, page: VideosPage) {
        let is_last_page = page.is_last_for(request);
        log::debug!(
            "Received {} videos for page {} of {}",
            page.videos.len(),
            request.page_number,
            request.query
        );

        if request.is_first() {
            self.state.items = page.videos;
        } else {
            self.state.items.extend(page.videos);
        }
        self.state.is_loading_initial = false;
        self.state.is_loading_more = false;
        self.state.is_last_page = is_last_page;
        self.state.error = None;
        self.failed_request = None;
    }

    fn apply_failure(&mut self, request: PageRequest, error: &FetchError) {
        self.state.is_loading_initial = false;
        self.state.is_loading_more = false;

        match error.error_info() {
            Some(info) => {
                log::error!(
                    "Failed to load page {} of {}: {error}",
                    request.page_number,
                    request.query
                );
                self.state.error = Some(info);
            }
            None => log::debug!("Page {} of {} was cancelled", request.page_number, request.query),
        }
        self.failed_request = Some(request);
    }

    fn issue(&mut self, request: PageRequest) -> PendingFetch {
        self.generation += 1;
        let generation = self.generation;
        let (abort, registration) = AbortHandle::new_pair();
        self.in_flight = Some(InFlight { generation, abort });

        log::debug!(
            "Fetching page {} of {} (generation {generation})",
            request.page_number,
            request.query
        );

        let service = Arc::clone(&self.service);
        async move {
            let result = Abortable::new(service.fetch(&request), registration)
                .await
                .unwrap_or(Err(FetchError::Cancelled));
            FetchCompletion {
                generation,
                request,
                result,
            }
        }
        .boxed()
    }

    fn cancel_in_flight(&mut self) {
        if let Some(in_flight) = self.in_flight.take() {
            log::debug!("Superseding generation {}", in_flight.generation);
            in_flight.abort.abort();
        }
    }

    fn is_current(&self, generation: u64) -> bool {
        self.in_flight
            .as_ref()
            .is_some_and(|in_flight| in_flight.generation == generation)
    }

    fn publish(&self) {
        self.view.render(&self.state);
    }
}
