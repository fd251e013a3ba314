use crate::domain::entities::query::Query;
use crate::domain::entities::video::VideoSummary;

/// One page of a query. Page numbers start at 1.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageRequest {
    pub query: Query,
    pub page_number: u32,
    pub page_size: u32,
}

impl PageRequest {
    pub const fn first(query: Query, page_size: u32) -> Self {
        Self {
            query,
            page_number: 1,
            page_size,
        }
    }

    pub const fn is_first(&self) -> bool {
        self.page_number == 1
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct VideosPage {
    pub videos: Vec<VideoSummary>,
    pub total: Option<u64>,
}

impl VideosPage {
    /// A page shorter than requested is the last one.
    pub fn is_last_for(&self, request: &PageRequest) -> bool {
        self.videos.len() < request.page_size as usize
    }
}
