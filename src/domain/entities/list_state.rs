use crate::config::constants::{CLIENT_ERROR_MESSAGE, NETWORK_ERROR_MESSAGE};
use crate::domain::entities::video::VideoSummary;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    Network,
    Server,
    Client,
}

/// What the list shows in place of its loading indicator after a failed fetch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ErrorInfo {
    pub kind: ErrorKind,
    pub message: String,
    pub status: Option<u16>,
}

impl ErrorInfo {
    pub fn network() -> Self {
        Self {
            kind: ErrorKind::Network,
            message: NETWORK_ERROR_MESSAGE.to_string(),
            status: None,
        }
    }

    pub fn server(status: Option<u16>) -> Self {
        Self {
            kind: ErrorKind::Server,
            message: NETWORK_ERROR_MESSAGE.to_string(),
            status,
        }
    }

    pub fn client(status: u16) -> Self {
        Self {
            kind: ErrorKind::Client,
            message: format!("{CLIENT_ERROR_MESSAGE} (HTTP {status})."),
            status: Some(status),
        }
    }

    /// Whether the view should offer a retry action.
    pub const fn is_retryable(&self) -> bool {
        !matches!(self.kind, ErrorKind::Client)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListPhase {
    Idle,
    LoadingInitial,
    LoadingMore,
    Error,
    Exhausted,
}

/// Everything a view needs to draw the list.
///
/// Never loading the first page and the next page at the same time, and never
/// loading while an error is shown.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ListState {
    pub items: Vec<VideoSummary>,
    pub is_loading_initial: bool,
    pub is_loading_more: bool,
    pub is_last_page: bool,
    pub error: Option<ErrorInfo>,
}

impl ListState {
    pub fn loading_initial() -> Self {
        Self {
            is_loading_initial: true,
            ..Self::default()
        }
    }

    pub const fn is_loading(&self) -> bool {
        self.is_loading_initial || self.is_loading_more
    }

    pub const fn can_load_more(&self) -> bool {
        !self.is_loading() && !self.is_last_page && self.error.is_none()
    }

    /// The query matched nothing.
    pub fn is_empty_result(&self) -> bool {
        self.items.is_empty() && self.is_last_page && self.error.is_none()
    }

    pub const fn phase(&self) -> ListPhase {
        if self.error.is_some() {
            ListPhase::Error
        } else if self.is_loading_initial {
            ListPhase::LoadingInitial
        } else if self.is_loading_more {
            ListPhase::LoadingMore
        } else if self.is_last_page {
            ListPhase::Exhausted
        } else {
            ListPhase::Idle
        }
    }
}
