use crate::domain::entities::list_state::ErrorInfo;
use std::fmt::{Display, Formatter, Result};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NetworkFailure {
    Timeout,
    Unreachable,
    ConnectionReset,
}

impl Display for NetworkFailure {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.write_str(match self {
            NetworkFailure::Timeout => "request timed out",
            NetworkFailure::Unreachable => "host unreachable",
            NetworkFailure::ConnectionReset => "connection reset",
        })
    }
}

/// Why a page could not be fetched.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    #[error("Network failure: {0}")]
    Network(NetworkFailure),
    #[error("Server error: HTTP {0}")]
    Server(u16),
    #[error("Client error: HTTP {0}")]
    Client(u16),
    #[error("Unreadable response: {0}")]
    Decode(String),
    #[error("Request cancelled")]
    Cancelled,
}

impl FetchError {
    /// Maps a non-success HTTP status to its error class.
    pub const fn from_status(status: u16) -> Self {
        match status {
            500..=599 => FetchError::Server(status),
            _ => FetchError::Client(status),
        }
    }

    /// What the list should display for this failure. Cancellations display nothing.
    pub fn error_info(&self) -> Option<ErrorInfo> {
        match self {
            FetchError::Network(_) => Some(ErrorInfo::network()),
            FetchError::Server(status) => Some(ErrorInfo::server(Some(*status))),
            FetchError::Decode(_) => Some(ErrorInfo::server(None)),
            FetchError::Client(status) => Some(ErrorInfo::client(*status)),
            FetchError::Cancelled => None,
        }
    }
}
