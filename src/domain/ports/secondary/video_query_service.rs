use crate::domain::entities::page::{PageRequest, VideosPage};
use crate::domain::errors::fetch_error::FetchError;

/// Remote source of video pages.
///
/// Implementations own transport concerns such as timeouts. Dropping the returned
/// future cancels the call.
#[async_trait::async_trait]
pub trait VideoQueryService: Send + Sync {
    /// Fetches one page of the request's query.
    ///
    /// # Errors
    ///
    /// Returns a [`FetchError`] classified as:
    /// - [`Network`](FetchError::Network) for timeouts, DNS failures and dropped connections,
    /// - [`Server`](FetchError::Server) for HTTP 5xx,
    /// - [`Client`](FetchError::Client) for any other non-success status,
    /// - [`Decode`](FetchError::Decode) when the body cannot be read.
    async fn fetch(&self, request: &PageRequest) -> Result<VideosPage, FetchError>;
}
