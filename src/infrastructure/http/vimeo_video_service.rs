use crate::config::constants::{USER_AGENT, VIMEO_MEDIA_TYPE};
use crate::config::settings::ApiSettings;
use crate::domain::entities::page::{PageRequest, VideosPage};
use crate::domain::errors::domain_error::DomainError;
use crate::domain::errors::fetch_error::{FetchError, NetworkFailure};
use crate::domain::ports::secondary::video_query_service::VideoQueryService;
use crate::infrastructure::http::entities::VideosCollectionDto;
use reqwest::Client;
use reqwest::header::ACCEPT;

/// Video search against the Vimeo REST API.
pub struct VimeoVideoService {
    client: Client,
    base_url: String,
    access_token: String,
}

impl VimeoVideoService {
    /// # Errors
    ///
    /// Returns a [`DomainError`] if:
    /// - the [`HttpClient`](DomainError::HttpClient) cannot be built, e.g. the TLS backend fails to initialise.
    pub fn new(settings: &ApiSettings) -> Result<Self, DomainError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(settings.timeout)
            .connect_timeout(settings.timeout)
            .build()?;

        Ok(Self {
            client,
            base_url: settings.base_url.clone(),
            access_token: settings.access_token.clone(),
        })
    }

    pub fn videos_url(&self) -> String {
        format!("{}/videos", self.base_url)
    }
}

#[async_trait::async_trait]
impl VideoQueryService for VimeoVideoService {
    async fn fetch(&self, request: &PageRequest) -> Result<VideosPage, FetchError> {
        let response = self
            .client
            .get(self.videos_url())
            .bearer_auth(&self.access_token)
            .header(ACCEPT, VIMEO_MEDIA_TYPE)
            .query(&query_parameters(request))
            .send()
            .await
            .map_err(classify_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            log::debug!(
                "Vimeo answered {status} for page {} of {}",
                request.page_number,
                request.query
            );
            return Err(FetchError::from_status(status.as_u16()));
        }

        let collection = response
            .json::<VideosCollectionDto>()
            .await
            .map_err(classify_transport_error)?;
        Ok(collection.into())
    }
}

/// Query string of `GET /videos` for one page.
pub fn query_parameters(request: &PageRequest) -> Vec<(&'static str, String)> {
    vec![
        ("query", request.query.term().to_string()),
        ("sort", request.query.sort_field().api_value().to_string()),
        ("direction", request.query.sort_order().api_value().to_string()),
        ("page", request.page_number.to_string()),
        ("per_page", request.page_size.to_string()),
    ]
}

fn classify_transport_error(error: reqwest::Error) -> FetchError {
    if error.is_timeout() {
        FetchError::Network(NetworkFailure::Timeout)
    } else if error.is_connect() {
        FetchError::Network(NetworkFailure::Unreachable)
    } else if error.is_decode() {
        FetchError::Decode(error.to_string())
    } else if let Some(status) = error.status() {
        FetchError::from_status(status.as_u16())
    } else {
        log::debug!("Treating transport error as a dropped connection: {error}");
        FetchError::Network(NetworkFailure::ConnectionReset)
    }
}
