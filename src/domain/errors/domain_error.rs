#[derive(Debug, thiserror::Error)]
pub enum DomainError {
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),
}
