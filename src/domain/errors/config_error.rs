use std::num::ParseIntError;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing environment variable {0}")]
    MissingVariable(&'static str),
    #[error("Invalid value {value:?} for {variable}: {source}")]
    InvalidNumber {
        variable: &'static str,
        value: String,
        source: ParseIntError,
    },
    #[error("{0} must be greater than zero")]
    NotPositive(&'static str),
}
