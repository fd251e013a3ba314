pub mod config_error;
pub mod domain_error;
pub mod fetch_error;
