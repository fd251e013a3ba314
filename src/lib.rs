pub mod config;
pub mod domain;
pub mod infrastructure;
#[cfg(feature = "gui")]
pub mod ui;
#[cfg(feature = "gui")]
pub mod utils;
