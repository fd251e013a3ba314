pub mod language;
pub mod list_state;
pub mod page;
pub mod query;
pub mod scroll;
pub mod types;
pub mod video;
