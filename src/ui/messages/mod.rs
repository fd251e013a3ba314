pub mod app_message;
pub mod details_message;
pub mod videos_message;
