pub mod list_view;
pub mod translation_loader;
pub mod video_query_service;
