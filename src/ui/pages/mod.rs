pub mod video_details_page;
pub mod videos_page;
