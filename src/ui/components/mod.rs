pub mod error_panel;
pub mod search;
pub mod sort_pickers;
pub mod video_list;
