mod conversion;
pub mod entities;
pub mod vimeo_video_service;
