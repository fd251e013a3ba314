use std::time::Duration;

pub const PAGE_SIZE: u32 = 30;

pub const DEFAULT_API_BASE_URL: &str = "https://api.vimeo.com";
pub const VIMEO_MEDIA_TYPE: &str = "application/vnd.vimeo.*+json;version=3.4";
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
pub const USER_AGENT: &str = concat!("LoopVideos/", env!("CARGO_PKG_VERSION"));

pub const NETWORK_ERROR_MESSAGE: &str = "Can't load data.\nCheck your network connection.";
pub const CLIENT_ERROR_MESSAGE: &str = "Can't load data.\nThe request was rejected";

pub const MAX_THUMBNAIL_WIDTH: u32 = 640;

pub const VIDEO_ROW_HEIGHT: f32 = 72.0;
pub const DEFAULT_SEARCH_QUERY: &str = "staff picks";
