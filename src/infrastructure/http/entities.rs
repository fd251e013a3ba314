use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Body of `GET /videos`.
#[derive(Debug, Deserialize)]
pub struct VideosCollectionDto {
    pub total: Option<u64>,
    pub page: Option<u32>,
    pub per_page: Option<u32>,
    pub data: Option<Vec<VideoDto>>,
}

#[derive(Debug, Deserialize)]
pub struct VideoDto {
    pub uri: String,
    pub name: Option<String>,
    pub link: Option<String>,
    pub duration: Option<u64>,
    pub created_time: Option<DateTime<Utc>>,
    pub pictures: Option<PicturesDto>,
    pub user: Option<UserDto>,
    pub stats: Option<StatsDto>,
}

#[derive(Debug, Deserialize)]
pub struct PicturesDto {
    #[serde(default)]
    pub sizes: Vec<PictureSizeDto>,
}

#[derive(Debug, Deserialize)]
pub struct PictureSizeDto {
    pub width: u32,
    pub link: String,
}

#[derive(Debug, Deserialize)]
pub struct UserDto {
    pub name: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct StatsDto {
    pub plays: Option<u64>,
}
