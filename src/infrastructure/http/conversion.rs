use crate::config::constants::MAX_THUMBNAIL_WIDTH;
use crate::domain::entities::page::VideosPage;
use crate::domain::entities::types::VideoId;
use crate::domain::entities::video::VideoSummary;
use crate::infrastructure::http::entities::{PicturesDto, VideoDto, VideosCollectionDto};
use std::time::Duration;

impl PicturesDto {
    /// Widest picture that fits `max_width`, or the narrowest one if none fits.
    fn thumbnail_link(self, max_width: u32) -> Option<String> {
        let (fitting, larger): (Vec<_>, Vec<_>) = self
            .sizes
            .into_iter()
            .partition(|size| size.width <= max_width);
        fitting
            .into_iter()
            .max_by_key(|size| size.width)
            .or_else(|| larger.into_iter().min_by_key(|size| size.width))
            .map(|size| size.link)
    }
}

impl From<VideoDto> for VideoSummary {
    fn from(dto: VideoDto) -> Self {
        Self {
            id: VideoId::from_uri(&dto.uri),
            title: dto.name.unwrap_or_default(),
            thumbnail_url: dto
                .pictures
                .and_then(|pictures| pictures.thumbnail_link(MAX_THUMBNAIL_WIDTH)),
            duration: Duration::from_secs(dto.duration.unwrap_or(0)),
            uploaded_at: dto.created_time,
            owner_name: dto.user.and_then(|user| user.name),
            plays: dto.stats.and_then(|stats| stats.plays),
            link: dto.link,
        }
    }
}

impl From<VideosCollectionDto> for VideosPage {
    fn from(dto: VideosCollectionDto) -> Self {
        Self {
            videos: dto
                .data
                .unwrap_or_default()
                .into_iter()
                .map(VideoSummary::from)
                .collect(),
            total: dto.total,
        }
    }
}
