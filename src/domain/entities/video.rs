use crate::domain::entities::types::VideoId;
use chrono::{DateTime, Utc};
use std::time::Duration;

/// One row of the video list.
#[derive(Clone, Debug, PartialEq)]
pub struct VideoSummary {
    pub id: VideoId,
    pub title: String,
    pub thumbnail_url: Option<String>,
    pub duration: Duration,
    pub uploaded_at: Option<DateTime<Utc>>,
    pub owner_name: Option<String>,
    pub plays: Option<u64>,
    pub link: Option<String>,
}

impl VideoSummary {
    /// `m:ss` below one hour, `h:mm:ss` above.
    pub fn formatted_duration(&self) -> String {
        let total = self.duration.as_secs();
        let (hours, minutes, seconds) = (total / 3600, (total % 3600) / 60, total % 60);
        if hours > 0 {
            format!("{hours}:{minutes:02}:{seconds:02}")
        } else {
            format!("{minutes}:{seconds:02}")
        }
    }
}
