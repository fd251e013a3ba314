use std::collections::HashMap;

use crate::domain::entities::language::Language;
use crate::domain::entities::video::VideoSummary;
use crate::tr;
use crate::ui::messages::details_message::DetailsMessage;
use crate::ui::utils::format_date_time::format_date_time;
use iced::widget::{Column, button, column, text};
use iced::{Element, Task};

pub struct VideoDetailsPage {
    video: VideoSummary,
}

impl VideoDetailsPage {
    pub fn new(video: VideoSummary) -> (Self, Task<DetailsMessage>) {
        log::debug!("Opening details of video {}", video.id);
        (Self { video }, Task::none())
    }

    pub fn title(translations: &HashMap<String, String>) -> String {
        tr!(translations, "details_page_title")
    }

    pub fn view(
        &'_ self,
        translations: &HashMap<String, String>,
        language: Language,
    ) -> Element<'_, DetailsMessage> {
        let video = &self.video;

        let back_button = button(text(tr!(translations, "back_button")))
            .on_press(DetailsMessage::Back)
            .padding(8);

        let owner = video.owner_name.as_ref().map_or_else(
            || tr!(translations, "unknown_owner"),
            |owner| tr!(translations, "uploaded_by", "owner" => owner.as_str()),
        );
        let duration = video.formatted_duration();

        let details = Column::new()
            .push(text(owner))
            .push(text(tr!(translations, "duration", "duration" => duration.as_str())))
            .push_maybe(video.uploaded_at.map(|uploaded_at| {
                let date = format_date_time(uploaded_at, language);
                text(tr!(translations, "uploaded_on", "date" => date.as_str()))
            }))
            .push_maybe(video.plays.map(|plays| {
                let count = plays.to_string();
                text(tr!(translations, "plays", "count" => count.as_str()))
            }))
            .push_maybe(video.link.as_deref().map(|link| text(link).size(12)))
            .spacing(8);

        column![back_button, text(&video.title).size(24), details]
            .spacing(20)
            .padding(20)
            .into()
    }
}
