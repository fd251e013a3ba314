use crate::config::constants::VIDEO_ROW_HEIGHT;
use crate::domain::entities::list_state::ListState;
use crate::domain::entities::scroll::VisibleRange;
use crate::domain::entities::video::VideoSummary;
use crate::tr;
use crate::ui::components::error_panel::{error_panel, reload_button};
use crate::ui::messages::videos_message::VideosMessage;
use iced::widget::scrollable::Viewport;
use iced::widget::{Column, Rule, button, column, container, row, scrollable, text};
use iced::{Alignment, Element, Length, Task};
use std::collections::HashMap;

pub struct VideoList {
    pub scroll_bar_id: scrollable::Id,
    offset_y: f32,
    viewport_height: f32,
}

impl VideoList {
    pub fn new() -> Self {
        Self {
            scroll_bar_id: scrollable::Id::unique(),
            offset_y: 0.0,
            viewport_height: 0.0,
        }
    }

    pub fn set_viewport(&mut self, viewport: &Viewport) {
        self.record_scroll(viewport.absolute_offset().y, viewport.bounds().height);
    }

    pub fn record_scroll(&mut self, offset_y: f32, viewport_height: f32) {
        self.offset_y = offset_y;
        self.viewport_height = viewport_height;
    }

    /// Whether the last of `total_count` rows is on screen, as of the latest scroll.
    pub fn reaches_end(&self, total_count: usize) -> bool {
        VisibleRange::from_offset(
            self.offset_y,
            self.viewport_height,
            VIDEO_ROW_HEIGHT,
            total_count,
        )
        .reaches_end()
    }

    pub fn view<'a>(
        &'a self,
        state: &'a ListState,
        translations: &HashMap<String, String>,
    ) -> Element<'a, VideosMessage> {
        if state.is_loading_initial {
            return centered(text(tr!(translations, "loading")).into());
        }
        if state.items.is_empty() {
            if let Some(error) = &state.error {
                return centered(error_panel(error, translations));
            }
            if state.is_empty_result() {
                return centered(text(tr!(translations, "no_videos")).into());
            }
            // The first page was interrupted before anything arrived.
            return centered(reload_button(translations));
        }

        let rows = state
            .items
            .iter()
            .enumerate()
            .map(|(index, video)| video_row(index, video, translations));

        let footer: Option<Element<'a, VideosMessage>> = if state.is_loading_more {
            Some(text(tr!(translations, "loading_more")).into())
        } else if let Some(error) = &state.error {
            Some(error_panel(error, translations))
        } else if state.is_last_page {
            Some(text(tr!(translations, "end_of_list")).size(12).into())
        } else {
            None
        };

        let content = Column::with_children(rows)
            .push_maybe(footer.map(|footer| {
                container(footer)
                    .padding(10)
                    .center_x(Length::Fill)
            }))
            .width(Length::Fill);

        column![
            Rule::horizontal(1),
            scrollable(content)
                .id(self.scroll_bar_id.clone())
                .on_scroll(VideosMessage::Scrolled)
                .height(Length::Fill),
            Rule::horizontal(1),
        ]
        .into()
    }

    /// Scrolls back to the first row. The offset is forgotten right away: the scrollable
    /// is not on screen while the first page loads, so no scroll event will report it.
    pub fn snap_to_top(&mut self) -> Task<VideosMessage> {
        self.offset_y = 0.0;
        scrollable::snap_to(
            self.scroll_bar_id.clone(),
            scrollable::RelativeOffset::START,
        )
    }
}

fn video_row<'a>(
    index: usize,
    video: &'a VideoSummary,
    translations: &HashMap<String, String>,
) -> Element<'a, VideosMessage> {
    let owner = video.owner_name.as_ref().map_or_else(
        || tr!(translations, "unknown_owner"),
        |owner| tr!(translations, "uploaded_by", "owner" => owner.as_str()),
    );

    let content = row![
        column![text(&video.title).size(16), text(owner).size(12)]
            .spacing(4)
            .width(Length::Fill),
        text(video.formatted_duration()).size(12),
    ]
    .spacing(10)
    .align_y(Alignment::Center);

    button(content)
        .on_press(VideosMessage::VideoSelected(index))
        .style(button::text)
        .padding(8)
        .width(Length::Fill)
        .height(Length::Fixed(VIDEO_ROW_HEIGHT))
        .into()
}

fn centered<'a>(content: Element<'a, VideosMessage>) -> Element<'a, VideosMessage> {
    container(content)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into()
}
