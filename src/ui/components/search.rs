use iced::widget::{button, row, text, text_input};
use iced::{Element, Length, Task};
use std::collections::HashMap;

use crate::tr;
use crate::ui::messages::videos_message::VideosMessage;

pub struct Search {
    pub query: String,
}

impl Search {
    pub fn new(query: &str) -> (Self, Task<VideosMessage>) {
        (
            Self {
                query: query.to_string(),
            },
            iced::widget::focus_next(),
        )
    }

    /// The entered term, if it contains anything besides whitespace.
    pub fn term(&self) -> Option<&str> {
        let term = self.query.trim();
        (!term.is_empty()).then_some(term)
    }

    pub fn view(&'_ self, translations: &HashMap<String, String>) -> Element<'_, VideosMessage> {
        let search_input = text_input(&tr!(translations, "search_placeholder"), &self.query)
            .on_input(VideosMessage::ContentChanged)
            .on_submit(VideosMessage::SearchSubmit)
            .padding(10)
            .width(Length::Fill);

        let search_button = button(text(tr!(translations, "search_button")))
            .on_press_maybe(self.term().map(|_| VideosMessage::SearchSubmit))
            .padding(10);

        row![search_input, search_button].spacing(10).into()
    }
}
