use iced::widget::{button, text, Column};
use iced::{Alignment, Element};
use std::collections::HashMap;

use crate::domain::entities::list_state::{ErrorInfo, ErrorKind};
use crate::tr;
use crate::ui::messages::videos_message::VideosMessage;

pub fn error_message(error: &ErrorInfo, translations: &HashMap<String, String>) -> String {
    match (error.kind, error.status) {
        (ErrorKind::Client, Some(status)) => {
            let status = status.to_string();
            tr!(translations, "client_error", "status" => status.as_str())
        }
        _ => tr!(translations, "network_error"),
    }
}

/// Error text, plus a reload button when retrying can help.
pub fn error_panel<'a>(
    error: &ErrorInfo,
    translations: &HashMap<String, String>,
) -> Element<'a, VideosMessage> {
    let reload = error.is_retryable().then(|| reload_button(translations));

    Column::new()
        .push(text(error_message(error, translations)))
        .push_maybe(reload)
        .spacing(10)
        .padding(20)
        .align_x(Alignment::Center)
        .into()
}

pub fn reload_button<'a>(translations: &HashMap<String, String>) -> Element<'a, VideosMessage> {
    button(text(tr!(translations, "reload_button")))
        .on_press(VideosMessage::Retry)
        .padding(8)
        .into()
}
