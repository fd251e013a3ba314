use crate::domain::entities::language::Language;
use crate::domain::entities::query::Query;
use crate::tr;
use crate::ui::app_factory::LoopAppService;
use crate::ui::messages::app_message::AppMessage;
use crate::ui::messages::details_message::DetailsMessage;
use crate::ui::messages::videos_message::VideosMessage;
use crate::ui::pages::video_details_page::VideoDetailsPage;
use crate::ui::pages::videos_page::VideosPage;
use iced::keyboard::key::Named;
use iced::widget::{Space, button, column, row, text};
use iced::window::Settings;
use iced::{Element, Length, Size, Subscription, Task, keyboard, widget};
use std::collections::HashMap;

pub struct LoopApp {
    service: LoopAppService,
    current_language: Language,
    translations: HashMap<String, String>,
    videos_page: VideosPage,
    details_page: Option<VideoDetailsPage>,
}

impl LoopApp {
    pub fn new(service: LoopAppService, query: Query) -> (Self, Task<AppMessage>) {
        let current_language = LoopAppService::initial_language();
        let translations = service.translations(current_language);

        let (videos_page, task) = VideosPage::new(
            service.video_query_service.clone(),
            service.list_view.clone(),
            query,
        );

        (
            Self {
                service,
                current_language,
                translations,
                videos_page,
                details_page: None,
            },
            task.map(AppMessage::Videos),
        )
    }

    #[must_use]
    pub fn window() -> Settings {
        Settings {
            size: Size::new(480.0, 800.0),
            min_size: Some(Size::new(360.0, 480.0)),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn title(&self) -> String {
        let page_title = match &self.details_page {
            Some(_) => VideoDetailsPage::title(&self.translations),
            None => VideosPage::title(&self.translations),
        };
        format!(
            "{} - {} (v{})",
            tr!(&self.translations, "window_title"),
            page_title,
            env!("CARGO_PKG_VERSION")
        )
    }

    pub fn view(&'_ self) -> Element<'_, AppMessage> {
        let language_toggle = self.language_toggle();

        let content = match &self.details_page {
            Some(page) => page
                .view(&self.translations, self.current_language)
                .map(AppMessage::Details),
            None => self
                .videos_page
                .view(&self.translations)
                .map(AppMessage::Videos),
        };

        column![language_toggle, content].padding(10).into()
    }

    pub fn update(&mut self, message: AppMessage) -> Task<AppMessage> {
        match message {
            AppMessage::ChangeLanguage(language) => {
                self.current_language = language;
                self.translations = self.service.translations(language);
                Task::none()
            }
            AppMessage::Videos(VideosMessage::VideoSelected(index)) => self.open_details(index),
            AppMessage::Videos(msg) => self.videos_page.update(msg).map(AppMessage::Videos),
            AppMessage::Details(DetailsMessage::Back) | AppMessage::EscapePressed => {
                self.details_page = None;
                Task::none()
            }
            AppMessage::RetryPressed => {
                if self.details_page.is_some() {
                    Task::none()
                } else {
                    self.update(AppMessage::Videos(VideosMessage::Retry))
                }
            }
            AppMessage::TabPressed { shift } => {
                if shift {
                    widget::focus_previous()
                } else {
                    widget::focus_next()
                }
            }
        }
    }

    pub fn subscription(&self) -> Subscription<AppMessage> {
        keyboard::on_key_press(|key, modifiers| {
            let keyboard::Key::Named(key) = key else {
                return None;
            };
            match key {
                Named::Tab => Some(AppMessage::TabPressed {
                    shift: modifiers.shift(),
                }),
                Named::F5 => Some(AppMessage::RetryPressed),
                Named::Escape => Some(AppMessage::EscapePressed),
                _ => None,
            }
        })
    }

    fn open_details(&mut self, index: usize) -> Task<AppMessage> {
        let Some(video) = self.videos_page.video_at(index).cloned() else {
            return Task::none();
        };
        let (details_page, task) = VideoDetailsPage::new(video);
        self.details_page = Some(details_page);
        task.map(AppMessage::Details)
    }

    fn language_toggle(&'_ self) -> Element<'_, AppMessage> {
        let label = match self.current_language {
            Language::English => "EN",
            Language::French => "FR",
        };

        let toggle_button = button(text(label))
            .on_press(AppMessage::ChangeLanguage(self.current_language.toggle()));

        row![Space::with_width(Length::Fill), toggle_button]
            .width(Length::Fill)
            .into()
    }
}
