use crate::config::settings::ApiSettings;
use crate::domain::entities::language::Language;
use crate::domain::ports::secondary::list_view::ListView;
use crate::domain::ports::secondary::translation_loader::TranslationLoader;
use crate::domain::ports::secondary::video_query_service::VideoQueryService;
use crate::infrastructure::http::vimeo_video_service::VimeoVideoService;
use crate::infrastructure::i18n::json_translation_loader::JsonTranslationLoader;
use crate::infrastructure::view::logging_list_view::LoggingListView;
use crate::utils::dialogs::popup_error_and_exit;
use std::collections::HashMap;
use std::sync::Arc;

pub struct LoopAppService {
    pub video_query_service: Arc<dyn VideoQueryService>,
    pub list_view: Arc<dyn ListView>,
    pub translation_loader: Arc<dyn TranslationLoader>,
}

impl LoopAppService {
    #[must_use]
    pub fn create(settings: &ApiSettings) -> Self {
        let video_query_service = Arc::new(
            VimeoVideoService::new(settings).unwrap_or_else(|error| popup_error_and_exit(error)),
        );

        Self {
            video_query_service,
            list_view: Arc::new(LoggingListView),
            translation_loader: Arc::new(JsonTranslationLoader),
        }
    }

    /// Language of the user's locale, English when unknown.
    #[must_use]
    pub fn initial_language() -> Language {
        std::env::var("LANG")
            .map(|locale| Language::from_locale(&locale))
            .unwrap_or_default()
    }

    #[must_use]
    pub fn translations(&self, language: Language) -> HashMap<String, String> {
        self.translation_loader.load_translations(language)
    }
}
