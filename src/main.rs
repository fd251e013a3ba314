use loop_videos::config::settings::ApiSettings;
use loop_videos::domain::entities::query::Query;
use loop_videos::ui::app::LoopApp;
use loop_videos::ui::app_factory::LoopAppService;
use loop_videos::utils::dialogs::popup_error_and_exit;

fn main() -> iced::Result {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let settings = ApiSettings::from_env().unwrap_or_else(|error| popup_error_and_exit(error));
    let term = std::env::args()
        .nth(1)
        .unwrap_or_else(|| settings.default_query.clone());
    let service = LoopAppService::create(&settings);

    iced::application(LoopApp::title, LoopApp::update, LoopApp::view)
        .subscription(LoopApp::subscription)
        .window(LoopApp::window())
        .run_with(move || LoopApp::new(service, Query::new(term)))
}
