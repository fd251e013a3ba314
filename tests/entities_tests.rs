use loop_videos::config::constants::DEFAULT_SEARCH_QUERY;
use loop_videos::config::settings::ApiSettings;
use loop_videos::domain::entities::language::Language;
use loop_videos::domain::entities::list_state::{ErrorKind, ListPhase, ListState};
use loop_videos::domain::entities::page::PageRequest;
use loop_videos::domain::entities::query::{Query, SortField, SortOrder};
use loop_videos::domain::entities::scroll::VisibleRange;
use loop_videos::domain::entities::types::VideoId;
use loop_videos::domain::entities::video::VideoSummary;
use loop_videos::domain::errors::config_error::ConfigError;
use loop_videos::domain::errors::fetch_error::{FetchError, NetworkFailure};
use loop_videos::domain::ports::secondary::translation_loader::TranslationLoader;
use loop_videos::infrastructure::i18n::json_translation_loader::JsonTranslationLoader;
use std::collections::HashMap;
use std::time::Duration;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(key, value)| ((*key).to_string(), (*value).to_string()))
        .collect();
    move |key| map.get(key).cloned()
}

#[test]
fn test_settings_require_access_token() {
    let error = ApiSettings::from_lookup(lookup_from(&[])).unwrap_err();
    assert!(matches!(error, ConfigError::MissingVariable("LOOP_ACCESS_TOKEN")));

    let blank = ApiSettings::from_lookup(lookup_from(&[("LOOP_ACCESS_TOKEN", "   ")]));
    assert!(blank.is_err());
}

#[test]
fn test_settings_fall_back_to_defaults() {
    let settings = ApiSettings::from_lookup(lookup_from(&[("LOOP_ACCESS_TOKEN", " abc ")])).unwrap();

    assert_eq!(settings.access_token, "abc");
    assert_eq!(settings.base_url, "https://api.vimeo.com");
    assert_eq!(settings.timeout, Duration::from_secs(10));
    assert_eq!(settings.default_query, DEFAULT_SEARCH_QUERY);
}

#[test]
fn test_settings_read_overrides() {
    let settings = ApiSettings::from_lookup(lookup_from(&[
        ("LOOP_ACCESS_TOKEN", "abc"),
        ("LOOP_API_BASE_URL", "http://localhost:9000/"),
        ("LOOP_REQUEST_TIMEOUT_SECS", " 3 "),
        ("LOOP_DEFAULT_QUERY", "cats"),
    ]))
    .unwrap();

    assert_eq!(settings.base_url, "http://localhost:9000");
    assert_eq!(settings.timeout, Duration::from_secs(3));
    assert_eq!(settings.default_query, "cats");
}

#[test]
fn test_settings_reject_bad_timeouts() {
    let zero = ApiSettings::from_lookup(lookup_from(&[
        ("LOOP_ACCESS_TOKEN", "abc"),
        ("LOOP_REQUEST_TIMEOUT_SECS", "0"),
    ]))
    .unwrap_err();
    assert!(matches!(zero, ConfigError::NotPositive(_)));

    let garbage = ApiSettings::from_lookup(lookup_from(&[
        ("LOOP_ACCESS_TOKEN", "abc"),
        ("LOOP_REQUEST_TIMEOUT_SECS", "soon"),
    ]))
    .unwrap_err();
    assert!(matches!(
        garbage,
        ConfigError::InvalidNumber { ref value, .. } if value == "soon"
    ));
}

#[test]
fn test_status_classification() {
    assert_eq!(FetchError::from_status(500), FetchError::Server(500));
    assert_eq!(FetchError::from_status(503), FetchError::Server(503));
    assert_eq!(FetchError::from_status(404), FetchError::Client(404));
    assert_eq!(FetchError::from_status(302), FetchError::Client(302));
}

#[test]
fn test_error_info_messages() {
    let network = FetchError::Network(NetworkFailure::Timeout).error_info().unwrap();
    assert_eq!(network.kind, ErrorKind::Network);
    assert_eq!(
        network.message,
        "Can't load data.\nCheck your network connection."
    );
    assert!(network.is_retryable());

    let server = FetchError::Server(502).error_info().unwrap();
    assert_eq!(server.message, network.message);
    assert_eq!(server.status, Some(502));

    let client = FetchError::Client(403).error_info().unwrap();
    assert_eq!(
        client.message,
        "Can't load data.\nThe request was rejected (HTTP 403)."
    );
    assert!(!client.is_retryable());

    assert!(FetchError::Cancelled.error_info().is_none());
}

#[test]
fn test_visible_range_reaches_end() {
    // 30 rows of 72px, 800px viewport at the top: rows 0..12 visible.
    let top = VisibleRange::from_offset(0.0, 800.0, 72.0, 30);
    assert_eq!(top.first_visible, 0);
    assert_eq!(top.visible_count, 12);
    assert!(!top.reaches_end());

    let bottom = VisibleRange::from_offset(72.0 * 30.0 - 800.0, 800.0, 72.0, 30);
    assert!(bottom.reaches_end());

    let short_list = VisibleRange::from_offset(0.0, 800.0, 72.0, 5);
    assert!(short_list.reaches_end());

    let empty = VisibleRange::from_offset(0.0, 800.0, 72.0, 0);
    assert!(!empty.reaches_end());
}

#[test]
fn test_visible_range_survives_unbounded_viewport() {
    let unbounded = VisibleRange::from_offset(0.0, f32::INFINITY, 72.0, 30);
    assert_eq!(unbounded.visible_count, usize::MAX);
    assert!(unbounded.reaches_end());

    let scrolled = VisibleRange::from_offset(f32::INFINITY, f32::INFINITY, 72.0, 30);
    assert_eq!(scrolled.first_visible, 30);
    assert!(scrolled.reaches_end());

    let garbage = VisibleRange::from_offset(f32::NAN, f32::NAN, 72.0, 30);
    assert!(!garbage.reaches_end());
}

#[test]
fn test_list_phases() {
    let mut state = ListState::loading_initial();
    assert_eq!(state.phase(), ListPhase::LoadingInitial);
    assert!(!state.can_load_more());

    state.is_loading_initial = false;
    assert_eq!(state.phase(), ListPhase::Idle);
    assert!(state.can_load_more());

    state.error = FetchError::Server(500).error_info();
    assert_eq!(state.phase(), ListPhase::Error);
    assert!(!state.can_load_more());

    state.error = None;
    state.is_last_page = true;
    assert_eq!(state.phase(), ListPhase::Exhausted);
    assert!(state.is_empty_result());
}

#[test]
fn test_only_page_one_is_first() {
    let first = PageRequest::first(Query::new("cats"), 30);
    let second = PageRequest {
        page_number: 2,
        ..first.clone()
    };

    assert!(first.is_first());
    assert!(!second.is_first());
}

#[test]
fn test_query_sorting_keeps_term() {
    let query = Query::new("cats");
    assert_eq!(query.sort_field(), SortField::Relevant);
    assert_eq!(query.sort_order(), SortOrder::Descending);

    let sorted = query.clone().sorted_by(SortField::Duration, SortOrder::Ascending);
    assert_eq!(sorted.term(), "cats");
    assert_eq!(sorted.sort_field().api_value(), "duration");
    assert_eq!(sorted.sort_order().api_value(), "asc");
    assert_ne!(sorted, query);
}

#[test]
fn test_video_id_from_uri() {
    assert_eq!(VideoId::from_uri("/videos/123"), VideoId::from("123"));
    assert_eq!(VideoId::from_uri("/videos/123/").as_str(), "123");
    assert_eq!(VideoId::from_uri("123").to_string(), "123");
}

#[test]
fn test_formatted_duration() {
    let video = |seconds| VideoSummary {
        id: VideoId::from("1"),
        title: String::new(),
        thumbnail_url: None,
        duration: Duration::from_secs(seconds),
        uploaded_at: None,
        owner_name: None,
        plays: None,
        link: None,
    };

    assert_eq!(video(0).formatted_duration(), "0:00");
    assert_eq!(video(59).formatted_duration(), "0:59");
    assert_eq!(video(605).formatted_duration(), "10:05");
    assert_eq!(video(3_725).formatted_duration(), "1:02:05");
}

#[test]
fn test_language_from_locale() {
    assert_eq!(Language::from_locale("fr_FR.UTF-8"), Language::French);
    assert_eq!(Language::from_locale("fr-CA"), Language::French);
    assert_eq!(Language::from_locale("en_US.UTF-8"), Language::English);
    assert_eq!(Language::from_locale(""), Language::English);
    assert_eq!(Language::English.toggle(), Language::French);
    assert_eq!(Language::French.code(), "fr");
}

#[test]
fn test_translations_cover_the_same_keys() {
    let loader = JsonTranslationLoader;
    let english = loader.load_translations(Language::English);
    let french = loader.load_translations(Language::French);

    assert!(!english.is_empty());
    let mut english_keys: Vec<_> = english.keys().collect();
    let mut french_keys: Vec<_> = french.keys().collect();
    english_keys.sort();
    french_keys.sort();
    assert_eq!(english_keys, french_keys);

    assert_eq!(
        english.get("network_error").map(String::as_str),
        Some("Can't load data.\nCheck your network connection.")
    );
    for field in SortField::ALL {
        assert!(english.contains_key(field.translation_key()));
    }
    for order in SortOrder::ALL {
        assert!(french.contains_key(order.translation_key()));
    }
}
