use crate::domain::entities::language::Language;
use chrono::{DateTime, Utc};

pub fn format_date_time(date_time: DateTime<Utc>, language: Language) -> String {
    date_time
        .format(match language {
            Language::English => "%Y-%m-%d %H:%M",
            Language::French => "%d/%m/%Y %H:%M",
        })
        .to_string()
}
