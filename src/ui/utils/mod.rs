pub mod format_date_time;
pub mod translation;
