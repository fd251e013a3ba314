#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Language {
    #[default]
    English,
    French,
}

impl Language {
    /// Picks the language from a POSIX locale such as `fr_FR.UTF-8`.
    pub fn from_locale(locale: &str) -> Self {
        let code = locale
            .split(['_', '-', '.'])
            .next()
            .unwrap_or_default()
            .to_lowercase();
        match code.as_str() {
            "fr" | "french" => Language::French,
            _ => Language::English,
        }
    }

    pub const fn code(self) -> &'static str {
        match self {
            Language::English => "en",
            Language::French => "fr",
        }
    }

    pub const fn toggle(self) -> Self {
        match self {
            Language::English => Language::French,
            Language::French => Language::English,
        }
    }
}
