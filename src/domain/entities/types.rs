use std::fmt::{Display, Formatter, Result};

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct VideoId(pub String);

impl VideoId {
    /// Extracts the id from a resource uri such as `/videos/76979871`.
    pub fn from_uri(uri: &str) -> Self {
        let id = uri
            .trim_end_matches('/')
            .rsplit('/')
            .next()
            .unwrap_or_default();
        VideoId(id.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for VideoId {
    fn from(value: &str) -> Self {
        VideoId(value.to_string())
    }
}

impl Display for VideoId {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.write_str(&self.0)
    }
}
