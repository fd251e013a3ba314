use std::fmt::{Display, Formatter, Result};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SortField {
    #[default]
    Relevant,
    Date,
    Alphabetical,
    Plays,
    Likes,
    Comments,
    Duration,
}

impl SortField {
    pub const ALL: [SortField; 7] = [
        SortField::Relevant,
        SortField::Date,
        SortField::Alphabetical,
        SortField::Plays,
        SortField::Likes,
        SortField::Comments,
        SortField::Duration,
    ];

    /// Value of the `sort` parameter understood by the API.
    pub const fn api_value(self) -> &'static str {
        match self {
            SortField::Relevant => "relevant",
            SortField::Date => "date",
            SortField::Alphabetical => "alphabetical",
            SortField::Plays => "plays",
            SortField::Likes => "likes",
            SortField::Comments => "comments",
            SortField::Duration => "duration",
        }
    }

    pub const fn translation_key(self) -> &'static str {
        match self {
            SortField::Relevant => "sort_relevant",
            SortField::Date => "sort_date",
            SortField::Alphabetical => "sort_alphabetical",
            SortField::Plays => "sort_plays",
            SortField::Likes => "sort_likes",
            SortField::Comments => "sort_comments",
            SortField::Duration => "sort_duration",
        }
    }
}

impl Display for SortField {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.write_str(self.api_value())
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SortOrder {
    Ascending,
    #[default]
    Descending,
}

impl SortOrder {
    pub const ALL: [SortOrder; 2] = [SortOrder::Ascending, SortOrder::Descending];

    /// Value of the `direction` parameter understood by the API.
    pub const fn api_value(self) -> &'static str {
        match self {
            SortOrder::Ascending => "asc",
            SortOrder::Descending => "desc",
        }
    }

    pub const fn translation_key(self) -> &'static str {
        match self {
            SortOrder::Ascending => "order_ascending",
            SortOrder::Descending => "order_descending",
        }
    }
}

impl Display for SortOrder {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.write_str(self.api_value())
    }
}

/// Search term plus sort parameters. Two equal queries describe the same result set.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Query {
    term: String,
    sort_field: SortField,
    sort_order: SortOrder,
}

impl Query {
    pub fn new(term: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            sort_field: SortField::default(),
            sort_order: SortOrder::default(),
        }
    }

    #[must_use]
    pub fn sorted_by(self, sort_field: SortField, sort_order: SortOrder) -> Self {
        Self {
            sort_field,
            sort_order,
            ..self
        }
    }

    pub fn term(&self) -> &str {
        &self.term
    }

    pub const fn sort_field(&self) -> SortField {
        self.sort_field
    }

    pub const fn sort_order(&self) -> SortOrder {
        self.sort_order
    }
}

impl Display for Query {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(
            f,
            "{:?} sorted by {} {}",
            self.term, self.sort_field, self.sort_order
        )
    }
}
