use std::fmt;

use super::Restaurant;

/// Active grid filter: either no restriction or a single tag.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum TagFilter {
    #[default]
    All,
    Tag(String),
}

impl TagFilter {
    /// Value the "show all" control carries, and the value `default_tag` uses for it.
    pub const ALL_VALUE: &'static str = "All";

    pub fn from_value(value: &str) -> Self {
        if value == Self::ALL_VALUE {
            TagFilter::All
        } else {
            TagFilter::Tag(value.to_string())
        }
    }

    pub fn value(&self) -> &str {
        match self {
            TagFilter::All => Self::ALL_VALUE,
            TagFilter::Tag(tag) => tag,
        }
    }

    /// Case-sensitive exact match against the full tag sequence, not just the displayed tags.
    pub fn matches(&self, restaurant: &Restaurant) -> bool {
        match self {
            TagFilter::All => true,
            TagFilter::Tag(tag) => restaurant.has_tag(tag),
        }
    }
}

impl fmt::Display for TagFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.value())
    }
}

impl From<&str> for TagFilter {
    fn from(value: &str) -> Self {
        TagFilter::from_value(value)
    }
}
