/// Filter criteria -- the user's current widget selections.
///
/// Each criterion is independently optional. An empty multi-select or an
/// empty search string imposes **no** restriction; it never means "match
/// nothing".
use crate::loader::{RATING_MAX, RATING_MIN};
use crate::model::{AppRecord, AppType};
use std::collections::BTreeSet;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub struct FilterCriteria {
    /// Allowed categories. Empty = all categories.
    pub categories: BTreeSet<String>,

    /// Allowed app types. Empty = both.
    pub types: BTreeSet<AppType>,

    /// Inclusive lower rating bound.
    pub rating_min: f64,

    /// Inclusive upper rating bound.
    pub rating_max: f64,

    /// Case-insensitive substring matched against the app name. Empty = any.
    pub search_text: String,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            categories: BTreeSet::new(),
            types: BTreeSet::new(),
            rating_min: RATING_MIN,
            rating_max: RATING_MAX,
            search_text: String::new(),
        }
    }
}

impl FilterCriteria {
    /// Criteria that match every row with a rating.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_categories<I, S>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.categories = categories.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_types<I>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = AppType>,
    {
        self.types = types.into_iter().collect();
        self
    }

    pub fn with_rating_range(mut self, min: f64, max: f64) -> Self {
        self.rating_min = min;
        self.rating_max = max;
        self
    }

    pub fn with_search(mut self, text: impl Into<String>) -> Self {
        self.search_text = text.into();
        self
    }

    pub fn matches_category(&self, record: &AppRecord) -> bool {
        self.categories.is_empty() || self.categories.contains(record.category.as_str())
    }

    pub fn matches_type(&self, record: &AppRecord) -> bool {
        self.types.is_empty() || self.types.contains(&record.app_type)
    }

    /// A missing rating compares false against both bounds, so rows without
    /// a rating never pass.
    pub fn matches_rating(&self, record: &AppRecord) -> bool {
        record
            .rating
            .is_some_and(|r| r >= self.rating_min && r <= self.rating_max)
    }

    pub fn matches_search(&self, record: &AppRecord) -> bool {
        self.search_text.is_empty()
            || contains_ignore_case(&record.app, &self.search_text.to_lowercase())
    }

    /// `true` when the record passes all four predicates.
    pub fn matches(&self, record: &AppRecord) -> bool {
        self.compile().matches(record)
    }

    /// Pre-lowercase the search needle for a pass over many rows.
    pub(crate) fn compile(&self) -> CompiledCriteria<'_> {
        CompiledCriteria {
            criteria: self,
            needle: self.search_text.to_lowercase(),
        }
    }
}

impl fmt::Display for FilterCriteria {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let types: Vec<&str> = self.types.iter().map(|t| t.label()).collect();
        write!(
            f,
            "categories={:?} types={:?} rating={}..={} search={:?}",
            self.categories, types, self.rating_min, self.rating_max, self.search_text
        )
    }
}

/// Criteria with the search needle lowercased once.
pub(crate) struct CompiledCriteria<'c> {
    criteria: &'c FilterCriteria,
    needle: String,
}

impl CompiledCriteria<'_> {
    pub(crate) fn matches(&self, record: &AppRecord) -> bool {
        self.criteria.matches_category(record)
            && self.criteria.matches_type(record)
            && self.criteria.matches_rating(record)
            && (self.needle.is_empty() || contains_ignore_case(&record.app, &self.needle))
    }
}

/// `needle` must already be lowercase.
fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}
