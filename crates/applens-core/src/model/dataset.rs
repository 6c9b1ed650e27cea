/// The immutable, session-wide app dataset.
///
/// Loaded once at startup and shared read-only (typically as
/// `Arc<Dataset>`) between every presentation layer. Nothing mutates it
/// after construction; filtering produces borrowed views.
use super::record::AppRecord;
use compact_str::CompactString;
use std::collections::HashSet;

#[derive(Debug, Clone, Default)]
pub struct Dataset {
    records: Vec<AppRecord>,

    /// Distinct category labels in first-seen order. Populates the category
    /// multi-select.
    categories: Vec<CompactString>,
}

impl Dataset {
    /// Build a dataset from already-parsed records.
    pub fn from_records(records: Vec<AppRecord>) -> Self {
        let mut seen: HashSet<&str> = HashSet::new();
        let mut categories = Vec::new();
        for record in &records {
            if seen.insert(record.category.as_str()) {
                categories.push(record.category.clone());
            }
        }
        Self {
            records,
            categories,
        }
    }

    /// All records in file order.
    #[inline]
    pub fn records(&self) -> &[AppRecord] {
        &self.records
    }

    /// Distinct categories in first-seen order.
    #[inline]
    pub fn categories(&self) -> &[CompactString] {
        &self.categories
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::AppType;

    #[test]
    fn categories_are_distinct_in_first_seen_order() {
        let ds = Dataset::from_records(vec![
            AppRecord::new("a", "TOOLS", Some(4.0), Some(10), 0.0, AppType::Free),
            AppRecord::new("b", "GAME", Some(4.0), Some(10), 0.0, AppType::Free),
            AppRecord::new("c", "TOOLS", Some(4.0), Some(10), 0.0, AppType::Free),
            AppRecord::new("d", "ART", Some(4.0), Some(10), 0.0, AppType::Free),
        ]);
        let cats: Vec<&str> = ds.categories().iter().map(|c| c.as_str()).collect();
        assert_eq!(cats, ["TOOLS", "GAME", "ART"]);
        assert_eq!(ds.len(), 4);
    }

    #[test]
    fn empty_dataset_has_no_categories() {
        let ds = Dataset::from_records(Vec::new());
        assert!(ds.is_empty());
        assert!(ds.categories().is_empty());
    }
}
