/// A filtered, order-preserving view over the dataset.
///
/// Holds borrowed references into the dataset's record vector, so building
/// a view never clones app data and the dataset stays untouched.
use super::criteria::FilterCriteria;
use crate::model::{AppRecord, Dataset};

#[derive(Debug, Clone, Default)]
pub struct FilteredView<'a> {
    rows: Vec<&'a AppRecord>,
}

impl<'a> FilteredView<'a> {
    /// A view containing every record of `dataset`, unfiltered.
    pub fn all(dataset: &'a Dataset) -> Self {
        Self {
            rows: dataset.records().iter().collect(),
        }
    }

    /// Build a view from an explicit row list (kept in the given order).
    pub fn from_rows(rows: Vec<&'a AppRecord>) -> Self {
        Self { rows }
    }

    pub(crate) fn from_records<I>(records: I, criteria: &FilterCriteria) -> Self
    where
        I: IntoIterator<Item = &'a AppRecord>,
    {
        let compiled = criteria.compile();
        Self {
            rows: records.into_iter().filter(|r| compiled.matches(r)).collect(),
        }
    }

    /// Apply `criteria` again to the rows of this view.
    ///
    /// Refining with the criteria that produced the view returns the same
    /// rows.
    pub fn refine(&self, criteria: &FilterCriteria) -> FilteredView<'a> {
        Self::from_records(self.rows.iter().copied(), criteria)
    }

    pub fn rows(&self) -> &[&'a AppRecord] {
        &self.rows
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a AppRecord> + '_ {
        self.rows.iter().copied()
    }

    /// Clone the rows out of the view.
    pub fn to_records(&self) -> Vec<AppRecord> {
        self.rows.iter().map(|r| (*r).clone()).collect()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
