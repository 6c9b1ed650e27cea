/// Filter-aggregate engine -- the single piece of logic every dashboard
/// front end shares.
///
/// A presentation layer builds a [`FilterCriteria`] from its widgets and
/// calls [`evaluate`], receiving the filtered rows, the summary line and the
/// pivot table. All functions are pure: the same inputs always produce the
/// same outputs, and the dataset is only ever borrowed immutably, so one
/// `Arc<Dataset>` can serve any number of concurrent requests.
pub mod criteria;
pub mod pivot;
pub mod summary;
pub mod view;

pub use criteria::FilterCriteria;
pub use pivot::{aggregate, AggregationRow};
pub use summary::{summarize, Summary};
pub use view::FilteredView;

use crate::model::Dataset;
use tracing::debug;

/// Select the rows of `dataset` that satisfy every criterion, in file order.
pub fn filter<'a>(dataset: &'a Dataset, criteria: &FilterCriteria) -> FilteredView<'a> {
    let view = FilteredView::from_records(dataset.records(), criteria);
    debug!(
        "Filter matched {} of {} apps ({criteria})",
        view.len(),
        dataset.len()
    );
    view
}

/// The full result of one interaction: rows, summary line and pivot table.
#[derive(Debug, Clone)]
pub struct Evaluation<'a> {
    pub view: FilteredView<'a>,
    pub summary: Summary,
    pub pivot: Vec<AggregationRow>,
}

/// Run one complete filter → summarize → aggregate pass.
pub fn evaluate<'a>(dataset: &'a Dataset, criteria: &FilterCriteria) -> Evaluation<'a> {
    let view = filter(dataset, criteria);
    let summary = summarize(&view);
    let pivot = aggregate(&view);
    Evaluation {
        view,
        summary,
        pivot,
    }
}
