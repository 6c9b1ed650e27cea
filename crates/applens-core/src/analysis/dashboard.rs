/// Everything a dashboard renders for one filter pass, as owned data.
///
/// Presentation layers keep this between interactions instead of holding a
/// borrowed [`FilteredView`], so they never need to tie their own state to
/// the dataset's lifetime.
use super::box_plot::{rating_box_by_type, BoxStats};
use super::category_totals::{installs_by_category, CategoryTotal};
use super::histogram::{rating_histogram, Histogram, DEFAULT_BINS};
use super::scatter::{scatter, Scatter, XAxis};
use crate::engine::{AggregationRow, Evaluation, FilteredView, Summary};

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardData {
    pub summary: Summary,
    pub pivot: Vec<AggregationRow>,
    pub rating_histogram: Histogram,
    pub installs_vs_rating: Scatter,
    pub price_vs_rating: Scatter,
    pub rating_by_type: Vec<BoxStats>,
    pub installs_by_category: Vec<CategoryTotal>,
}

impl DashboardData {
    /// Build chart data on top of an engine pass.
    pub fn from_evaluation(eval: &Evaluation<'_>) -> Self {
        Self::with_engine_results(&eval.view, eval.summary, eval.pivot.clone())
    }

    /// Build everything, including summary and pivot, from a view.
    pub fn compute(view: &FilteredView<'_>) -> Self {
        Self::with_engine_results(
            view,
            crate::engine::summarize(view),
            crate::engine::aggregate(view),
        )
    }

    fn with_engine_results(
        view: &FilteredView<'_>,
        summary: Summary,
        pivot: Vec<AggregationRow>,
    ) -> Self {
        Self {
            summary,
            pivot,
            rating_histogram: rating_histogram(view, DEFAULT_BINS),
            installs_vs_rating: scatter(view, XAxis::Installs),
            price_vs_rating: scatter(view, XAxis::Price),
            rating_by_type: rating_box_by_type(view),
            installs_by_category: installs_by_category(view),
        }
    }

    /// `true` when the filter matched nothing; callers show a no-data notice
    /// instead of empty charts.
    pub fn is_empty(&self) -> bool {
        self.summary.count == 0
    }
}
