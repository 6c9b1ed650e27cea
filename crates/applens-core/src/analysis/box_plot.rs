/// Five-number summaries of rating per app type, for the box plot.
///
/// Quartiles use linear interpolation between closest ranks. Whiskers reach
/// the most extreme data points within 1.5 × IQR of the box; anything beyond
/// is reported as an outlier.
use crate::engine::FilteredView;
use crate::model::AppType;

/// Whisker reach as a multiple of the inter-quartile range.
const WHISKER_IQR: f64 = 1.5;

#[derive(Debug, Clone, PartialEq)]
pub struct BoxStats {
    pub app_type: AppType,
    pub count: usize,
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
    pub lower_whisker: f64,
    pub upper_whisker: f64,
    /// Values outside the whiskers, ascending.
    pub outliers: Vec<f64>,
}

/// One box per app type present in the view, `Free` before `Paid`.
/// Types with no rated rows are omitted.
pub fn rating_box_by_type(view: &FilteredView<'_>) -> Vec<BoxStats> {
    AppType::ALL
        .iter()
        .filter_map(|&app_type| {
            let mut ratings: Vec<f64> = view
                .iter()
                .filter(|r| r.app_type == app_type)
                .filter_map(|r| r.rating)
                .collect();
            box_stats(app_type, &mut ratings)
        })
        .collect()
}

fn box_stats(app_type: AppType, values: &mut [f64]) -> Option<BoxStats> {
    if values.is_empty() {
        return None;
    }
    values.sort_by(f64::total_cmp);

    let q1 = quantile(values, 0.25);
    let median = quantile(values, 0.5);
    let q3 = quantile(values, 0.75);
    let reach = WHISKER_IQR * (q3 - q1);
    let (lo_fence, hi_fence) = (q1 - reach, q3 + reach);

    let inside = |v: &f64| *v >= lo_fence && *v <= hi_fence;
    let lower_whisker = values.iter().copied().find(inside).unwrap_or(q1);
    let upper_whisker = values.iter().rev().copied().find(inside).unwrap_or(q3);
    let outliers = values
        .iter()
        .copied()
        .filter(|v| *v < lo_fence || *v > hi_fence)
        .collect();

    Some(BoxStats {
        app_type,
        count: values.len(),
        min: values[0],
        q1,
        median,
        q3,
        max: values[values.len() - 1],
        lower_whisker,
        upper_whisker,
        outliers,
    })
}

/// Linear-interpolated quantile of a sorted, non-empty slice.
fn quantile(sorted: &[f64], q: f64) -> f64 {
    let pos = q * (sorted.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    sorted[lo] + (sorted[hi] - sorted[lo]) * (pos - lo as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::AppRecord;

    fn free(rating: f64) -> AppRecord {
        AppRecord::new("x", "GAME", Some(rating), None, 0.0, AppType::Free)
    }

    #[test]
    fn quartiles_of_one_to_five() {
        let records: Vec<AppRecord> = [5.0, 1.0, 3.0, 2.0, 4.0].into_iter().map(free).collect();
        let boxes = rating_box_by_type(&FilteredView::from_rows(records.iter().collect()));

        assert_eq!(boxes.len(), 1);
        let b = &boxes[0];
        assert_eq!(b.app_type, AppType::Free);
        assert_eq!(b.count, 5);
        assert_eq!((b.min, b.q1, b.median, b.q3, b.max), (1.0, 2.0, 3.0, 4.0, 5.0));
        assert_eq!((b.lower_whisker, b.upper_whisker), (1.0, 5.0));
        assert!(b.outliers.is_empty());
    }

    #[test]
    fn interpolates_between_ranks() {
        let mut v = [1.0, 2.0, 3.0, 4.0];
        let b = box_stats(AppType::Paid, &mut v).unwrap();
        assert_eq!(b.q1, 1.75);
        assert_eq!(b.median, 2.5);
        assert_eq!(b.q3, 3.25);
    }

    #[test]
    fn far_value_is_an_outlier() {
        let records: Vec<AppRecord> = [4.0, 4.1, 4.2, 4.3, 1.0].into_iter().map(free).collect();
        let boxes = rating_box_by_type(&FilteredView::from_rows(records.iter().collect()));
        let b = &boxes[0];
        assert_eq!(b.outliers, [1.0]);
        assert_eq!(b.lower_whisker, 4.0);
        assert_eq!(b.upper_whisker, 4.3);
        assert_eq!(b.min, 1.0);
    }

    #[test]
    fn one_box_per_present_type_free_first() {
        let records = [
            AppRecord::new("p", "GAME", Some(3.0), None, 1.0, AppType::Paid),
            AppRecord::new("f", "GAME", Some(4.0), None, 0.0, AppType::Free),
            AppRecord::new("u", "GAME", None, None, 1.0, AppType::Paid),
        ];
        let boxes = rating_box_by_type(&FilteredView::from_rows(records.iter().collect()));
        let types: Vec<AppType> = boxes.iter().map(|b| b.app_type).collect();
        assert_eq!(types, [AppType::Free, AppType::Paid]);
        assert_eq!(boxes[1].count, 1);
    }

    #[test]
    fn empty_view_has_no_boxes() {
        assert!(rating_box_by_type(&FilteredView::default()).is_empty());
    }
}
