/// Rating histogram.
///
/// Bins are equal-width over the full rating scale `[0.0, 5.0]` rather than
/// the data's own range, so bar positions stay put as filters change.
use crate::engine::FilteredView;
use crate::loader::{RATING_MAX, RATING_MIN};

/// Default bin count for the rating distribution chart.
pub const DEFAULT_BINS: usize = 10;

#[derive(Debug, Clone, PartialEq)]
pub struct HistogramBin {
    /// Inclusive lower edge.
    pub lower: f64,
    /// Exclusive upper edge (inclusive for the last bin).
    pub upper: f64,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Histogram {
    pub bins: Vec<HistogramBin>,
}

impl Histogram {
    pub fn max_count(&self) -> usize {
        self.bins.iter().map(|b| b.count).max().unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.bins.iter().map(|b| b.count).sum()
    }
}

/// Bucket the view's ratings into `bins` equal-width bins.
///
/// Returns a histogram with no bins when `bins == 0`. Rows without a rating
/// are skipped.
pub fn rating_histogram(view: &FilteredView<'_>, bins: usize) -> Histogram {
    if bins == 0 {
        return Histogram::default();
    }

    let width = (RATING_MAX - RATING_MIN) / bins as f64;
    let mut out: Vec<HistogramBin> = (0..bins)
        .map(|i| HistogramBin {
            lower: RATING_MIN + width * i as f64,
            upper: RATING_MIN + width * (i + 1) as f64,
            count: 0,
        })
        .collect();

    for rating in view.iter().filter_map(|r| r.rating) {
        // The top edge belongs to the last bin.
        let idx = (((rating - RATING_MIN) / width).floor() as usize).min(bins - 1);
        out[idx].count += 1;
    }

    Histogram { bins: out }
}
