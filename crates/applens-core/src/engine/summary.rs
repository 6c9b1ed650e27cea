/// One-line summary statistic for a filtered view.
use super::view::FilteredView;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Summary {
    /// Number of rows in the view.
    pub count: usize,

    /// Mean rating over rows that have one. Exactly `0.0` for an empty view
    /// (or a view where no row has a rating), never NaN.
    pub average_rating: f64,
}

impl Summary {
    /// The mean rounded to two decimals, as shown to the user.
    pub fn rounded_average(&self) -> f64 {
        (self.average_rating * 100.0).round() / 100.0
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Total Apps: {}, Average Rating: {:.2}",
            self.count, self.average_rating
        )
    }
}

/// Count the view and average its present ratings.
pub fn summarize(view: &FilteredView<'_>) -> Summary {
    let (sum, n) = view
        .iter()
        .filter_map(|r| r.rating)
        .fold((0.0_f64, 0usize), |(s, n), r| (s + r, n + 1));

    Summary {
        count: view.len(),
        average_rating: if n > 0 { sum / n as f64 } else { 0.0 },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{AppRecord, AppType};

    #[test]
    fn empty_view_is_zero_not_nan() {
        let s = summarize(&FilteredView::default());
        assert_eq!(s.count, 0);
        assert_eq!(s.average_rating, 0.0);
        assert!(!s.average_rating.is_nan());
        assert_eq!(s.to_string(), "Total Apps: 0, Average Rating: 0.00");
    }

    /// Rows without a rating are counted but do not affect the mean.
    #[test]
    fn mean_ignores_missing_ratings() {
        let records = [
            AppRecord::new("a", "GAME", Some(4.0), None, 0.0, AppType::Free),
            AppRecord::new("b", "GAME", None, None, 0.0, AppType::Free),
            AppRecord::new("c", "GAME", Some(3.0), None, 0.0, AppType::Free),
        ];
        let view = FilteredView::from_rows(records.iter().collect());
        let s = summarize(&view);
        assert_eq!(s.count, 3);
        assert_eq!(s.average_rating, 3.5);
    }

    #[test]
    fn view_without_any_rating_averages_zero() {
        let records = [AppRecord::new("a", "GAME", None, None, 0.0, AppType::Free)];
        let s = summarize(&FilteredView::from_rows(records.iter().collect()));
        assert_eq!(s.count, 1);
        assert_eq!(s.average_rating, 0.0);
    }

    #[test]
    fn display_rounds_to_two_decimals() {
        let s = Summary {
            count: 3,
            average_rating: 13.0 / 3.0,
        };
        assert_eq!(s.to_string(), "Total Apps: 3, Average Rating: 4.33");
        assert_eq!(s.rounded_average(), 4.33);
    }
}
