/// Pivot table -- mean rating and total installs per (Category, Type).
use super::view::FilteredView;
use crate::model::AppType;
use compact_str::CompactString;
use serde::Serialize;
use std::collections::BTreeMap;

/// One group of the pivot table.
///
/// Serialises with the column names shown in the dashboard table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregationRow {
    #[serde(rename = "Category")]
    pub category: CompactString,

    #[serde(rename = "Type")]
    pub app_type: AppType,

    /// `None` when no row in the group has a rating.
    #[serde(rename = "Average Rating")]
    pub average_rating: Option<f64>,

    #[serde(rename = "Total Installs")]
    pub total_installs: u64,
}

#[derive(Default)]
struct GroupAcc {
    rating_sum: f64,
    rating_count: usize,
    installs: u64,
}

/// Group the view by (Category, Type), sorted ascending by that key.
///
/// Missing ratings are left out of the mean and missing installs add
/// nothing to the sum. An empty view yields an empty table.
pub fn aggregate(view: &FilteredView<'_>) -> Vec<AggregationRow> {
    let mut groups: BTreeMap<(&str, AppType), GroupAcc> = BTreeMap::new();

    for record in view.iter() {
        let acc = groups
            .entry((record.category.as_str(), record.app_type))
            .or_default();
        if let Some(r) = record.rating {
            acc.rating_sum += r;
            acc.rating_count += 1;
        }
        acc.installs = acc.installs.saturating_add(record.installs.unwrap_or(0));
    }

    groups
        .into_iter()
        .map(|((category, app_type), acc)| AggregationRow {
            category: CompactString::new(category),
            app_type,
            average_rating: (acc.rating_count > 0)
                .then(|| acc.rating_sum / acc.rating_count as f64),
            total_installs: acc.installs,
        })
        .collect()
}
