/// Per-category install totals for the bar chart.
///
/// Categories keep the order in which they first appear in the view, which
/// is the order the bars are drawn in.
use crate::engine::FilteredView;
use compact_str::CompactString;
use std::collections::HashMap;

/// Install total and app count for one category.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTotal {
    pub category: CompactString,
    pub total_installs: u64,
    pub app_count: usize,
}

/// Sum installs per category. Missing installs count as zero.
pub fn installs_by_category(view: &FilteredView<'_>) -> Vec<CategoryTotal> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut totals: Vec<CategoryTotal> = Vec::new();

    for record in view.iter() {
        let slot = *index.entry(record.category.as_str()).or_insert_with(|| {
            totals.push(CategoryTotal {
                category: record.category.clone(),
                total_installs: 0,
                app_count: 0,
            });
            totals.len() - 1
        });
        let entry = &mut totals[slot];
        entry.total_installs = entry
            .total_installs
            .saturating_add(record.installs.unwrap_or(0));
        entry.app_count += 1;
    }

    totals
}

/// Largest total in the list, or 0 when empty. Used to scale bar heights.
pub fn max_total(totals: &[CategoryTotal]) -> u64 {
    totals.iter().map(|t| t.total_installs).max().unwrap_or(0)
}
