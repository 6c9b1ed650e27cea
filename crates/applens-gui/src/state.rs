/// Application state management.
///
/// Centralises all mutable state that the UI reads and writes. Widgets never
/// touch the dataset directly: they change the filter selections through the
/// setter methods, which mark the state dirty, and `refresh()` re-runs the
/// engine once per frame when something changed.
///
/// The dataset itself is an injected, read-only `Arc<Dataset>`; everything
/// derived from it is held as owned [`DashboardData`].
use crate::column_filter::ColumnQuery;
use anyhow::Context;
use applens_core::analysis::DashboardData;
use applens_core::engine::{evaluate, filter, AggregationRow, FilterCriteria, FilteredView};
use applens_core::export::{export_file_name, write_pivot_json, write_view_csv};
use applens_core::loader::{RATING_MAX, RATING_MIN};
use applens_core::model::{AppType, Dataset};
use compact_str::CompactString;
use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Rows per page of the pivot table.
pub const PIVOT_PAGE_SIZE: usize = 10;

/// Granularity of the rating range sliders.
pub const RATING_STEP: f64 = 0.1;

/// Initial widget state the dashboard opens with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    /// First category and `Free` pre-selected.
    Sidebar,
    /// Nothing pre-selected: every app with a rating is shown.
    Open,
}

/// A pivot table column the user can sort and filter by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PivotColumn {
    Category,
    Type,
    AverageRating,
    TotalInstalls,
}

impl PivotColumn {
    pub const ALL: [PivotColumn; 4] = [
        PivotColumn::Category,
        PivotColumn::Type,
        PivotColumn::AverageRating,
        PivotColumn::TotalInstalls,
    ];

    /// Position in [`PivotColumn::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// Numeric columns take comparisons; the others take text.
    pub fn is_numeric(self) -> bool {
        matches!(self, Self::AverageRating | Self::TotalInstalls)
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Category => "Category",
            Self::Type => "Type",
            Self::AverageRating => "Average Rating",
            Self::TotalInstalls => "Total Installs",
        }
    }

    fn compare(self, a: &AggregationRow, b: &AggregationRow) -> Ordering {
        match self {
            Self::Category => a.category.cmp(&b.category),
            Self::Type => a.app_type.cmp(&b.app_type),
            // Groups without a rating sort before every rated group.
            Self::AverageRating => match (a.average_rating, b.average_rating) {
                (Some(x), Some(y)) => x.total_cmp(&y),
                (None, Some(_)) => Ordering::Less,
                (Some(_), None) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            },
            Self::TotalInstalls => a.total_installs.cmp(&b.total_installs),
        }
    }

    /// Parse a filter typed for this column. Malformed numeric queries are
    /// `None` and filter nothing.
    fn parse_query(self, text: &str) -> Option<ColumnQuery> {
        if self.is_numeric() {
            ColumnQuery::parse_numeric(text)
        } else {
            Some(ColumnQuery::parse_text(text))
        }
    }

    fn matches(self, query: &ColumnQuery, row: &AggregationRow) -> bool {
        match self {
            Self::Category => query.matches_text(&row.category),
            Self::Type => query.matches_text(row.app_type.label()),
            // Compared as shown in the table, to two decimals.
            Self::AverageRating => {
                query.matches_number(row.average_rating.map(|r| (r * 100.0).round() / 100.0))
            }
            Self::TotalInstalls => query.matches_number(Some(row.total_installs as f64)),
        }
    }
}

/// Active pivot sort. No sort means engine order (Category, Type).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PivotSort {
    pub column: PivotColumn,
    pub ascending: bool,
}

/// Identifies one pivot row independently of its on-screen position.
pub type PivotKey = (CompactString, AppType);

/// Result of the last export attempt, shown in the status bar.
#[derive(Debug, Clone, PartialEq)]
pub enum ExportStatus {
    Saved {
        csv: PathBuf,
        json: PathBuf,
        rows: usize,
    },
    Failed(String),
}

/// Paths written by one export.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportedFiles {
    pub csv: PathBuf,
    pub json: PathBuf,
    pub rows: usize,
}

/// All application state.
pub struct AppState {
    // ── Data ───────────────────────────────────────────
    dataset: Arc<Dataset>,
    /// Where the dataset came from, for display.
    pub source: String,

    // ── Filter widgets ─────────────────────────────────
    pub selected_categories: BTreeSet<String>,
    pub selected_types: BTreeSet<AppType>,
    pub rating_min: f64,
    pub rating_max: f64,
    pub search_text: String,
    /// Narrows the category list; not part of the filter.
    pub category_query: String,

    // ── Derived ────────────────────────────────────────
    dashboard: DashboardData,
    dirty: bool,
    /// Wall time of the most recent engine pass.
    pub last_refresh: Option<Duration>,

    // ── Pivot table ────────────────────────────────────
    pub pivot_sort: Option<PivotSort>,
    pub pivot_page: usize,
    pub pivot_selected: Option<PivotKey>,
    /// Column filter text, indexed like `PivotColumn::ALL`.
    pivot_filters: [String; 4],

    // ── UI state ───────────────────────────────────────
    /// `true` = dark mode (default), `false` = light mode.
    pub dark_mode: bool,
    pub show_about: bool,
    /// Directory export files are written into.
    pub export_dir: PathBuf,
    pub last_export: Option<ExportStatus>,
}

impl AppState {
    /// Create state over `dataset` with the widgets set up as `preset`
    /// describes. The dashboard is computed before this returns.
    pub fn new(dataset: Arc<Dataset>, source: impl Into<String>, preset: Preset) -> Self {
        let mut state = Self {
            dataset,
            source: source.into(),
            selected_categories: BTreeSet::new(),
            selected_types: BTreeSet::new(),
            rating_min: RATING_MIN,
            rating_max: RATING_MAX,
            search_text: String::new(),
            category_query: String::new(),
            dashboard: DashboardData::compute(&FilteredView::default()),
            dirty: true,
            last_refresh: None,
            pivot_sort: None,
            pivot_page: 0,
            pivot_selected: None,
            pivot_filters: Default::default(),
            dark_mode: true,
            show_about: false,
            export_dir: PathBuf::from("."),
            last_export: None,
        };

        if preset == Preset::Sidebar {
            if let Some(first) = state.dataset.categories().first() {
                state.selected_categories.insert(first.to_string());
            }
            state.selected_types.insert(AppType::Free);
        }

        state.refresh();
        state
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// The engine input described by the current widget values.
    pub fn criteria(&self) -> FilterCriteria {
        FilterCriteria::new()
            .with_categories(self.selected_categories.iter().cloned())
            .with_types(self.selected_types.iter().copied())
            .with_rating_range(self.rating_min, self.rating_max)
            .with_search(self.search_text.clone())
    }

    /// Derived data for the current selections, as of the last refresh.
    pub fn dashboard(&self) -> &DashboardData {
        &self.dashboard
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    // ── Filter setters ─────────────────────────────────

    pub fn toggle_category(&mut self, category: &str) {
        if !self.selected_categories.remove(category) {
            self.selected_categories.insert(category.to_string());
        }
        self.dirty = true;
    }

    pub fn clear_categories(&mut self) {
        if !self.selected_categories.is_empty() {
            self.selected_categories.clear();
            self.dirty = true;
        }
    }

    pub fn toggle_type(&mut self, app_type: AppType) {
        if !self.selected_types.remove(&app_type) {
            self.selected_types.insert(app_type);
        }
        self.dirty = true;
    }

    /// Set the rating range, clamped to the valid scale. Bounds given in
    /// the wrong order are swapped.
    pub fn set_rating_range(&mut self, min: f64, max: f64) {
        let min = min.clamp(RATING_MIN, RATING_MAX);
        let max = max.clamp(RATING_MIN, RATING_MAX);
        let (min, max) = if min <= max { (min, max) } else { (max, min) };
        if (min, max) != (self.rating_min, self.rating_max) {
            self.rating_min = min;
            self.rating_max = max;
            self.dirty = true;
        }
    }

    pub fn set_search(&mut self, text: &str) {
        if self.search_text != text {
            self.search_text = text.to_string();
            self.dirty = true;
        }
    }

    /// Back to the unrestricted view.
    pub fn reset_filters(&mut self) {
        self.selected_categories.clear();
        self.selected_types.clear();
        self.rating_min = RATING_MIN;
        self.rating_max = RATING_MAX;
        self.search_text.clear();
        self.pivot_filters = Default::default();
        self.dirty = true;
    }

    /// Categories for the multi-select list, in dataset order, narrowed by
    /// `category_query`.
    pub fn visible_categories(&self) -> Vec<&CompactString> {
        let query = self.category_query.trim().to_lowercase();
        self.dataset
            .categories()
            .iter()
            .filter(|c| query.is_empty() || c.to_lowercase().contains(&query))
            .collect()
    }

    // ── Engine pass ────────────────────────────────────

    /// Re-run the engine if any selection changed since the last pass.
    /// Returns `true` if the dashboard was rebuilt.
    pub fn refresh(&mut self) -> bool {
        if !self.dirty {
            return false;
        }
        let start = Instant::now();
        let criteria = self.criteria();
        let eval = evaluate(&self.dataset, &criteria);
        self.dashboard = DashboardData::from_evaluation(&eval);
        self.dirty = false;

        let elapsed = start.elapsed();
        self.last_refresh = Some(elapsed);
        tracing::debug!(
            "Dashboard refreshed: {} apps, {} groups in {:?}",
            self.dashboard.summary.count,
            self.dashboard.pivot.len(),
            elapsed
        );

        // The old page and selection may not exist in the new result.
        self.pivot_page = 0;
        if let Some(ref key) = self.pivot_selected {
            if self.find_pivot_row(key).is_none() {
                self.pivot_selected = None;
            }
        }
        true
    }

    // ── Pivot table ────────────────────────────────────

    /// Sort by `column`; a second click on the same column flips the order.
    pub fn sort_pivot_by(&mut self, column: PivotColumn) {
        self.pivot_sort = match self.pivot_sort {
            Some(s) if s.column == column => Some(PivotSort {
                column,
                ascending: !s.ascending,
            }),
            _ => Some(PivotSort {
                column,
                ascending: true,
            }),
        };
        self.pivot_page = 0;
    }

    pub fn pivot_filter(&self, column: PivotColumn) -> &str {
        &self.pivot_filters[column.index()]
    }

    /// Change one column filter. The table goes back to its first page.
    pub fn set_pivot_filter(&mut self, column: PivotColumn, text: &str) {
        let slot = &mut self.pivot_filters[column.index()];
        if *slot != text {
            *slot = text.to_string();
            self.pivot_page = 0;
        }
    }

    pub fn clear_pivot_filters(&mut self) {
        self.pivot_filters = Default::default();
        self.pivot_page = 0;
    }

    /// `false` when the column's filter text cannot be parsed.
    pub fn pivot_filter_is_valid(&self, column: PivotColumn) -> bool {
        column.parse_query(self.pivot_filter(column)).is_some()
    }

    pub fn has_pivot_filters(&self) -> bool {
        self.pivot_filters.iter().any(|f| !f.trim().is_empty())
    }

    /// Pivot rows passing every column filter, in engine order.
    pub fn filtered_pivot(&self) -> Vec<&AggregationRow> {
        let queries: Vec<(PivotColumn, ColumnQuery)> = PivotColumn::ALL
            .into_iter()
            .filter_map(|c| c.parse_query(self.pivot_filter(c)).map(|q| (c, q)))
            .filter(|(_, q)| *q != ColumnQuery::Any)
            .collect();
        self.dashboard
            .pivot
            .iter()
            .filter(|row| queries.iter().all(|(c, q)| c.matches(q, row)))
            .collect()
    }

    /// Filtered pivot rows in display order.
    pub fn sorted_pivot(&self) -> Vec<&AggregationRow> {
        let mut rows = self.filtered_pivot();
        if let Some(sort) = self.pivot_sort {
            rows.sort_by(|a, b| {
                let ord = sort.column.compare(a, b);
                if sort.ascending {
                    ord
                } else {
                    ord.reverse()
                }
            });
        }
        rows
    }

    pub fn pivot_page_count(&self) -> usize {
        self.filtered_pivot().len().div_ceil(PIVOT_PAGE_SIZE).max(1)
    }

    /// The rows on the current page.
    pub fn pivot_page_rows(&self) -> Vec<&AggregationRow> {
        self.sorted_pivot()
            .into_iter()
            .skip(self.pivot_page * PIVOT_PAGE_SIZE)
            .take(PIVOT_PAGE_SIZE)
            .collect()
    }

    pub fn next_pivot_page(&mut self) {
        if self.pivot_page + 1 < self.pivot_page_count() {
            self.pivot_page += 1;
        }
    }

    pub fn prev_pivot_page(&mut self) {
        self.pivot_page = self.pivot_page.saturating_sub(1);
    }

    /// Select a single row; selecting the selected row clears it.
    pub fn select_pivot_row(&mut self, row: &AggregationRow) {
        let key = (row.category.clone(), row.app_type);
        if self.pivot_selected.as_ref() == Some(&key) {
            self.pivot_selected = None;
        } else {
            self.pivot_selected = Some(key);
        }
    }

    pub fn is_pivot_selected(&self, row: &AggregationRow) -> bool {
        self.pivot_selected
            .as_ref()
            .is_some_and(|(c, t)| *c == row.category && *t == row.app_type)
    }

    pub fn selected_pivot_row(&self) -> Option<&AggregationRow> {
        self.pivot_selected
            .as_ref()
            .and_then(|key| self.find_pivot_row(key))
    }

    fn find_pivot_row(&self, key: &PivotKey) -> Option<&AggregationRow> {
        self.dashboard
            .pivot
            .iter()
            .find(|r| r.category == key.0 && r.app_type == key.1)
    }

    // ── Export ─────────────────────────────────────────

    /// Export the current result into `export_dir` and record the outcome
    /// for the status bar. Returns `true` on success.
    pub fn export(&mut self) -> bool {
        self.refresh();
        let now = chrono::Local::now();
        let status = match self.write_exports(&self.export_dir, &now) {
            Ok(files) => {
                tracing::info!(
                    "Exported {} rows to {} and {}",
                    files.rows,
                    files.csv.display(),
                    files.json.display()
                );
                ExportStatus::Saved {
                    csv: files.csv,
                    json: files.json,
                    rows: files.rows,
                }
            }
            Err(e) => {
                tracing::warn!("Export failed: {:#}", e);
                ExportStatus::Failed(format!("{:#}", e))
            }
        };
        let ok = matches!(status, ExportStatus::Saved { .. });
        self.last_export = Some(status);
        ok
    }

    /// Write the filtered rows as CSV and the pivot table as JSON into `dir`,
    /// with file names stamped from `now`. Either both files are written or
    /// neither is left behind.
    pub fn write_exports(
        &self,
        dir: &Path,
        now: &chrono::DateTime<chrono::Local>,
    ) -> anyhow::Result<ExportedFiles> {
        let csv_path = dir.join(export_file_name("filtered", "csv", now));
        let json_path = dir.join(export_file_name("pivot", "json", now));

        let mut created: Vec<&Path> = Vec::with_capacity(2);
        match self.write_export_pair(&csv_path, &json_path, &mut created) {
            Ok(rows) => Ok(ExportedFiles {
                csv: csv_path.clone(),
                json: json_path.clone(),
                rows,
            }),
            Err(e) => {
                for path in created {
                    if let Err(rm) = std::fs::remove_file(path) {
                        tracing::warn!("Could not remove partial export {}: {}", path.display(), rm);
                    }
                }
                Err(e)
            }
        }
    }

    /// Create both files up front, then fill them. Every file this call
    /// creates is pushed onto `created`.
    fn write_export_pair<'p>(
        &self,
        csv_path: &'p Path,
        json_path: &'p Path,
        created: &mut Vec<&'p Path>,
    ) -> anyhow::Result<usize> {
        let csv_file = File::create(csv_path)
            .with_context(|| format!("creating {}", csv_path.display()))?;
        created.push(csv_path);
        let json_file = File::create(json_path)
            .with_context(|| format!("creating {}", json_path.display()))?;
        created.push(json_path);

        let view = filter(&self.dataset, &self.criteria());
        let rows = write_view_csv(&view, BufWriter::new(csv_file))
            .with_context(|| format!("writing {}", csv_path.display()))?;
        let mut json_out = BufWriter::new(json_file);
        write_pivot_json(&self.dashboard.pivot, &mut json_out)
            .with_context(|| format!("writing {}", json_path.display()))?;
        json_out
            .flush()
            .with_context(|| format!("writing {}", json_path.display()))?;
        Ok(rows)
    }
}
