/// End-to-end tests for `AppState` -- the GUI application state.
///
/// These tests exercise the real business-logic paths of `AppState` without
/// spinning up an egui window, keeping them fast and deterministic.
///
/// **Scope:** All user-visible state transitions are covered:
///   - Presets and the initial dashboard
///   - Filter setters, the dirty flag and `refresh()`
///   - Pivot sorting, column filters, paging and single-row selection
///   - Export to disk, success and failure
///
/// The dataset is written to a real CSV and loaded through the core loader,
/// so no mocking is needed.
use applens_core::export::export_file_name;
use applens_core::loader::load_csv;
use applens_core::model::{AppType, Dataset};
use applens_gui::state::{
    AppState, ExportStatus, PivotColumn, PivotSort, Preset, PIVOT_PAGE_SIZE,
};
use std::fmt::Write as _;
use std::fs;
use std::sync::Arc;
use tempfile::TempDir;

// ── Helpers ───────────────────────────────────────────────────────────────────

const SMALL: &str = "\
App,Category,Rating,Installs,Price,Type
Alpha Chess,GAME,4.5,100,0,Free
Beta Racer,GAME,3.0,200,2.50,Paid
Calc Tool,TOOLS,4.9,50,0,Free
alphabet kids,FAMILY,4.1,1000,0,Free
Ghost App,TOOLS,,10,0,Free
";

fn load(body: &str) -> (TempDir, Arc<Dataset>) {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("cleaned_data.csv");
    fs::write(&path, body).unwrap();
    let ds = load_csv(&path).expect("fixture must load");
    (tmp, Arc::new(ds))
}

/// `n` categories with one Free and one Paid app each: `2n` pivot groups.
fn many_groups(n: usize) -> String {
    let mut body = String::from("App,Category,Rating,Installs,Price,Type\n");
    for i in 0..n {
        writeln!(body, "Free {i},CAT{i:02},4.0,{},0,Free", (i + 1) * 10).unwrap();
        writeln!(body, "Paid {i},CAT{i:02},3.0,{},1.99,Paid", i + 1).unwrap();
    }
    body
}

// ── Presets ───────────────────────────────────────────────────────────────────

/// The sidebar preset opens on the first category with only free apps.
#[test]
fn sidebar_preset_starts_on_first_category_free() {
    let (_tmp, ds) = load(SMALL);
    let state = AppState::new(ds, "cleaned_data.csv", Preset::Sidebar);

    assert_eq!(
        state.selected_categories.iter().collect::<Vec<_>>(),
        ["GAME"]
    );
    assert!(state.selected_types.contains(&AppType::Free));
    let summary = &state.dashboard().summary;
    assert_eq!(summary.count, 1);
    assert_eq!(summary.to_string(), "Total Apps: 1, Average Rating: 4.50");
}

/// The open preset shows every rated app.
#[test]
fn open_preset_shows_every_rated_app() {
    let (_tmp, ds) = load(SMALL);
    let state = AppState::new(ds, "cleaned_data.csv", Preset::Open);
    assert_eq!(state.dashboard().summary.count, 4);
    assert!(!state.dashboard().is_empty());
}

// ── Filters and refresh ───────────────────────────────────────────────────────

/// A widget change is only reflected after `refresh()`.
#[test]
fn changes_apply_on_refresh() {
    let (_tmp, ds) = load(SMALL);
    let mut state = AppState::new(ds, "x", Preset::Open);

    state.toggle_category("GAME");
    assert!(state.is_dirty());
    assert_eq!(state.dashboard().summary.count, 4, "stale until refresh");

    assert!(state.refresh());
    assert_eq!(state.dashboard().summary.count, 2);
    assert_eq!(state.dashboard().summary.average_rating, 3.75);
    assert!(!state.refresh(), "nothing changed since");
}

/// Toggling a category twice restores the unrestricted view.
#[test]
fn toggle_twice_is_a_no_op() {
    let (_tmp, ds) = load(SMALL);
    let mut state = AppState::new(ds, "x", Preset::Open);
    state.toggle_type(AppType::Paid);
    state.toggle_type(AppType::Paid);
    state.refresh();
    assert!(state.selected_types.is_empty());
    assert_eq!(state.dashboard().summary.count, 4);
}

#[test]
fn search_is_case_insensitive() {
    let (_tmp, ds) = load(SMALL);
    let mut state = AppState::new(ds, "x", Preset::Open);
    state.set_search("ALPHA");
    state.refresh();
    assert_eq!(state.dashboard().summary.count, 2);
}

/// Filters that match nothing leave an empty dashboard, not an error.
#[test]
fn no_match_gives_empty_dashboard() {
    let (_tmp, ds) = load(SMALL);
    let mut state = AppState::new(ds, "x", Preset::Open);
    state.set_rating_range(4.95, 5.0);
    state.refresh();
    let data = state.dashboard();
    assert!(data.is_empty());
    assert_eq!(data.summary.average_rating, 0.0);
    assert!(data.pivot.is_empty());
    assert_eq!(state.pivot_page_count(), 1);
    assert!(state.pivot_page_rows().is_empty());
}

#[test]
fn reset_filters_returns_to_open_view() {
    let (_tmp, ds) = load(SMALL);
    let mut state = AppState::new(ds, "x", Preset::Sidebar);
    state.set_search("zzz");
    state.set_rating_range(1.0, 2.0);
    state.reset_filters();
    state.refresh();
    assert_eq!(state.criteria(), applens_core::engine::FilterCriteria::new());
    assert_eq!(state.dashboard().summary.count, 4);
}

/// The category query narrows the list without filtering the data.
#[test]
fn category_query_only_narrows_the_list() {
    let (_tmp, ds) = load(SMALL);
    let mut state = AppState::new(ds, "x", Preset::Open);
    state.category_query = "oo".into();
    let visible: Vec<&str> = state.visible_categories().iter().map(|c| c.as_str()).collect();
    assert_eq!(visible, ["TOOLS"]);
    assert!(!state.refresh());
    assert_eq!(state.dashboard().summary.count, 4);
}

// ── Pivot table ───────────────────────────────────────────────────────────────

/// Unsorted, the table keeps engine order; one click sorts ascending, a
/// second descending.
#[test]
fn pivot_sort_toggles_direction() {
    let (_tmp, ds) = load(SMALL);
    let mut state = AppState::new(ds, "x", Preset::Open);

    let cats: Vec<&str> = state.sorted_pivot().iter().map(|r| r.category.as_str()).collect();
    assert_eq!(cats, ["FAMILY", "GAME", "GAME", "TOOLS"]);

    state.sort_pivot_by(PivotColumn::TotalInstalls);
    assert_eq!(
        state.pivot_sort,
        Some(PivotSort {
            column: PivotColumn::TotalInstalls,
            ascending: true
        })
    );
    let installs: Vec<u64> = state.sorted_pivot().iter().map(|r| r.total_installs).collect();
    assert_eq!(installs, [50, 100, 200, 1000]);

    state.sort_pivot_by(PivotColumn::TotalInstalls);
    let installs: Vec<u64> = state.sorted_pivot().iter().map(|r| r.total_installs).collect();
    assert_eq!(installs, [1000, 200, 100, 50]);
}

#[test]
fn pivot_pages_hold_ten_rows() {
    let (_tmp, ds) = load(&many_groups(12));
    let mut state = AppState::new(ds, "x", Preset::Open);

    assert_eq!(state.dashboard().pivot.len(), 24);
    assert_eq!(state.pivot_page_count(), 3);
    assert_eq!(state.pivot_page_rows().len(), PIVOT_PAGE_SIZE);

    state.next_pivot_page();
    state.next_pivot_page();
    state.next_pivot_page();
    assert_eq!(state.pivot_page, 2, "paging stops at the last page");
    assert_eq!(state.pivot_page_rows().len(), 4);

    state.prev_pivot_page();
    assert_eq!(state.pivot_page, 1);

    // A new result starts from the first page.
    state.toggle_type(AppType::Free);
    state.refresh();
    assert_eq!(state.pivot_page, 0);
    assert_eq!(state.pivot_page_count(), 2);
}

#[test]
fn pivot_selection_is_single_and_survives_sorting() {
    let (_tmp, ds) = load(SMALL);
    let mut state = AppState::new(ds, "x", Preset::Open);

    let first = state.sorted_pivot()[0].clone();
    let second = state.sorted_pivot()[1].clone();
    state.select_pivot_row(&first);
    state.select_pivot_row(&second);
    assert!(state.is_pivot_selected(&second));
    assert!(!state.is_pivot_selected(&first));

    state.sort_pivot_by(PivotColumn::AverageRating);
    assert_eq!(state.selected_pivot_row(), Some(&second));

    // Clicking the selected row clears it.
    state.select_pivot_row(&second);
    assert!(state.selected_pivot_row().is_none());
}

/// A selection that disappears from the result is dropped.
#[test]
fn pivot_selection_cleared_when_group_is_filtered_out() {
    let (_tmp, ds) = load(SMALL);
    let mut state = AppState::new(ds, "x", Preset::Open);
    let family = state
        .sorted_pivot()
        .into_iter()
        .find(|r| r.category == "FAMILY")
        .cloned()
        .unwrap();
    state.select_pivot_row(&family);

    state.toggle_category("GAME");
    state.refresh();
    assert!(state.pivot_selected.is_none());
}

/// Column filters narrow the table without touching the dashboard.
#[test]
fn pivot_column_filters_narrow_rows() {
    let (_tmp, ds) = load(&many_groups(12));
    let mut state = AppState::new(ds, "x", Preset::Open);

    state.set_pivot_filter(PivotColumn::Category, "cat0");
    assert_eq!(state.filtered_pivot().len(), 20);

    state.set_pivot_filter(PivotColumn::Type, "=free");
    assert_eq!(state.filtered_pivot().len(), 10);

    state.set_pivot_filter(PivotColumn::TotalInstalls, ">= 50");
    let cats: Vec<&str> = state.sorted_pivot().iter().map(|r| r.category.as_str()).collect();
    assert_eq!(cats, ["CAT04", "CAT05", "CAT06", "CAT07", "CAT08", "CAT09"]);

    assert_eq!(state.dashboard().pivot.len(), 24);
    assert!(!state.is_dirty());
}

/// Paging counts only the rows that pass the column filters, and a filter
/// change goes back to the first page.
#[test]
fn pivot_paging_follows_column_filters() {
    let (_tmp, ds) = load(&many_groups(12));
    let mut state = AppState::new(ds, "x", Preset::Open);
    state.next_pivot_page();
    state.next_pivot_page();
    assert_eq!(state.pivot_page, 2);

    state.set_pivot_filter(PivotColumn::Category, "cat0");
    assert_eq!(state.pivot_page, 0);
    assert_eq!(state.pivot_page_count(), 2);

    state.next_pivot_page();
    state.next_pivot_page();
    assert_eq!(state.pivot_page, 1);
    assert_eq!(state.pivot_page_rows().len(), 10);

    state.set_pivot_filter(PivotColumn::Type, "paid");
    assert_eq!(state.pivot_page_count(), 1);
    assert_eq!(state.pivot_page_rows().len(), 10);
    assert!(state.pivot_page_rows().iter().all(|r| r.app_type == AppType::Paid));

    // Nothing matching still leaves one (empty) page.
    state.set_pivot_filter(PivotColumn::Category, "nope");
    assert_eq!(state.pivot_page_count(), 1);
    assert!(state.pivot_page_rows().is_empty());
}

/// A row hidden by a column filter stays selected.
#[test]
fn pivot_selection_survives_column_filter() {
    let (_tmp, ds) = load(SMALL);
    let mut state = AppState::new(ds, "x", Preset::Open);
    let family = state
        .sorted_pivot()
        .into_iter()
        .find(|r| r.category == "FAMILY")
        .cloned()
        .unwrap();
    state.select_pivot_row(&family);

    state.set_pivot_filter(PivotColumn::Category, "game");
    assert!(state.sorted_pivot().iter().all(|r| r.category == "GAME"));
    assert_eq!(state.selected_pivot_row(), Some(&family));

    state.clear_pivot_filters();
    assert!(state.is_pivot_selected(&family));
}

#[test]
fn reset_filters_clears_column_filters() {
    let (_tmp, ds) = load(SMALL);
    let mut state = AppState::new(ds, "x", Preset::Open);
    state.set_pivot_filter(PivotColumn::AverageRating, "> 4");
    assert_eq!(state.sorted_pivot().len(), 3);

    state.reset_filters();
    state.refresh();
    assert!(!state.has_pivot_filters());
    assert_eq!(state.sorted_pivot().len(), 4);
}

// ── Export ────────────────────────────────────────────────────────────────────

#[test]
fn export_writes_csv_and_json() {
    let (tmp, ds) = load(SMALL);
    let mut state = AppState::new(ds, "x", Preset::Open);
    state.export_dir = tmp.path().to_path_buf();
    state.toggle_category("GAME");

    assert!(state.export(), "export should succeed");
    let Some(ExportStatus::Saved { csv, json, rows }) = state.last_export.clone() else {
        panic!("expected a saved export, got {:?}", state.last_export);
    };
    assert_eq!(rows, 2);

    let reloaded = load_csv(&csv).unwrap();
    assert_eq!(reloaded.len(), 2);
    assert!(reloaded.records().iter().all(|r| r.category == "GAME"));

    let pivot: serde_json::Value = serde_json::from_str(&fs::read_to_string(&json).unwrap()).unwrap();
    assert_eq!(pivot.as_array().unwrap().len(), 2);
    assert_eq!(pivot[0]["Category"], "GAME");
}

/// Export failures are reported, not fatal.
#[test]
fn export_to_missing_directory_reports_failure() {
    let (tmp, ds) = load(SMALL);
    let mut state = AppState::new(ds, "x", Preset::Open);
    state.export_dir = tmp.path().join("does").join("not").join("exist");

    assert!(!state.export());
    match &state.last_export {
        Some(ExportStatus::Failed(msg)) => assert!(msg.contains("creating"), "{msg}"),
        other => panic!("expected failure, got {other:?}"),
    }
    // The dashboard is untouched.
    assert_eq!(state.dashboard().summary.count, 4);
}

/// When the second file cannot be created, the first is removed again.
#[test]
fn failed_export_leaves_no_partial_files() {
    let (tmp, ds) = load(SMALL);
    let state = AppState::new(ds, "x", Preset::Open);
    let now = chrono::Local::now();

    // A directory squatting on the JSON name makes that file fail.
    fs::create_dir(tmp.path().join(export_file_name("pivot", "json", &now))).unwrap();

    let err = state.write_exports(tmp.path(), &now).unwrap_err();
    assert!(format!("{err:#}").contains("creating"), "{err:#}");
    assert!(!tmp
        .path()
        .join(export_file_name("filtered", "csv", &now))
        .exists());
}
