/// End-to-end engine tests.
///
/// These tests write a real CSV to a temporary directory, load it through
/// `loader::load_csv`, and run the filter → summarize → aggregate pass the
/// same way a dashboard does, checking the contract properties every
/// presentation layer relies on.
use applens_core::analysis::DashboardData;
use applens_core::engine::{aggregate, evaluate, filter, summarize, FilterCriteria};
use applens_core::export::{write_pivot_json, write_view_csv};
use applens_core::loader::load_csv;
use applens_core::model::{AppRecord, AppType, Dataset};
use applens_core::DatasetError;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tempfile::TempDir;

// ── Helpers ──────────────────────────────────────────────────────────────────

/// A small dataset covering every column quirk the loader accepts:
///
/// ```text
/// App               Category  Rating  Installs     Price   Type
/// Alpha Chess       GAME      4.5     100          0       Free
/// Beta Racer        GAME      3.0     200          2.50    Paid
/// Calc Tool         TOOLS     4.9     50           0       Free
/// alphabet kids     FAMILY    4.1     "1,000+"     0       Free
/// Ghost App         TOOLS     (none)  10           0       Free
/// Pro Paint         ART       3.8     (none)       $4.99   Paid
/// ```
const FIXTURE: &str = "\
App,Category,Rating,Reviews,Installs,Price,Type
Alpha Chess,GAME,4.5,12,100,0,Free
Beta Racer,GAME,3.0,3,200,2.50,Paid
Calc Tool,TOOLS,4.9,40,50,0,Free
alphabet kids,FAMILY,4.1,7,\"1,000+\",0,Free
Ghost App,TOOLS,,0,10,0,Free
Pro Paint,ART,3.8,1,,$4.99,Paid
";

fn write_fixture(dir: &Path, body: &str) -> PathBuf {
    let path = dir.join("cleaned_data.csv");
    fs::write(&path, body).unwrap();
    path
}

fn load_fixture() -> (TempDir, Dataset) {
    let tmp = TempDir::new().unwrap();
    let path = write_fixture(tmp.path(), FIXTURE);
    let ds = load_csv(&path).expect("fixture must load");
    (tmp, ds)
}

fn app_names<'a>(records: impl Iterator<Item = &'a AppRecord>) -> Vec<String> {
    records.map(|r| r.app.to_string()).collect()
}

// ── Loading ──────────────────────────────────────────────────────────────────

#[test]
fn loads_every_row_and_categories_in_order() {
    let (_tmp, ds) = load_fixture();
    assert_eq!(ds.len(), 6);
    let cats: Vec<&str> = ds.categories().iter().map(|c| c.as_str()).collect();
    assert_eq!(cats, ["GAME", "TOOLS", "FAMILY", "ART"]);

    let ghost = &ds.records()[4];
    assert_eq!(ghost.rating, None);
    let paint = &ds.records()[5];
    assert_eq!(paint.installs, None);
    assert_eq!(paint.price, 4.99);
}

#[test]
fn missing_file_is_an_io_error() {
    let tmp = TempDir::new().unwrap();
    let err = load_csv(&tmp.path().join("nope.csv")).unwrap_err();
    assert!(matches!(err, DatasetError::Io { .. }));
    assert!(err.to_string().contains("nope.csv"));
}

#[test]
fn missing_required_column_is_fatal() {
    let tmp = TempDir::new().unwrap();
    let path = write_fixture(tmp.path(), "App,Category,Installs,Price,Type\nA,GAME,1,0,Free\n");
    let err = load_csv(&path).unwrap_err();
    assert!(matches!(err, DatasetError::MissingColumn("Rating")));
}

// ── Filter contract ──────────────────────────────────────────────────────────

/// Unrestricted criteria return every rated row in file order.
#[test]
fn unrestricted_filter_keeps_all_rated_rows_in_order() {
    let (_tmp, ds) = load_fixture();
    let view = filter(&ds, &FilterCriteria::new());
    assert_eq!(
        app_names(view.iter()),
        ["Alpha Chess", "Beta Racer", "Calc Tool", "alphabet kids", "Pro Paint"]
    );
}

/// Every kept row passes all four predicates, and every dropped row fails
/// at least one.
#[test]
fn kept_rows_pass_and_dropped_rows_fail() {
    let (_tmp, ds) = load_fixture();
    let criteria_set = [
        FilterCriteria::new(),
        FilterCriteria::new().with_categories(["GAME", "TOOLS"]),
        FilterCriteria::new().with_types([AppType::Paid]),
        FilterCriteria::new().with_rating_range(4.0, 4.9),
        FilterCriteria::new().with_search("ALPHA"),
        FilterCriteria::new()
            .with_categories(["GAME", "FAMILY"])
            .with_types([AppType::Free])
            .with_rating_range(4.2, 5.0)
            .with_search("a"),
    ];

    for criteria in &criteria_set {
        let view = filter(&ds, criteria);
        let kept: Vec<*const AppRecord> = view.iter().map(|r| r as *const _).collect();

        for record in ds.records() {
            let all_pass = criteria.matches_category(record)
                && criteria.matches_type(record)
                && criteria.matches_rating(record)
                && criteria.matches_search(record);
            let is_kept = kept.contains(&(record as *const _));
            assert_eq!(all_pass, is_kept, "{} under {criteria}", record.app);
        }
    }
}

#[test]
fn filter_twice_is_filter_once() {
    let (_tmp, ds) = load_fixture();
    let criteria = FilterCriteria::new()
        .with_categories(["GAME", "FAMILY"])
        .with_search("A");
    let once = filter(&ds, &criteria);
    let twice = once.refine(&criteria);
    assert_eq!(app_names(once.iter()), app_names(twice.iter()));
}

#[test]
fn search_is_case_insensitive() {
    let (_tmp, ds) = load_fixture();
    let upper = filter(&ds, &FilterCriteria::new().with_search("ALPHA"));
    let lower = filter(&ds, &FilterCriteria::new().with_search("alpha"));
    assert_eq!(app_names(upper.iter()), ["Alpha Chess", "alphabet kids"]);
    assert_eq!(app_names(upper.iter()), app_names(lower.iter()));
}

// ── Summary and pivot ────────────────────────────────────────────────────────

#[test]
fn game_category_summary_and_pivot() {
    let (_tmp, ds) = load_fixture();
    let eval = evaluate(&ds, &FilterCriteria::new().with_categories(["GAME"]));

    assert_eq!(eval.summary.count, 2);
    assert_eq!(eval.summary.average_rating, 3.75);
    assert_eq!(
        eval.summary.to_string(),
        "Total Apps: 2, Average Rating: 3.75"
    );

    assert_eq!(eval.pivot.len(), 2);
    assert_eq!(eval.pivot[0].app_type, AppType::Free);
    assert_eq!(eval.pivot[0].total_installs, 100);
    assert_eq!(eval.pivot[1].app_type, AppType::Paid);
    assert_eq!(eval.pivot[1].average_rating, Some(3.0));
}

#[test]
fn pivot_over_everything_is_sorted() {
    let (_tmp, ds) = load_fixture();
    let pivot = aggregate(&filter(&ds, &FilterCriteria::new()));
    let keys: Vec<(String, AppType)> = pivot
        .iter()
        .map(|r| (r.category.to_string(), r.app_type))
        .collect();
    let mut sorted = keys.clone();
    sorted.sort();
    assert_eq!(keys, sorted);

    let family = pivot.iter().find(|r| r.category == "FAMILY").unwrap();
    assert_eq!(family.total_installs, 1_000);
    let art = pivot.iter().find(|r| r.category == "ART").unwrap();
    assert_eq!(art.total_installs, 0, "missing installs add nothing");
}

#[test]
fn no_match_is_empty_not_an_error() {
    let (_tmp, ds) = load_fixture();
    let view = filter(&ds, &FilterCriteria::new().with_search("zzz"));
    let summary = summarize(&view);
    assert_eq!((summary.count, summary.average_rating), (0, 0.0));
    assert!(aggregate(&view).is_empty());
    assert!(DashboardData::compute(&view).is_empty());
}

// ── Shared dataset ───────────────────────────────────────────────────────────

/// The dataset is read-only shared state: independent requests on other
/// threads see the same results.
#[test]
fn shared_dataset_serves_concurrent_requests() {
    let (_tmp, ds) = load_fixture();
    let ds = Arc::new(ds);

    let handles: Vec<_> = [AppType::Free, AppType::Paid]
        .into_iter()
        .map(|t| {
            let ds = Arc::clone(&ds);
            std::thread::spawn(move || {
                evaluate(&ds, &FilterCriteria::new().with_types([t]))
                    .summary
                    .count
            })
        })
        .collect();
    let counts: Vec<usize> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(counts, [3, 2]);
}

// ── Export ───────────────────────────────────────────────────────────────────

#[test]
fn export_round_trip_through_disk() {
    let (tmp, ds) = load_fixture();
    let eval = evaluate(&ds, &FilterCriteria::new().with_types([AppType::Paid]));

    let csv_path = tmp.path().join("out.csv");
    let n = write_view_csv(&eval.view, fs::File::create(&csv_path).unwrap()).unwrap();
    assert_eq!(n, 2);
    let reloaded = load_csv(&csv_path).unwrap();
    assert_eq!(reloaded.records(), eval.view.to_records().as_slice());

    let json_path = tmp.path().join("pivot.json");
    write_pivot_json(&eval.pivot, fs::File::create(&json_path).unwrap()).unwrap();
    let text = fs::read_to_string(&json_path).unwrap();
    assert!(text.contains("\"Total Installs\""));
}
