/// CSV dataset loader.
///
/// Reads the app CSV once at startup. Rating and Installs are tolerant
/// (bad values become `None` and are excluded from numeric work later).
/// A row whose Type or Price cannot be read is skipped with a warning, so
/// every loaded record has a known type and a non-negative price.
use crate::error::{DatasetError, Result};
use crate::model::{AppRecord, AppType, Dataset};
use compact_str::CompactString;
use serde::Deserialize;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::{debug, info, warn};

/// Columns that must be present in the header row. Other columns are ignored.
pub const REQUIRED_COLUMNS: [&str; 6] = ["App", "Category", "Rating", "Installs", "Price", "Type"];

/// Inclusive bounds of a valid rating.
pub const RATING_MIN: f64 = 0.0;
pub const RATING_MAX: f64 = 5.0;

/// A row as it appears in the file, before normalisation.
#[derive(Debug, Deserialize)]
struct RawRow {
    #[serde(rename = "App")]
    app: String,
    #[serde(rename = "Category")]
    category: String,
    #[serde(rename = "Rating")]
    rating: String,
    #[serde(rename = "Installs")]
    installs: String,
    #[serde(rename = "Price")]
    price: String,
    #[serde(rename = "Type")]
    app_type: String,
}

/// Counters reported once the load completes.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LoadStats {
    pub rows: usize,
    pub missing_ratings: usize,
    pub out_of_range_ratings: usize,
    pub missing_installs: usize,
    /// Rows dropped for an unreadable Type or Price.
    pub skipped_rows: usize,
}

/// Open and parse the dataset at `path`.
pub fn load_csv(path: &Path) -> Result<Dataset> {
    let file = File::open(path).map_err(|source| DatasetError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    info!("Loading dataset from {}", path.display());
    read_csv(BufReader::new(file))
}

/// Parse a dataset from any reader (file, in-memory buffer).
pub fn read_csv<R: Read>(reader: R) -> Result<Dataset> {
    let (dataset, stats) = read_csv_with_stats(reader)?;
    info!(
        "Loaded {} apps in {} categories ({} without rating, {} without installs)",
        stats.rows,
        dataset.categories().len(),
        stats.missing_ratings,
        stats.missing_installs
    );
    if stats.skipped_rows > 0 {
        warn!(
            "{} rows with an invalid Type or Price were skipped",
            stats.skipped_rows
        );
    }
    if stats.out_of_range_ratings > 0 {
        warn!(
            "{} ratings were outside [{RATING_MIN}, {RATING_MAX}] and were treated as missing",
            stats.out_of_range_ratings
        );
    }
    Ok(dataset)
}

/// Like [`read_csv`] but also returns the load counters.
pub fn read_csv_with_stats<R: Read>(reader: R) -> Result<(Dataset, LoadStats)> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(DatasetError::MissingColumn(column));
        }
    }

    let mut stats = LoadStats::default();
    let mut records = Vec::new();

    for result in rdr.records() {
        let row = result?;
        let line = row.position().map_or(0, |p| p.line());
        let raw: RawRow = row.deserialize(Some(&headers))?;

        let Some(price) = parse_price(&raw.price) else {
            warn!("line {line}: skipping {:?}, invalid Price {:?}", raw.app, raw.price);
            stats.skipped_rows += 1;
            continue;
        };
        let Ok(app_type) = raw.app_type.parse::<AppType>() else {
            warn!("line {line}: skipping {:?}, invalid Type {:?}", raw.app, raw.app_type);
            stats.skipped_rows += 1;
            continue;
        };

        let rating = match parse_number(&raw.rating) {
            Some(r) if (RATING_MIN..=RATING_MAX).contains(&r) => Some(r),
            Some(r) => {
                debug!("line {line}: rating {r} out of range");
                stats.out_of_range_ratings += 1;
                stats.missing_ratings += 1;
                None
            }
            None => {
                stats.missing_ratings += 1;
                None
            }
        };

        let installs = parse_installs(&raw.installs);
        if installs.is_none() {
            stats.missing_installs += 1;
        }

        records.push(AppRecord {
            app: CompactString::from(raw.app),
            category: CompactString::from(raw.category),
            rating,
            installs,
            price,
            app_type,
        });
    }

    stats.rows = records.len();
    Ok((Dataset::from_records(records), stats))
}

/// Parse a finite float. Empty strings, `NaN` and infinities are `None`.
fn parse_number(s: &str) -> Option<f64> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    s.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Parse an integer-like install count: `1000`, `1,000`, `1,000+`, `1000.0`.
fn parse_installs(s: &str) -> Option<u64> {
    let cleaned: String = s
        .trim()
        .trim_end_matches('+')
        .chars()
        .filter(|&c| c != ',')
        .collect();
    if cleaned.is_empty() {
        return None;
    }
    if let Ok(n) = cleaned.parse::<u64>() {
        return Some(n);
    }
    // Pandas writes integer columns containing NaN as floats ("1000.0").
    parse_number(&cleaned)
        .filter(|v| *v >= 0.0 && v.fract() == 0.0 && *v <= u64::MAX as f64)
        .map(|v| v as u64)
}

/// Parse a price: `0`, `2.99` or `$2.99`. Empty means free.
fn parse_price(s: &str) -> Option<f64> {
    let s = s.trim();
    if s.is_empty() {
        return Some(0.0);
    }
    parse_number(s.trim_start_matches('$')).filter(|p| *p >= 0.0)
}
