/// Export of the current filter result.
///
/// The filtered rows go out as CSV in the same column layout the dataset is
/// read from; the pivot table goes out as a JSON array of records keyed by
/// the dashboard's column titles.
use crate::engine::{AggregationRow, FilteredView};
use crate::model::AppType;
use chrono::{DateTime, TimeZone};
use serde::Serialize;
use std::fmt::Display;
use std::io::Write;

/// One exported row. Absent values are written as empty fields.
#[derive(Serialize)]
struct ExportRow<'a> {
    #[serde(rename = "App")]
    app: &'a str,
    #[serde(rename = "Category")]
    category: &'a str,
    #[serde(rename = "Rating")]
    rating: Option<f64>,
    #[serde(rename = "Installs")]
    installs: Option<u64>,
    #[serde(rename = "Price")]
    price: f64,
    #[serde(rename = "Type")]
    app_type: AppType,
}

/// Write the rows of `view` as CSV with a header. Returns the row count.
pub fn write_view_csv<W: Write>(view: &FilteredView<'_>, writer: W) -> csv::Result<usize> {
    let mut wtr = csv::Writer::from_writer(writer);
    if view.is_empty() {
        // serde only emits the header alongside the first record.
        wtr.write_record(crate::loader::REQUIRED_COLUMNS)?;
    }
    for record in view.iter() {
        wtr.serialize(ExportRow {
            app: &record.app,
            category: &record.category,
            rating: record.rating,
            installs: record.installs,
            price: record.price,
            app_type: record.app_type,
        })?;
    }
    wtr.flush()?;
    Ok(view.len())
}

/// Write the pivot table as a pretty-printed JSON array.
pub fn write_pivot_json<W: Write>(rows: &[AggregationRow], writer: W) -> serde_json::Result<()> {
    serde_json::to_writer_pretty(writer, rows)
}

/// `applens_<what>_YYYYmmdd_HHMMSS.<ext>` for the given moment.
pub fn export_file_name<Tz>(what: &str, ext: &str, now: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    format!("applens_{what}_{}.{ext}", now.format("%Y%m%d_%H%M%S"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::aggregate;
    use crate::model::AppRecord;
    use chrono::Utc;

    fn records() -> Vec<AppRecord> {
        vec![
            AppRecord::new("Alpha", "GAME", Some(4.5), Some(100), 0.0, AppType::Free),
            AppRecord::new("Beta, Pro", "TOOLS", None, None, 2.5, AppType::Paid),
        ]
    }

    #[test]
    fn csv_has_header_and_blank_missing_values() {
        let recs = records();
        let view = FilteredView::from_rows(recs.iter().collect());
        let mut buf = Vec::new();
        let n = write_view_csv(&view, &mut buf).unwrap();
        assert_eq!(n, 2);

        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "App,Category,Rating,Installs,Price,Type");
        assert_eq!(lines[1], "Alpha,GAME,4.5,100,0.0,Free");
        assert_eq!(lines[2], "\"Beta, Pro\",TOOLS,,,2.5,Paid");
    }

    #[test]
    fn empty_view_still_writes_header() {
        let mut buf = Vec::new();
        let n = write_view_csv(&FilteredView::default(), &mut buf).unwrap();
        assert_eq!(n, 0);
        assert_eq!(
            String::from_utf8(buf).unwrap().trim_end(),
            "App,Category,Rating,Installs,Price,Type"
        );
    }

    /// Exported CSV loads back into an equivalent dataset.
    #[test]
    fn csv_export_reloads() {
        let recs = records();
        let view = FilteredView::from_rows(recs.iter().collect());
        let mut buf = Vec::new();
        write_view_csv(&view, &mut buf).unwrap();

        let ds = crate::loader::read_csv(buf.as_slice()).unwrap();
        assert_eq!(ds.records(), recs.as_slice());
    }

    #[test]
    fn pivot_json_uses_display_column_names() {
        let recs = records();
        let pivot = aggregate(&FilteredView::from_rows(recs.iter().collect()));
        let mut buf = Vec::new();
        write_pivot_json(&pivot, &mut buf).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        let rows = value.as_array().unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0]["Category"], "GAME");
        assert_eq!(rows[0]["Average Rating"], 4.5);
        assert_eq!(rows[1]["Type"], "Paid");
        assert!(rows[1]["Average Rating"].is_null());
        assert_eq!(rows[1]["Total Installs"], 0);
    }

    #[test]
    fn file_name_is_timestamped() {
        let now = Utc.with_ymd_and_hms(2026, 10, 19, 8, 5, 3).unwrap();
        assert_eq!(
            export_file_name("filtered", "csv", &now),
            "applens_filtered_20261019_080503.csv"
        );
    }
}
