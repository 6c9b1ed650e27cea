//! `applens report` -- the engine result as text or JSON on stdout.

use crate::cli::ReportArgs;
use applens_core::engine::{evaluate, AggregationRow, FilterCriteria, Summary};
use applens_core::model::format::{format_count, format_rating};
use applens_core::model::Dataset;
use std::io::Write;

impl ReportArgs {
    pub fn criteria(&self) -> FilterCriteria {
        FilterCriteria::new()
            .with_categories(self.categories.iter().cloned())
            .with_types(self.types.iter().copied())
            .with_rating_range(self.min_rating, self.max_rating)
            .with_search(self.search.clone())
    }
}

/// Run one engine pass and write the result to `out`.
pub fn run<W: Write>(dataset: &Dataset, args: &ReportArgs, mut out: W) -> anyhow::Result<()> {
    let eval = evaluate(dataset, &args.criteria());
    if args.json {
        write_json(&eval.summary, &eval.pivot, &mut out)?;
    } else {
        write_table(&eval.summary, &eval.pivot, &mut out)?;
    }
    out.flush()?;
    Ok(())
}

fn write_json<W: Write>(summary: &Summary, pivot: &[AggregationRow], out: &mut W) -> anyhow::Result<()> {
    let doc = serde_json::json!({
        "summary": summary,
        "pivot": pivot,
    });
    serde_json::to_writer_pretty(&mut *out, &doc)?;
    writeln!(out)?;
    Ok(())
}

fn write_table<W: Write>(summary: &Summary, pivot: &[AggregationRow], out: &mut W) -> anyhow::Result<()> {
    writeln!(out, "{summary}")?;
    if pivot.is_empty() {
        writeln!(out, "No data available for the selected filters.")?;
        return Ok(());
    }

    let width = pivot
        .iter()
        .map(|r| r.category.len())
        .chain(std::iter::once("Category".len()))
        .max()
        .unwrap_or(0);

    writeln!(out)?;
    writeln!(
        out,
        "{:<width$}  {:<4}  {:>14}  {:>14}",
        "Category", "Type", "Average Rating", "Total Installs"
    )?;
    for row in pivot {
        writeln!(
            out,
            "{:<width$}  {:<4}  {:>14}  {:>14}",
            row.category.as_str(),
            row.app_type.label(),
            format_rating(row.average_rating),
            format_count(row.total_installs)
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use applens_core::model::{AppRecord, AppType};

    fn dataset() -> Dataset {
        Dataset::from_records(vec![
            AppRecord::new("A", "Game", Some(4.5), Some(100), 0.0, AppType::Free),
            AppRecord::new("B", "Game", Some(3.0), Some(2_000), 2.5, AppType::Paid),
            AppRecord::new("C", "Tool", Some(4.9), Some(50), 0.0, AppType::Free),
        ])
    }

    fn args() -> ReportArgs {
        ReportArgs {
            categories: vec!["Game".into()],
            types: vec![],
            min_rating: 0.0,
            max_rating: 5.0,
            search: String::new(),
            json: false,
        }
    }

    #[test]
    fn text_report_has_summary_and_rows() {
        let mut buf = Vec::new();
        run(&dataset(), &args(), &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Total Apps: 2, Average Rating: 3.75");
        assert!(lines[2].starts_with("Category"));
        assert_eq!(
            lines[3],
            "Game      Free            4.50             100"
        );
        assert!(lines[4].starts_with("Game      Paid"));
        assert!(lines[4].ends_with("2,000"));
    }

    #[test]
    fn empty_result_prints_notice() {
        let mut a = args();
        a.search = "zzz".into();
        let mut buf = Vec::new();
        run(&dataset(), &a, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.starts_with("Total Apps: 0, Average Rating: 0.00"));
        assert!(text.contains("No data available"));
    }

    #[test]
    fn json_report_shape() {
        let mut a = args();
        a.json = true;
        let mut buf = Vec::new();
        run(&dataset(), &a, &mut buf).unwrap();
        let v: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(v["summary"]["count"], 2);
        assert_eq!(v["pivot"].as_array().unwrap().len(), 2);
        assert_eq!(v["pivot"][1]["Type"], "Paid");
    }
}
