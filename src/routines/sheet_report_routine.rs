use std::path::PathBuf;

use error_stack::{Report, Result, ResultExt};
use polars::prelude::PolarsResult;

use crate::{
    charts::{
        bar::{Bar, BarChart},
        pie::{PieChart, Slice},
        Chart, ChartError,
    },
    config::report_config::ReportConfig,
    dataset::{schema::Capabilities, CoercionReport, Dataset},
    report::{
        aggregate::{self, CategoryCount, DailyTotal},
        summary::Summary,
    },
    sheets::spreadsheet_read::SpreadsheetRead,
};

use super::{
    load::load_dataset,
    routine::{Routine, RoutineError},
};

pub const PIE_CHART_TITLE: &str = "Category Distribution";
pub const BAR_CHART_TITLE: &str = "Amount Over Time";

pub struct SheetReportRoutine<R> {
    reader: R,
    range: Box<str>,
    report: ReportConfig,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReportOutcome {
    pub summary: Summary,
    pub coercion: CoercionReport,
    pub pie_chart: Option<PathBuf>,
    pub bar_chart: Option<PathBuf>,
}

impl<R: SpreadsheetRead + Send + Sync> SheetReportRoutine<R> {
    pub fn new(reader: R, range: impl Into<Box<str>>, report: ReportConfig) -> Self {
        Self {
            reader,
            range: range.into(),
            report,
        }
    }

    pub async fn execute(&self) -> Result<ReportOutcome, RoutineError> {
        let mut dataset = load_dataset(&self.reader, &self.range)
            .await
            .change_context(RoutineError::LoadFailed)?;

        log::info!("✅ Data loaded successfully:");
        println!("{}", dataset.preview(self.report.preview_rows));

        let capabilities = dataset.capabilities();
        log::debug!("Columns {:?} give {:?}", dataset.headers(), capabilities);

        let processed = process(&mut dataset, &capabilities)
            .map_err(Report::new)
            .change_context(RoutineError::ProcessingFailed)?;
        println!("\n{}", processed.summary);

        let pie_chart = self
            .export_pie_chart(processed.category_counts)
            .change_context(RoutineError::ExportFailed)?;
        let bar_chart = self
            .export_bar_chart(processed.daily_totals)
            .change_context(RoutineError::ExportFailed)?;

        Ok(ReportOutcome {
            summary: processed.summary,
            coercion: processed.coercion,
            pie_chart,
            bar_chart,
        })
    }

    fn export_pie_chart(
        &self,
        counts: Option<Vec<CategoryCount>>,
    ) -> Result<Option<PathBuf>, ChartError> {
        let Some(counts) = counts else {
            log::info!("No Category column, skipping pie chart");
            return Ok(None);
        };

        let chart = PieChart::new(
            PIE_CHART_TITLE,
            counts.into_iter().map(|count| Slice {
                label: count.category,
                value: count.count as f64,
            }),
        );

        let path = &self.report.pie_chart_path;
        chart.write_html(path)?;
        log::info!("📊 Pie chart saved to {}", path.display());

        Ok(Some(path.clone()))
    }

    fn export_bar_chart(
        &self,
        totals: Option<Vec<DailyTotal>>,
    ) -> Result<Option<PathBuf>, ChartError> {
        let Some(totals) = totals else {
            log::info!("Date or Amount column missing, skipping bar chart");
            return Ok(None);
        };

        let chart = BarChart::new(
            BAR_CHART_TITLE,
            "Date",
            "Amount",
            totals.into_iter().map(|total| Bar {
                label: total.date.format("%Y-%m-%d").to_string(),
                value: total.amount,
            }),
        );

        let path = &self.report.bar_chart_path;
        chart.write_html(path)?;
        log::info!("📊 Bar chart saved to {}", path.display());

        Ok(Some(path.clone()))
    }
}

struct Processed {
    coercion: CoercionReport,
    summary: Summary,
    category_counts: Option<Vec<CategoryCount>>,
    daily_totals: Option<Vec<DailyTotal>>,
}

fn process(dataset: &mut Dataset, capabilities: &Capabilities) -> PolarsResult<Processed> {
    let coercion = dataset.coerce(capabilities)?;
    log_missing("Amount", coercion.amount_missing, dataset.row_count());
    log_missing("Date", coercion.date_missing, dataset.row_count());

    let category_counts = if capabilities.can_chart_categories() {
        aggregate::category_counts(dataset)?
    } else {
        None
    };
    let daily_totals = if capabilities.can_chart_daily_totals() {
        aggregate::daily_totals(dataset)?
    } else {
        None
    };

    Ok(Processed {
        coercion,
        summary: Summary::from_dataset(dataset)?,
        category_counts,
        daily_totals,
    })
}

fn log_missing(column: &str, missing: Option<usize>, row_count: usize) {
    if let Some(missing) = missing.filter(|&missing| missing > 0) {
        log::warn!(
            "{}: {} of {} values are missing or could not be parsed",
            column,
            missing,
            row_count
        );
    }
}

#[async_trait::async_trait]
impl<R: SpreadsheetRead + Send + Sync> Routine for SheetReportRoutine<R> {
    fn name(&self) -> &str {
        "SheetReportRoutine"
    }

    async fn run(&self) -> Result<(), RoutineError> {
        let outcome = self.execute().await?;
        log::debug!(
            "{} rows ({:?}), pie chart: {:?}, bar chart: {:?}",
            outcome.summary.row_count,
            outcome.coercion,
            outcome.pie_chart,
            outcome.bar_chart
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        dataset::grid, routines::load::tests::StaticSheet,
        sheets::spreadsheet_manager::SpreadsheetManagerError,
    };
    use tempfile::TempDir;

    fn report_config(dir: &TempDir) -> ReportConfig {
        ReportConfig {
            pie_chart_path: dir.path().join("pie_chart.html"),
            bar_chart_path: dir.path().join("bar_chart.html"),
            preview_rows: 5,
        }
    }

    fn routine(rows: &[&[&str]], dir: &TempDir) -> SheetReportRoutine<StaticSheet> {
        SheetReportRoutine::new(StaticSheet(Ok(grid(rows))), "Data", report_config(dir))
    }

    const ROWS: &[&[&str]] = &[
        &["Category", "Amount", "Date"],
        &["Food", "10", "2024-01-01"],
        &["Rent", "20", "2024-01-01 18:00:00"],
        &["Food", "abc", "2024-01-02"],
    ];

    #[tokio::test]
    async fn test_full_report() {
        let dir = tempfile::tempdir().unwrap();
        let routine = routine(ROWS, &dir);

        let outcome = routine.execute().await.unwrap();

        assert_eq!(outcome.summary.row_count, 3);
        assert_eq!(outcome.summary.total_amount, Some(30.0));
        assert_eq!(outcome.coercion.amount_missing, Some(1));
        assert_eq!(outcome.pie_chart, Some(dir.path().join("pie_chart.html")));
        assert_eq!(outcome.bar_chart, Some(dir.path().join("bar_chart.html")));

        let pie = std::fs::read_to_string(dir.path().join("pie_chart.html")).unwrap();
        assert!(pie.contains(PIE_CHART_TITLE));
        assert!(pie.contains("Food: 2"));
        assert!(pie.contains("Rent: 1"));

        let bar = std::fs::read_to_string(dir.path().join("bar_chart.html")).unwrap();
        assert!(bar.contains(BAR_CHART_TITLE));
        assert!(bar.contains("2024-01-01: 30"));
        assert!(bar.contains("2024-01-02: 0"));
    }

    #[tokio::test]
    async fn test_empty_fetch_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let routine = SheetReportRoutine::new(
            StaticSheet(Err(SpreadsheetManagerError::EmptyRange)),
            "Data",
            report_config(&dir),
        );

        let report = routine.run().await.unwrap_err();

        assert_eq!(report.current_context(), &RoutineError::LoadFailed);
        assert!(!dir.path().join("pie_chart.html").exists());
        assert!(!dir.path().join("bar_chart.html").exists());
    }

    #[tokio::test]
    async fn test_missing_category_skips_pie_chart() {
        let dir = tempfile::tempdir().unwrap();
        let routine = routine(&[&["Amount", "Date"], &["5", "2024-01-01"]], &dir);

        let outcome = routine.execute().await.unwrap();

        assert_eq!(outcome.pie_chart, None);
        assert!(!dir.path().join("pie_chart.html").exists());
        assert!(dir.path().join("bar_chart.html").exists());
    }

    #[tokio::test]
    async fn test_missing_date_or_amount_skips_bar_chart() {
        for rows in [
            &[&["Category", "Amount"][..], &["Food", "5"][..]][..],
            &[&["Category", "Date"][..], &["Food", "2024-01-01"][..]][..],
        ] {
            let dir = tempfile::tempdir().unwrap();
            let outcome = routine(rows, &dir).execute().await.unwrap();

            assert_eq!(outcome.bar_chart, None);
            assert!(!dir.path().join("bar_chart.html").exists());
            assert!(dir.path().join("pie_chart.html").exists());
        }
    }

    #[tokio::test]
    async fn test_rerun_overwrites_with_same_content() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("pie_chart.html"), "stale").unwrap();
        let routine = routine(ROWS, &dir);

        routine.execute().await.unwrap();
        let first_pie = std::fs::read_to_string(dir.path().join("pie_chart.html")).unwrap();
        let first_bar = std::fs::read_to_string(dir.path().join("bar_chart.html")).unwrap();

        routine.execute().await.unwrap();
        let second_pie = std::fs::read_to_string(dir.path().join("pie_chart.html")).unwrap();
        let second_bar = std::fs::read_to_string(dir.path().join("bar_chart.html")).unwrap();

        assert_ne!(first_pie, "stale");
        assert_eq!(first_pie, second_pie);
        assert_eq!(first_bar, second_bar);
    }

    #[tokio::test]
    async fn test_unwritable_chart_fails_export() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = report_config(&dir);
        config.pie_chart_path = dir.path().join("missing").join("pie_chart.html");
        let routine = SheetReportRoutine::new(StaticSheet(Ok(grid(ROWS))), "Data", config);

        let report = routine.run().await.unwrap_err();

        assert_eq!(report.current_context(), &RoutineError::ExportFailed);
    }
}
