use std::path::PathBuf;

#[derive(serde::Deserialize, Debug, Clone, PartialEq)]
pub struct ReportConfig {
    pub pie_chart_path: PathBuf,
    pub bar_chart_path: PathBuf,
    pub preview_rows: usize,
}

impl ReportConfig {
    pub const DEFAULT_PIE_CHART_PATH: &'static str = "pie_chart.html";
    pub const DEFAULT_BAR_CHART_PATH: &'static str = "bar_chart.html";
    pub const DEFAULT_PREVIEW_ROWS: usize = 5;
}
