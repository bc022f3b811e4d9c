use error_stack::{Report, Result, ResultExt};
use thiserror::Error;

use crate::{
    dataset::Dataset,
    sheets::{spreadsheet_manager::SpreadsheetManagerError, spreadsheet_read::SpreadsheetRead},
};

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadError {
    #[error("service account credentials could not be read")]
    Credentials,
    #[error("authentication with the service account failed")]
    Authentication,
    #[error("the range could not be fetched")]
    Network,
    #[error("no data found in the spreadsheet")]
    EmptyData,
    #[error("the fetched rows do not form a table")]
    MalformedGrid,
}

impl From<&SpreadsheetManagerError> for LoadError {
    fn from(error: &SpreadsheetManagerError) -> Self {
        match error {
            SpreadsheetManagerError::CredentialsUnreadable => LoadError::Credentials,
            SpreadsheetManagerError::AuthenticationFailed => LoadError::Authentication,
            SpreadsheetManagerError::FailedToFetchRange => LoadError::Network,
            SpreadsheetManagerError::EmptyRange => LoadError::EmptyData,
        }
    }
}

pub fn classify(report: Report<SpreadsheetManagerError>) -> Report<LoadError> {
    let reason = LoadError::from(report.current_context());
    report.change_context(reason)
}

/// Fetches `range` and tabulates it. This is the only place a run can fail
/// before any processing happens.
pub async fn load_dataset<R: SpreadsheetRead>(
    reader: &R,
    range: &str,
) -> Result<Dataset, LoadError> {
    let grid = reader.read_range(range).await.map_err(classify)?;

    Dataset::from_grid(grid)
        .map_err(Report::new)
        .change_context(LoadError::MalformedGrid)
        .attach_printable_lazy(|| format!("Range {} could not be tabulated", range))
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::sheets::Grid;
    use error_stack::report;

    pub(crate) struct StaticSheet(pub std::result::Result<Grid, SpreadsheetManagerError>);

    impl SpreadsheetRead for StaticSheet {
        async fn read_range(&self, _range: &str) -> Result<Grid, SpreadsheetManagerError> {
            match &self.0 {
                Ok(grid) => Ok(grid.clone()),
                Err(error) => Err(report!(error.clone())),
            }
        }
    }

    #[tokio::test]
    async fn test_load_dataset() {
        let sheet = StaticSheet(Ok(crate::dataset::grid(&[
            &["Category", "Amount"],
            &["Food", "1"],
        ])));

        let dataset = load_dataset(&sheet, "Data").await.unwrap();

        assert_eq!(dataset.row_count(), 1);
        assert_eq!(dataset.headers(), vec!["Category", "Amount"]);
    }

    #[tokio::test]
    async fn test_failures_are_named() {
        let cases = [
            (SpreadsheetManagerError::CredentialsUnreadable, LoadError::Credentials),
            (SpreadsheetManagerError::AuthenticationFailed, LoadError::Authentication),
            (SpreadsheetManagerError::FailedToFetchRange, LoadError::Network),
            (SpreadsheetManagerError::EmptyRange, LoadError::EmptyData),
        ];

        for (error, expected) in cases {
            let report = load_dataset(&StaticSheet(Err(error)), "Data")
                .await
                .unwrap_err();
            assert_eq!(report.current_context(), &expected);
        }
    }

    #[tokio::test]
    async fn test_ragged_grid_is_malformed() {
        let sheet = StaticSheet(Ok(crate::dataset::grid(&[&["A"], &["1", "2"]])));

        let report = load_dataset(&sheet, "Data").await.unwrap_err();

        assert_eq!(report.current_context(), &LoadError::MalformedGrid);
    }
}
