use error_stack::{report, Report, Result, ResultExt};
use google_sheets4::api::ValueRange;

use super::{
    into::{Grid, IntoGrid},
    spreadsheet_manager::{SpreadsheetManager, SpreadsheetManagerError},
};

pub const READONLY_SCOPE: &str = "https://www.googleapis.com/auth/spreadsheets.readonly";

pub trait SpreadsheetRead {
    fn read_range(
        &self,
        range: &str,
    ) -> impl std::future::Future<Output = Result<Grid, SpreadsheetManagerError>> + Send;
}

impl SpreadsheetRead for SpreadsheetManager {
    async fn read_range(&self, range: &str) -> Result<Grid, SpreadsheetManagerError> {
        log::debug!(
            "Fetching range '{}' from spreadsheet {}",
            range,
            self.config.spreadsheet_id
        );

        let (_, value_range) = self
            .hub
            .spreadsheets()
            .values_get(&self.config.spreadsheet_id, range)
            .add_scope(READONLY_SCOPE)
            .doit()
            .await
            .map_err(|error| {
                let context = fetch_error_context(&error);
                Report::new(error).change_context(context)
            })
            .attach_printable_lazy(|| format!("Failed to fetch values for range {}", range))?;

        let grid = grid_from_value_range(range, value_range)?;
        log::debug!("Fetched {} rows from range '{}'", grid.len(), range);
        Ok(grid)
    }
}

// The token is only requested on the first call, so credential problems surface as MissingToken
fn fetch_error_context(error: &google_sheets4::Error) -> SpreadsheetManagerError {
    match error {
        google_sheets4::Error::MissingToken(_) => SpreadsheetManagerError::AuthenticationFailed,
        _ => SpreadsheetManagerError::FailedToFetchRange,
    }
}

fn grid_from_value_range(
    range: &str,
    value_range: ValueRange,
) -> Result<Grid, SpreadsheetManagerError> {
    let grid = value_range.values.unwrap_or_default().into_grid();
    if grid.is_empty() {
        return Err(report!(SpreadsheetManagerError::EmptyRange))
            .attach_printable_lazy(|| format!("Range {} returned no rows", range));
    }
    Ok(grid)
}
