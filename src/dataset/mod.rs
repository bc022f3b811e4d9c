pub mod coerce;
pub mod preview;
pub mod schema;

use std::collections::HashSet;

use polars::prelude::*;
use thiserror::Error;

use crate::sheets::Grid;
use schema::{Capabilities, KnownColumn};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TabulationError {
    #[error("Grid has no header row")]
    EmptyGrid,
    #[error("Header '{0}' appears more than once")]
    DuplicateHeader(String),
    #[error("Row {sheet_row} has {len} cells but the header has {expected}")]
    RaggedRow {
        sheet_row: usize,
        len: usize,
        expected: usize,
    },
    #[error("Failed to build the table: {0}")]
    Frame(String),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CoercionReport {
    pub amount_missing: Option<usize>,
    pub date_missing: Option<usize>,
}

#[derive(Debug, Clone)]
pub struct Dataset {
    frame: DataFrame,
}

impl Dataset {
    /// Builds the table from a fetched grid. The first row is the header row.
    ///
    /// Rows shorter than the header are padded with nulls; longer rows
    /// are rejected.
    pub fn from_grid(grid: Grid) -> Result<Self, TabulationError> {
        let mut rows = grid.into_iter();
        let headers = rows.next().ok_or(TabulationError::EmptyGrid)?;
        if headers.is_empty() {
            return Err(TabulationError::EmptyGrid);
        }

        let mut seen = HashSet::new();
        if let Some(duplicate) = headers.iter().find(|header| !seen.insert(header.as_str())) {
            return Err(TabulationError::DuplicateHeader(duplicate.clone()));
        }

        let mut cells: Vec<Vec<Option<String>>> = vec![Vec::new(); headers.len()];
        for (index, row) in rows.enumerate() {
            if row.len() > headers.len() {
                return Err(TabulationError::RaggedRow {
                    sheet_row: index + 2,
                    len: row.len(),
                    expected: headers.len(),
                });
            }

            let mut row = row.into_iter();
            for column in cells.iter_mut() {
                column.push(row.next());
            }
        }

        let columns: Vec<Column> = headers
            .iter()
            .zip(cells)
            .map(|(header, cells)| Series::new(header.as_str().into(), cells).into())
            .collect();

        let frame =
            DataFrame::new(columns).map_err(|error| TabulationError::Frame(error.to_string()))?;

        Ok(Dataset { frame })
    }

    pub fn frame(&self) -> &DataFrame {
        &self.frame
    }

    pub fn headers(&self) -> Vec<String> {
        self.frame
            .get_column_names()
            .iter()
            .map(|name| name.to_string())
            .collect()
    }

    pub fn row_count(&self) -> usize {
        self.frame.height()
    }

    pub fn capabilities(&self) -> Capabilities {
        Capabilities::detect(&self.headers())
    }

    pub fn known_column(&self, column: KnownColumn) -> Option<&Series> {
        self.frame
            .column(column.as_ref())
            .ok()
            .map(|column| column.as_materialized_series())
    }

    /// Converts `Amount` to `Float64` and `Date` to `Datetime`, when present.
    /// Cells that do not parse become null. Already-converted columns are left alone.
    pub fn coerce(&mut self, capabilities: &Capabilities) -> PolarsResult<CoercionReport> {
        let mut report = CoercionReport::default();

        if capabilities.has_amount {
            if let Some(amounts) = self.known_column(KnownColumn::Amount) {
                let amounts = match amounts.dtype() {
                    DataType::String => coerce::coerce_numeric(amounts)?,
                    _ => amounts.clone(),
                };
                report.amount_missing = Some(amounts.null_count());
                self.frame.with_column(amounts)?;
            }
        }

        if capabilities.has_date {
            if let Some(dates) = self.known_column(KnownColumn::Date) {
                let dates = match dates.dtype() {
                    DataType::String => coerce::coerce_dates(dates)?,
                    _ => dates.clone(),
                };
                report.date_missing = Some(dates.null_count());
                self.frame.with_column(dates)?;
            }
        }

        Ok(report)
    }
}

#[cfg(test)]
pub(crate) fn grid(rows: &[&[&str]]) -> Grid {
    rows.iter()
        .map(|row| row.iter().map(|cell| cell.to_string()).collect())
        .collect()
}
