use chrono::NaiveDate;
use polars::prelude::*;

use crate::dataset::{schema::KnownColumn, Dataset};

/// Days from 0001-01-01 to 1970-01-01, the epoch of polars `Date` values.
const UNIX_EPOCH_DAYS_FROM_CE: i32 = 719_163;

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryCount {
    pub category: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DailyTotal {
    pub date: NaiveDate,
    pub amount: f64,
}

/// Occurrences of each distinct `Category` value, in order of first appearance.
/// Missing cells are not counted. `None` without a `Category` column.
pub fn category_counts(dataset: &Dataset) -> PolarsResult<Option<Vec<CategoryCount>>> {
    if dataset.known_column(KnownColumn::Category).is_none() {
        return Ok(None);
    }

    let category = KnownColumn::Category.as_ref();
    let counts = dataset
        .frame()
        .clone()
        .lazy()
        .filter(col(category).is_not_null())
        .group_by_stable([col(category)])
        .agg([len().alias("count")])
        .collect()?;

    let categories = counts.column(category)?.as_materialized_series().str()?;
    let totals = counts
        .column("count")?
        .as_materialized_series()
        .cast(&DataType::Int64)?;

    Ok(Some(
        categories
            .into_iter()
            .zip(totals.i64()?)
            .filter_map(|(category, count)| {
                Some(CategoryCount {
                    category: category?.to_string(),
                    count: count? as usize,
                })
            })
            .collect(),
    ))
}

/// `Amount` summed per calendar day of `Date`, ascending. Rows with a missing
/// date are dropped; missing amounts add nothing to their day.
pub fn daily_totals(dataset: &Dataset) -> PolarsResult<Option<Vec<DailyTotal>>> {
    let (Some(_), Some(_)) = (
        dataset.known_column(KnownColumn::Date),
        dataset.known_column(KnownColumn::Amount),
    ) else {
        return Ok(None);
    };

    let date = KnownColumn::Date.as_ref();
    let amount = KnownColumn::Amount.as_ref();
    let totals = dataset
        .frame()
        .clone()
        .lazy()
        .filter(col(date).is_not_null())
        .group_by([col(date).dt().date().alias("day")])
        .agg([col(amount).fill_null(lit(0.0)).sum()])
        .sort(["day"], SortMultipleOptions::default())
        .collect()?;

    let days = totals
        .column("day")?
        .as_materialized_series()
        .cast(&DataType::Int32)?;
    let amounts = totals
        .column(amount)?
        .as_materialized_series()
        .cast(&DataType::Float64)?;

    Ok(Some(
        days.i32()?
            .into_iter()
            .zip(amounts.f64()?)
            .filter_map(|(day, amount)| {
                Some(DailyTotal {
                    date: NaiveDate::from_num_days_from_ce_opt(day? + UNIX_EPOCH_DAYS_FROM_CE)?,
                    amount: amount.unwrap_or(0.0),
                })
            })
            .collect(),
    ))
}
