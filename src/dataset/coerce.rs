use std::borrow::Cow;

use polars::prelude::*;

const DATE_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y/%m/%d %H:%M:%S",
    "%m/%d/%Y %H:%M:%S",
];

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y", "%d %b %Y", "%b %d, %Y"];

fn trimmed(column: &Series) -> PolarsResult<StringChunked> {
    Ok(column
        .str()?
        .apply(|cell| cell.map(|value| Cow::Borrowed(value.trim()))))
}

/// Casts a text column to `Float64`. Anything that is not a number, `NaN` included, becomes null.
pub fn coerce_numeric(column: &Series) -> PolarsResult<Series> {
    let numbers = trimmed(column)?.into_series().cast(&DataType::Float64)?;
    let numbers: Float64Chunked = numbers
        .f64()?
        .into_iter()
        .map(|value| value.filter(|value| !value.is_nan()))
        .collect();

    Ok(numbers.with_name(column.name().clone()).into_series())
}

/// Parses a text column into millisecond `Datetime`s, trying each known layout
/// in turn. Date-only values land on midnight; the rest become null.
pub fn coerce_dates(column: &Series) -> PolarsResult<Series> {
    let text = trimmed(column)?;
    let ambiguous = StringChunked::full("ambiguous".into(), "raise", text.len());
    let mut millis: Vec<Option<i64>> = vec![None; text.len()];

    let date_times = DATE_TIME_FORMATS.iter().copied().map(|format| {
        text.as_datetime(
            Some(format),
            TimeUnit::Milliseconds,
            false,
            false,
            None,
            &ambiguous,
        )
        .map(|parsed| parsed.into_series())
    });
    let dates = DATE_FORMATS.iter().copied().map(|format| {
        text.as_date(Some(format), false)
            .map(|parsed| parsed.into_series())
    });

    for parsed in date_times.chain(dates) {
        if millis.iter().all(Option::is_some) {
            break;
        }

        let parsed = parsed?
            .cast(&DataType::Datetime(TimeUnit::Milliseconds, None))?
            .cast(&DataType::Int64)?;
        for (slot, value) in millis.iter_mut().zip(parsed.i64()?) {
            if slot.is_none() {
                *slot = value;
            }
        }
    }

    Series::new(column.name().clone(), millis)
        .cast(&DataType::Datetime(TimeUnit::Milliseconds, None))
}

#[cfg(test)]
pub(crate) fn date_times(column: &Series) -> Vec<Option<chrono::NaiveDateTime>> {
    column
        .cast(&DataType::Int64)
        .unwrap()
        .i64()
        .unwrap()
        .into_iter()
        .map(|millis| {
            millis
                .and_then(chrono::DateTime::from_timestamp_millis)
                .map(|value| value.naive_utc())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime};

    fn text(cells: &[Option<&str>]) -> Series {
        Series::new(
            "cells".into(),
            cells
                .iter()
                .map(|cell| cell.map(str::to_string))
                .collect::<Vec<_>>(),
        )
    }

    fn numbers(cells: &[Option<&str>]) -> Vec<Option<f64>> {
        coerce_numeric(&text(cells))
            .unwrap()
            .f64()
            .unwrap()
            .into_iter()
            .collect()
    }

    fn dates(cells: &[Option<&str>]) -> Vec<Option<NaiveDateTime>> {
        date_times(&coerce_dates(&text(cells)).unwrap())
    }

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> Option<NaiveDateTime> {
        NaiveDate::from_ymd_opt(y, m, d).and_then(|date| date.and_hms_opt(h, min, 0))
    }

    #[test]
    fn test_coerce_numeric() {
        assert_eq!(
            numbers(&[Some("12.50"), Some(" 7 "), Some("-3"), Some("1e3"), Some("0")]),
            vec![Some(12.5), Some(7.0), Some(-3.0), Some(1000.0), Some(0.0)]
        );
    }

    #[test]
    fn test_coerce_numeric_missing() {
        assert_eq!(
            numbers(&[Some("abc"), Some(""), Some("NaN"), Some("$12"), Some("1,234"), None]),
            vec![None; 6]
        );
    }

    #[test]
    fn test_coerce_numeric_keeps_name() {
        let numbers = coerce_numeric(&text(&[Some("1")])).unwrap();

        assert_eq!(numbers.name().as_str(), "cells");
        assert_eq!(numbers.dtype(), &DataType::Float64);
    }

    #[test]
    fn test_coerce_date_only() {
        let midnight = at(2024, 1, 1, 0, 0);

        assert_eq!(
            dates(&[Some("2024-01-01"), Some("2024/01/01"), Some("01/01/2024")]),
            vec![midnight; 3]
        );
    }

    #[test]
    fn test_coerce_date_time() {
        let expected = at(2024, 3, 5, 14, 30);

        assert_eq!(
            dates(&[
                Some("2024-03-05 14:30:00"),
                Some("2024-03-05T14:30:00"),
                Some(" 2024-03-05 14:30 "),
            ]),
            vec![expected; 3]
        );
    }

    #[test]
    fn test_coerce_date_mixed_layouts_in_one_column() {
        assert_eq!(
            dates(&[Some("2024-01-02"), Some("2024-01-01 18:00:00")]),
            vec![at(2024, 1, 2, 0, 0), at(2024, 1, 1, 18, 0)]
        );
    }

    #[test]
    fn test_coerce_date_missing() {
        assert_eq!(
            dates(&[Some(""), Some("yesterday"), Some("2024-02-30"), None]),
            vec![None; 4]
        );
    }
}
