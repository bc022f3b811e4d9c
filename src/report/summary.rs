use std::fmt::{Display, Formatter};

use polars::prelude::*;

use crate::dataset::{schema::KnownColumn, Dataset};

#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub row_count: usize,
    pub total_amount: Option<f64>,
}

impl Summary {
    pub fn from_dataset(dataset: &Dataset) -> PolarsResult<Self> {
        let total_amount = match dataset.known_column(KnownColumn::Amount) {
            Some(amounts) => Some(amounts.f64()?.sum().unwrap_or(0.0)),
            None => None,
        };

        Ok(Summary {
            row_count: dataset.row_count(),
            total_amount,
        })
    }
}

impl Display for Summary {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Total Rows: {}", self.row_count)?;
        if let Some(total) = self.total_amount {
            write!(f, "\nTotal Amount: {}", format_currency(total))?;
        }
        Ok(())
    }
}

/// `1234.5` -> `$1,234.50`, `-1234.5` -> `$-1,234.50`
pub fn format_currency(value: f64) -> String {
    if value.is_nan() {
        return "$nan".to_string();
    }
    if value.is_infinite() {
        return format!("${}inf", if value < 0.0 { "-" } else { "" });
    }

    let fixed = format!("{:.2}", value);
    let (sign, digits) = match fixed.strip_prefix('-') {
        Some(digits) => ("-", digits),
        None => ("", fixed.as_str()),
    };
    let (integer, fraction) = digits.split_once('.').unwrap_or((digits, "00"));

    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);
    for (index, digit) in integer.chars().enumerate() {
        if index > 0 && (integer.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    format!("${}{}.{}", sign, grouped, fraction)
}
