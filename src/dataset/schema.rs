use strum::{AsRefStr, EnumIter, IntoEnumIterator};

/// Columns the report knows how to use. The header text must match exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, EnumIter)]
pub enum KnownColumn {
    Category,
    Amount,
    Date,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Capabilities {
    pub has_category: bool,
    pub has_amount: bool,
    pub has_date: bool,
}

impl Capabilities {
    pub fn detect<S: AsRef<str>>(headers: &[S]) -> Self {
        let mut capabilities = Capabilities::default();
        for column in KnownColumn::iter() {
            let present = headers.iter().any(|header| header.as_ref() == column.as_ref());
            match column {
                KnownColumn::Category => capabilities.has_category = present,
                KnownColumn::Amount => capabilities.has_amount = present,
                KnownColumn::Date => capabilities.has_date = present,
            }
        }
        capabilities
    }

    pub fn has(&self, column: KnownColumn) -> bool {
        match column {
            KnownColumn::Category => self.has_category,
            KnownColumn::Amount => self.has_amount,
            KnownColumn::Date => self.has_date,
        }
    }

    pub fn can_chart_categories(&self) -> bool {
        self.has(KnownColumn::Category)
    }

    pub fn can_chart_daily_totals(&self) -> bool {
        self.has(KnownColumn::Date) && self.has(KnownColumn::Amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_all_columns() {
        let capabilities = Capabilities::detect(&["Date", "Category", "Note", "Amount"]);

        assert!(capabilities.has_category);
        assert!(capabilities.has_amount);
        assert!(capabilities.has_date);
        assert!(capabilities.can_chart_categories());
        assert!(capabilities.can_chart_daily_totals());
    }

    #[test]
    fn test_header_match_is_exact() {
        let capabilities = Capabilities::detect(&["category", "Amount ", "Date"]);

        assert!(!capabilities.has(KnownColumn::Category));
        assert!(!capabilities.has(KnownColumn::Amount));
        assert!(capabilities.has(KnownColumn::Date));
        assert!(!capabilities.can_chart_daily_totals());
    }

    #[test]
    fn test_known_column_names() {
        assert_eq!(KnownColumn::Category.as_ref(), "Category");
        assert_eq!(KnownColumn::Amount.as_ref(), "Amount");
        assert_eq!(KnownColumn::Date.as_ref(), "Date");
    }
}
