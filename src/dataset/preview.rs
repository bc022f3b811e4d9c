use polars::prelude::DataFrame;

use super::Dataset;

impl Dataset {
    pub fn preview(&self, rows: usize) -> DataFrame {
        self.frame.head(Some(rows))
    }
}

#[cfg(test)]
mod tests {
    use crate::dataset::{grid, Dataset};

    #[test]
    fn test_preview_shows_leading_rows() {
        let dataset = Dataset::from_grid(grid(&[
            &["Category", "Amount"],
            &["Food", "12.50"],
            &["Rent"],
        ]))
        .unwrap();

        let preview = dataset.preview(5);
        let printed = preview.to_string();

        assert_eq!(preview.shape(), (2, 2));
        assert!(printed.contains("Category"));
        assert!(printed.contains("Food"));
        assert!(printed.contains("12.50"));
        assert!(printed.contains("null"));
    }

    #[test]
    fn test_preview_truncates() {
        let dataset = Dataset::from_grid(grid(&[&["A"], &["1"], &["2"], &["3"]])).unwrap();

        let preview = dataset.preview(2);

        assert_eq!(preview.height(), 2);
        assert!(!preview.to_string().contains('3'));
    }

    #[test]
    fn test_preview_of_header_only_dataset() {
        let dataset = Dataset::from_grid(grid(&[&["Category", "Amount"]])).unwrap();

        assert_eq!(dataset.preview(5).shape(), (0, 2));
    }
}
