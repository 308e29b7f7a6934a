use serde::{de::Error as _, Deserialize, Serialize};
use std::{fmt, io::Read};

use crate::{
    labels::LabelMap,
    metrics::{ConfusionMatrix, NUM_CLASSES},
};

/// A confusion matrix with display names for its rows (true labels) and columns (predicted labels).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabeledConfusionMatrix {
    rows: [Box<str>; NUM_CLASSES],
    columns: [Box<str>; NUM_CLASSES],
    counts: ConfusionMatrix,
}

impl LabeledConfusionMatrix {
    /// Attaches row and column names to a matrix. Index `i` gets `labels.resolve(i)`.
    pub fn new(counts: ConfusionMatrix, row_labels: &LabelMap, column_labels: &LabelMap) -> Self {
        Self {
            rows: std::array::from_fn(|i| row_labels.resolve(i).into()),
            columns: std::array::from_fn(|i| column_labels.resolve(i).into()),
            counts,
        }
    }

    #[inline]
    pub fn row_labels(&self) -> &[Box<str>; NUM_CLASSES] {
        &self.rows
    }

    #[inline]
    pub fn column_labels(&self) -> &[Box<str>; NUM_CLASSES] {
        &self.columns
    }

    #[inline]
    pub fn matrix(&self) -> &ConfusionMatrix {
        &self.counts
    }

    /// Looks a cell up by its row and column names.
    pub fn cell(&self, row: &str, column: &str) -> Option<usize> {
        let r = self.rows.iter().position(|l| &**l == row)?;
        let c = self.columns.iter().position(|l| &**l == column)?;
        Some(self.counts.get(r, c))
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Loads a table from a JSON file.
    pub fn load_from_file(file: &mut dyn Read) -> Result<Self, serde_json::Error> {
        let mut buffer = String::new();
        file.read_to_string(&mut buffer)
            .map_err(serde_json::Error::custom)?;
        serde_json::from_str(&buffer)
    }

    /// Saves the table to a JSON file.
    pub fn save_to_file(&self, file: &mut dyn std::io::Write) -> Result<(), serde_json::Error> {
        let serialized = serde_json::to_string(self)?;
        file.write_all(serialized.as_bytes())
            .map_err(serde_json::Error::custom)
    }
}

/// Renders an aligned text grid: row names left-aligned, counts right-aligned under their column name.
impl fmt::Display for LabeledConfusionMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let index_width = self
            .rows
            .iter()
            .map(|l| l.chars().count())
            .max()
            .unwrap_or(0);
        let widths: [usize; NUM_CLASSES] = std::array::from_fn(|c| {
            self.counts
                .counts()
                .iter()
                .map(|row| row[c].to_string().len())
                .chain(std::iter::once(self.columns[c].chars().count()))
                .max()
                .unwrap_or(0)
        });

        write!(f, "{:index_width$}", "")?;
        for (label, width) in self.columns.iter().zip(widths) {
            write!(f, "  {label:>width$}")?;
        }

        for (label, counts) in self.rows.iter().zip(self.counts.counts()) {
            write!(f, "\n{label:<index_width$}")?;
            for (count, width) in counts.iter().zip(widths) {
                write!(f, "  {count:>width$}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> LabeledConfusionMatrix {
        LabeledConfusionMatrix::new(
            ConfusionMatrix::from_counts([[1, 1], [0, 2]]),
            &LabelMap::default_rows(),
            &LabelMap::default_columns(),
        )
    }

    #[test]
    fn renders_grid() {
        let expected = [
            format!("{}  Predicted Negative  Predicted Positive", " ".repeat(13)),
            format!("True Negative  {0}1  {0}1", " ".repeat(17)),
            format!("True Positive  {0}0  {0}2", " ".repeat(17)),
        ]
        .join("\n");
        assert_eq!(sample().to_string(), expected);
    }

    #[test]
    fn wide_counts_stretch_columns() {
        let table = LabeledConfusionMatrix::new(
            ConfusionMatrix::from_counts([[12345, 0], [7, 3]]),
            &LabelMap::from([(0, "n"), (1, "p")]),
            &LabelMap::from([(0, "N"), (1, "P")]),
        );
        assert_eq!(table.to_string(), "       N  P\nn  12345  0\np      7  3");
    }

    #[test]
    fn cell_lookup_by_name() {
        let table = sample();
        assert_eq!(table.cell("True Positive", "Predicted Positive"), Some(2));
        assert_eq!(table.cell("True Negative", "Predicted Positive"), Some(1));
        assert_eq!(table.cell("Nope", "Predicted Positive"), None);
    }

    #[test]
    fn json_shape() {
        let value: serde_json::Value = serde_json::from_str(&sample().to_json().unwrap()).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "rows": ["True Negative", "True Positive"],
                "columns": ["Predicted Negative", "Predicted Positive"],
                "counts": [[1, 1], [0, 2]],
            })
        );
    }

    #[test]
    fn save_and_load() {
        let table = sample();
        let mut buffer = Vec::new();
        table.save_to_file(&mut buffer).unwrap();
        let loaded = LabeledConfusionMatrix::load_from_file(&mut buffer.as_slice()).unwrap();
        assert_eq!(loaded, table);
    }
}
