//! Labeled confusion matrices for binary classifiers.
//!
//! [`nice_conf_mat`] counts every (true, predicted) label pair, names the rows and columns
//! and prints the resulting table before handing it back:
//!
//! ```no_run
//! let table = confmat::nice_conf_mat(&[0, 0, 1, 1], &[0, 1, 1, 1], None, None)?;
//! assert_eq!(table.cell("True Positive", "Predicted Positive"), Some(2));
//! # Ok::<(), confmat::Error>(())
//! ```
pub mod dataset;
pub mod error;
pub mod labels;
pub mod metrics;
pub mod table;

use std::{borrow::Cow, io::Write};

pub use error::{Error, Result};
pub use labels::LabelMap;
pub use metrics::{confusion_matrix, ConfusionMatrix};
pub use table::LabeledConfusionMatrix;

/// Computes the confusion matrix of `y_true` against `y_pred`, prints it to stdout and returns it.
///
/// Rows default to "True Negative"/"True Positive" and columns to
/// "Predicted Negative"/"Predicted Positive" when no mapping is given.
pub fn nice_conf_mat(
    y_true: &[usize],
    y_pred: &[usize],
    row_labels: Option<&LabelMap>,
    column_labels: Option<&LabelMap>,
) -> Result<LabeledConfusionMatrix> {
    let stdout = std::io::stdout();
    nice_conf_mat_to(&mut stdout.lock(), y_true, y_pred, row_labels, column_labels)
}

/// Same as [`nice_conf_mat`], rendering to `out` instead of stdout.
///
/// Nothing is written when the labels are invalid.
pub fn nice_conf_mat_to(
    out: &mut dyn Write,
    y_true: &[usize],
    y_pred: &[usize],
    row_labels: Option<&LabelMap>,
    column_labels: Option<&LabelMap>,
) -> Result<LabeledConfusionMatrix> {
    let counts = metrics::confusion_matrix(y_true, y_pred)?;

    let rows = row_labels.map_or_else(|| Cow::Owned(LabelMap::default_rows()), Cow::Borrowed);
    let columns =
        column_labels.map_or_else(|| Cow::Owned(LabelMap::default_columns()), Cow::Borrowed);

    let table = LabeledConfusionMatrix::new(counts, &rows, &columns);
    writeln!(out, "{table}")?;
    out.flush()?;

    Ok(table)
}
