use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Number of classes handled by the matrix. Binary classification only.
pub const NUM_CLASSES: usize = 2;

/// A binary confusion matrix. Rows are indexed by the true label, columns by the predicted one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConfusionMatrix([[usize; NUM_CLASSES]; NUM_CLASSES]);

impl ConfusionMatrix {
    /// Builds a matrix from raw counts, `counts[actual][predicted]`.
    pub fn from_counts(counts: [[usize; NUM_CLASSES]; NUM_CLASSES]) -> Self {
        Self(counts)
    }

    /// Count of samples with the given true and predicted labels.
    ///
    /// Panics if either label is not 0 or 1.
    #[inline]
    pub fn get(&self, actual: usize, predicted: usize) -> usize {
        self.0[actual][predicted]
    }

    #[inline]
    pub fn counts(&self) -> &[[usize; NUM_CLASSES]; NUM_CLASSES] {
        &self.0
    }

    /// Total number of samples.
    pub fn total(&self) -> usize {
        self.0.iter().flatten().sum()
    }

    pub fn true_negatives(&self) -> usize {
        self.0[0][0]
    }

    pub fn false_positives(&self) -> usize {
        self.0[0][1]
    }

    pub fn false_negatives(&self) -> usize {
        self.0[1][0]
    }

    pub fn true_positives(&self) -> usize {
        self.0[1][1]
    }

    /// Sum of the counts for each true label.
    pub fn row_sums(&self) -> [usize; NUM_CLASSES] {
        self.0.map(|row| row.iter().sum())
    }

    /// Sum of the counts for each predicted label.
    pub fn column_sums(&self) -> [usize; NUM_CLASSES] {
        std::array::from_fn(|col| self.0.iter().map(|row| row[col]).sum())
    }

    /// Share of correctly classified samples, `None` for an empty matrix.
    pub fn accuracy(&self) -> Option<f64> {
        let total_correct: usize = self.0.iter().enumerate().map(|(i, row)| row[i]).sum();
        ratio(total_correct, self.total())
    }

    /// Precision of the positive class.
    pub fn precision(&self) -> Option<f64> {
        ratio(self.true_positives(), self.column_sums()[1])
    }

    /// Recall of the positive class.
    pub fn recall(&self) -> Option<f64> {
        ratio(self.true_positives(), self.row_sums()[1])
    }

    /// Harmonic mean of precision and recall.
    pub fn f1_score(&self) -> Option<f64> {
        let (p, r) = (self.precision()?, self.recall()?);
        if p + r == 0.0 {
            return None;
        }
        Some(2.0 * p * r / (p + r))
    }
}

#[inline]
fn ratio(num: usize, den: usize) -> Option<f64> {
    (den != 0).then(|| num as f64 / den as f64)
}

/// Compute the confusion matrix from a list of true and predicted binary labels.
pub fn confusion_matrix(y_true: &[usize], y_pred: &[usize]) -> Result<ConfusionMatrix> {
    if y_true.len() != y_pred.len() {
        return Err(Error::InvalidInput(format!(
            "found input variables with inconsistent numbers of samples: y_true has {}, y_pred has {}",
            y_true.len(),
            y_pred.len()
        )));
    }

    let mut matrix = [[0usize; NUM_CLASSES]; NUM_CLASSES];

    for (idx, (&t, &p)) in y_true.iter().zip(y_pred.iter()).enumerate() {
        if t >= NUM_CLASSES || p >= NUM_CLASSES {
            return Err(Error::InvalidInput(format!(
                "labels must be 0 or 1, got y_true={t}, y_pred={p} at position {idx}"
            )));
        }
        matrix[t][p] += 1;
    }

    log::debug!("confusion matrix over {} samples: {:?}", y_true.len(), matrix);

    Ok(ConfusionMatrix(matrix))
}
