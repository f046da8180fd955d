use crate::data::dataset::Target;
use crate::errors::Id3Error;
use nalgebra::DMatrix;

/// Rows are actual labels, columns predicted labels, `false` first.
pub type ConfusionMatrix = DMatrix<usize>;

fn index(label: Target) -> usize {
    usize::from(label)
}

pub trait ClassificationMetrics {
    /// Computes the confusion matrix based on the true labels and predicted labels.
    ///
    /// # Arguments
    ///
    /// * `y_true` - The true labels.
    /// * `y_pred` - The predicted labels.
    ///
    /// # Returns
    ///
    /// The 2x2 confusion matrix, or an error if the label slices differ in length.
    fn confusion_matrix(
        &self,
        y_true: &[Target],
        y_pred: &[Target],
    ) -> Result<ConfusionMatrix, Id3Error> {
        if y_true.len() != y_pred.len() {
            return Err(Id3Error::InvalidParameter(
                "y_pred".to_string(),
                format!("{} labels", y_true.len()),
                y_pred.len().to_string(),
            ));
        }

        let mut matrix = DMatrix::zeros(2, 2);
        for (&y_t, &y_p) in y_true.iter().zip(y_pred.iter()) {
            matrix[(index(y_t), index(y_p))] += 1;
        }
        Ok(matrix)
    }

    /// Share of labels predicted correctly.
    fn accuracy(&self, y_true: &[Target], y_pred: &[Target]) -> Result<f64, Id3Error> {
        let matrix = self.confusion_matrix(y_true, y_pred)?;
        if y_true.is_empty() {
            return Err(Id3Error::UndefinedMetric("accuracy of no labels".to_string()));
        }
        Ok(matrix.trace() as f64 / y_true.len() as f64)
    }

    /// Share of `true` predictions that are correct; 0 when nothing is predicted `true`.
    fn precision(&self, y_true: &[Target], y_pred: &[Target]) -> Result<f64, Id3Error> {
        let matrix = self.confusion_matrix(y_true, y_pred)?;
        let tp = matrix[(1, 1)];
        let fp = matrix[(0, 1)];
        if tp + fp == 0 {
            return Ok(0.0);
        }
        Ok(tp as f64 / (tp + fp) as f64)
    }

    /// Share of actual `true` labels that are found; 0 when there are none.
    fn recall(&self, y_true: &[Target], y_pred: &[Target]) -> Result<f64, Id3Error> {
        let matrix = self.confusion_matrix(y_true, y_pred)?;
        let tp = matrix[(1, 1)];
        let fn_ = matrix[(1, 0)];
        if tp + fn_ == 0 {
            return Ok(0.0);
        }
        Ok(tp as f64 / (tp + fn_) as f64)
    }

    fn f1_score(&self, y_true: &[Target], y_pred: &[Target]) -> Result<f64, Id3Error> {
        let precision = self.precision(y_true, y_pred)?;
        let recall = self.recall(y_true, y_pred)?;

        match (precision + recall).abs() < f64::EPSILON {
            true => Err(Id3Error::UndefinedMetric(
                "precision and recall are both 0, F1 score undefined".to_string(),
            )),
            false => Ok(2.0 * (precision * recall) / (precision + recall)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct MockClassifier;

    impl ClassificationMetrics for MockClassifier {}

    const Y_TRUE: [bool; 5] = [true, false, true, false, true];
    const Y_PRED: [bool; 5] = [true, true, false, false, true];

    #[test]
    fn test_confusion_matrix() {
        let result = MockClassifier.confusion_matrix(&Y_TRUE, &Y_PRED).unwrap();
        let expected = DMatrix::from_row_slice(2, 2, &[1, 1, 1, 2]);
        assert_eq!(result, expected);
    }

    #[test]
    fn test_confusion_matrix_unequal() {
        let result = MockClassifier.confusion_matrix(&Y_TRUE, &Y_PRED[..4]);
        assert!(result.is_err());
    }

    #[test]
    fn test_accuracy() {
        assert_eq!(MockClassifier.accuracy(&Y_TRUE, &Y_PRED).unwrap(), 0.6);
        assert_eq!(MockClassifier.accuracy(&Y_TRUE, &Y_TRUE).unwrap(), 1.0);
        assert!(MockClassifier.accuracy(&[], &[]).is_err());
    }

    #[test]
    fn test_precision_and_recall() {
        assert_eq!(MockClassifier.precision(&Y_TRUE, &Y_PRED).unwrap(), 2.0 / 3.0);
        assert_eq!(MockClassifier.recall(&Y_TRUE, &Y_PRED).unwrap(), 2.0 / 3.0);
    }

    #[test]
    fn test_no_positive_predictions() {
        let y_true = [true; 5];
        let y_pred = [false; 5];
        assert_eq!(MockClassifier.precision(&y_true, &y_pred).unwrap(), 0.0);
        assert_eq!(MockClassifier.recall(&y_true, &y_pred).unwrap(), 0.0);
        assert!(MockClassifier.f1_score(&y_true, &y_pred).is_err());
    }

    #[test]
    fn test_f1_score() {
        let result = MockClassifier.f1_score(&Y_TRUE, &Y_PRED).unwrap();
        assert!((result - 2.0 / 3.0).abs() < 1e-12);
    }
}
