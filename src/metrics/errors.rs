use crate::data::dataset::Dataset;
use crate::errors::Id3Error;
use crate::trees::node::Decision;

/// Fraction of `dataset` whose label the tree gets wrong.
///
/// The dataset is only read, so every stored target is the same afterwards.
/// The first classification failure aborts the evaluation.
pub fn error_rate(tree: &Decision, dataset: &Dataset) -> Result<f64, Id3Error> {
    if dataset.is_empty() {
        return Err(Id3Error::EmptyDataset);
    }
    let mut wrong = 0;
    for inst in dataset.iter() {
        if tree.predict(inst)? != inst.target {
            wrong += 1;
        }
    }
    Ok(wrong as f64 / dataset.len() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::dataset::Instance;
    use crate::trees::builder::train;
    use crate::trees::fixtures::{candy, tennis};
    use crate::trees::selector::BestFeatureInformationGain;
    use approx::assert_relative_eq;
    use std::collections::BTreeMap;

    #[test]
    fn test_perfect_fit_on_training_data() {
        let dataset = tennis();
        let tree = train(&dataset, &BestFeatureInformationGain).unwrap();
        assert_eq!(error_rate(&tree, &dataset).unwrap(), 0.0);
    }

    #[test]
    fn test_constant_tree() {
        let dataset = tennis();
        assert_relative_eq!(error_rate(&Decision::leaf(true), &dataset).unwrap(), 5.0 / 14.0);
        assert_relative_eq!(error_rate(&Decision::leaf(false), &dataset).unwrap(), 9.0 / 14.0);
    }

    #[test]
    fn test_targets_unchanged() {
        let dataset = candy();
        let before = dataset.targets();
        let rate = error_rate(&Decision::leaf(true), &dataset).unwrap();
        assert_relative_eq!(rate, 0.5);
        assert_eq!(dataset.targets(), before);
    }

    #[test]
    fn test_failure_is_not_a_rate() {
        let tree = Decision::Internal {
            feature: "sweet".to_string(),
            children: BTreeMap::from([(0, Decision::leaf(false))]),
        };
        let dataset = Dataset::new(vec![
            Instance::from_pairs([("sweet", 0)], false),
            Instance::from_pairs([("sweet", 1)], true),
        ]);
        assert!(matches!(
            error_rate(&tree, &dataset),
            Err(Id3Error::UnknownFeatureValue { value: 1, .. })
        ));
    }

    #[test]
    fn test_empty_dataset() {
        assert!(matches!(
            error_rate(&Decision::leaf(true), &Dataset::default()),
            Err(Id3Error::EmptyDataset)
        ));
    }
}
