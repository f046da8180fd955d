//! Feature selection by information gain.
use crate::data::dataset::{Dataset, Feature, Instance, Target};
use std::collections::BTreeMap;

/// Picks the feature to split a dataset on, or `None` when no feature is worth splitting on.
///
/// Any `Fn(&Dataset) -> Option<String>` is a selector as well.
pub trait FeatureSelector {
    fn select(&self, dataset: &Dataset) -> Option<String>;
}

impl<F> FeatureSelector for F
where
    F: Fn(&Dataset) -> Option<String>,
{
    fn select(&self, dataset: &Dataset) -> Option<String> {
        self(dataset)
    }
}

/// Selects the candidate with the greatest strictly positive information gain.
///
/// Candidates are the features of the first instance, examined in
/// lexicographic order, so among equal gains the smallest name wins.
#[derive(Clone, Copy, Debug, Default)]
pub struct BestFeatureInformationGain;

impl FeatureSelector for BestFeatureInformationGain {
    fn select(&self, dataset: &Dataset) -> Option<String> {
        let mut greatest_gain = 0.0;
        let mut greatest_feature = None;
        for feature in dataset.feature_names() {
            let gain = information_gain(&dataset.instances, feature);
            if gain > greatest_gain {
                greatest_gain = gain;
                greatest_feature = Some(feature);
            }
        }
        greatest_feature.map(str::to_string)
    }
}

/// Shannon entropy in bits of the target distribution. `instances` must not be empty.
pub fn entropy<'a>(instances: impl IntoIterator<Item = &'a Instance>) -> f64 {
    let mut counts: BTreeMap<Target, usize> = BTreeMap::new();
    let mut total = 0;
    for inst in instances {
        *counts.entry(inst.target).or_insert(0) += 1;
        total += 1;
    }
    debug_assert!(total > 0, "entropy of an empty instance set is undefined");

    -counts
        .values()
        .map(|&count| {
            let p = count as f64 / total as f64;
            p * p.log2()
        })
        .sum::<f64>()
}

/// Reduction in entropy from partitioning `instances` on the observed values of `feature`.
///
/// Instances without the feature form a partition of their own.
pub fn information_gain(instances: &[Instance], feature: &str) -> f64 {
    if instances.is_empty() {
        return 0.0;
    }
    let mut partitions: BTreeMap<Option<Feature>, Vec<&Instance>> = BTreeMap::new();
    for inst in instances {
        partitions
            .entry(inst.feature(feature))
            .or_default()
            .push(inst);
    }

    let total = instances.len() as f64;
    partitions
        .values()
        .fold(entropy(instances), |gain, partition| {
            gain - partition.len() as f64 / total * entropy(partition.iter().copied())
        })
}
