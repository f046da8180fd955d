//! ID3 tree induction.
use super::node::Decision;
use super::selector::FeatureSelector;
use crate::data::dataset::{majority_target, Dataset, Feature, Instance};
use crate::errors::Id3Error;
use log::{debug, info, warn};
use std::collections::BTreeMap;

/// Train a tree with no iteration bound.
pub fn train<S: FeatureSelector + ?Sized>(
    dataset: &Dataset,
    selector: &S,
) -> Result<Decision, Id3Error> {
    train_limited(dataset, selector, usize::MAX)
}

/// Train a tree with at most `max_iterations` recursive expansions.
///
/// The budget is shared by the whole tree: every recursive call consumes one
/// unit, and once it reaches zero each node still to be built collapses to a
/// majority-vote leaf.
pub fn train_limited<S: FeatureSelector + ?Sized>(
    dataset: &Dataset,
    selector: &S,
    max_iterations: usize,
) -> Result<Decision, Id3Error> {
    let mut grower = Grower {
        selector,
        budget: max_iterations,
        collapsed: 0,
    };
    let tree = grower.grow(dataset)?;

    if grower.collapsed > 0 {
        warn!(
            "Reached iteration limit of {}, {} impure nodes collapsed to majority leaves.",
            max_iterations, grower.collapsed
        );
    }
    info!(
        "Trained tree on {} instances: {} nodes, {} leaves, depth {}.",
        dataset.len(),
        tree.node_count(),
        tree.leaf_count(),
        tree.depth()
    );
    Ok(tree)
}

struct Grower<'a, S: ?Sized> {
    selector: &'a S,
    budget: usize,
    collapsed: usize,
}

impl<S: FeatureSelector + ?Sized> Grower<'_, S> {
    fn grow(&mut self, dataset: &Dataset) -> Result<Decision, Id3Error> {
        if dataset.is_empty() {
            return Err(Id3Error::EmptyDataset);
        }

        let feature = match self.selector.select(dataset) {
            Some(feature) => feature,
            None => {
                let value = majority_target(&dataset.instances);
                debug!("No useful feature left for {} instances, leaf {}", dataset.len(), value);
                return Ok(Decision::leaf(value));
            }
        };

        let first_target = dataset.instances[0].target;
        let pure = dataset.iter().all(|inst| inst.target == first_target);

        if self.budget == 0 {
            if !pure {
                self.collapsed += 1;
            }
            return Ok(Decision::leaf(majority_target(&dataset.instances)));
        }
        if pure {
            return Ok(Decision::leaf(first_target));
        }

        let buckets = partition_without(dataset, &feature)?;
        debug!(
            "Splitting {} instances on {} into {} branches",
            dataset.len(),
            feature,
            buckets.len()
        );

        let mut children = BTreeMap::new();
        for (value, bucket) in buckets {
            self.budget = self.budget.saturating_sub(1);
            let child = self
                .grow(&Dataset::new(bucket))
                .map_err(|err| match err {
                    Id3Error::EmptyDataset => Id3Error::InternalInvariantViolation {
                        feature: feature.clone(),
                        value,
                    },
                    other => other,
                })?;
            children.insert(value, child);
        }

        Ok(Decision::Internal { feature, children })
    }
}

/// Buckets instances by their value for `feature`, one bucket per observed
/// value. Bucketed instances are clones with `feature` removed.
fn partition_without(
    dataset: &Dataset,
    feature: &str,
) -> Result<BTreeMap<Feature, Vec<Instance>>, Id3Error> {
    let mut buckets: BTreeMap<Feature, Vec<Instance>> = BTreeMap::new();
    for inst in dataset.iter() {
        let value = inst.feature(feature).ok_or_else(|| Id3Error::MissingFeature {
            feature: feature.to_string(),
        })?;
        buckets
            .entry(value)
            .or_default()
            .push(inst.without_feature(feature));
    }
    Ok(buckets)
}
