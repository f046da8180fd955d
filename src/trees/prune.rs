//! Reduced Error Pruning.
use super::node::Decision;
use crate::data::dataset::{majority_target, Dataset, Feature, Instance};
use crate::errors::Id3Error;
use crate::metrics::errors::error_rate;
use log::{debug, info, log_enabled, Level};
use std::collections::BTreeMap;

/// Replace subtrees with majority-vote leaves wherever that does not make the
/// whole-tree error on `validation` worse.
///
/// Nodes are addressed by the edge labels leading to them from the root and
/// visited from an explicit stack, each paired with the validation instances
/// that reach it. A rejected replacement is undone and the original child is
/// queued so its own children get a turn. On failure the tree keeps whatever
/// replacements were already made.
pub fn reduced_error_prune(tree: &mut Decision, validation: &Dataset) -> Result<(), Id3Error> {
    if validation.is_empty() {
        return Err(Id3Error::EmptyDataset);
    }
    let initial = if log_enabled!(Level::Info) {
        Some((error_rate(tree, validation)?, tree.leaf_count()))
    } else {
        None
    };

    let mut stack: Vec<(Vec<Feature>, Vec<&Instance>)> =
        vec![(Vec::new(), validation.iter().collect())];
    let mut pruned = 0;

    while let Some((path, applicable)) = stack.pop() {
        let (feature, values) = match tree.descendant_mut(&path) {
            Some(Decision::Internal { feature, children }) => {
                (feature.clone(), children.keys().copied().collect::<Vec<_>>())
            }
            _ => continue,
        };

        let mut partitions: BTreeMap<Feature, Vec<&Instance>> = BTreeMap::new();
        for &inst in &applicable {
            if let Some(value) = inst.feature(&feature) {
                partitions.entry(value).or_default().push(inst);
            }
        }

        for value in values {
            // An unreached child gets `false`, the empty-input majority.
            let subset = partitions.remove(&value).unwrap_or_default();
            let replacement = majority_target(subset.iter().copied());

            let mut child_path = path.clone();
            child_path.push(value);

            let before = error_rate(tree, validation)?;
            let original = swap_node(tree, &child_path, Decision::leaf(replacement), &feature)?;
            let after = error_rate(tree, validation)?;

            if after > before {
                debug!(
                    "Keeping {}[{}]: error would rise from {:.4} to {:.4}",
                    feature, value, before, after
                );
                swap_node(tree, &child_path, original, &feature)?;
                stack.push((child_path, subset));
            } else {
                debug!(
                    "Pruned {}[{}] to {}: error {:.4} -> {:.4}",
                    feature, value, replacement, before, after
                );
                pruned += 1;
            }
        }
    }

    if let Some((initial_error, initial_leaves)) = initial {
        info!(
            "Reduced error pruning made {} replacements, leaves {} -> {}, validation error {:.4} -> {:.4}",
            pruned,
            initial_leaves,
            tree.leaf_count(),
            initial_error,
            error_rate(tree, validation)?
        );
    }
    Ok(())
}

/// Put `node` at `path`, returning what was there.
fn swap_node(
    tree: &mut Decision,
    path: &[Feature],
    node: Decision,
    feature: &str,
) -> Result<Decision, Id3Error> {
    let slot = tree
        .descendant_mut(path)
        .ok_or_else(|| Id3Error::InternalInvariantViolation {
            feature: feature.to_string(),
            value: path.last().copied().unwrap_or_default(),
        })?;
    Ok(std::mem::replace(slot, node))
}
