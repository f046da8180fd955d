use crate::data::dataset::{Feature, Instance, Target};
use crate::errors::Id3Error;
use std::collections::BTreeMap;

/// Decision tree node.
///
/// An `Internal` node branches on one feature and keeps exactly one child per
/// feature value observed in the partition it was trained on. The map key is
/// the edge label leading to the child.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Decision {
    Output(Target),
    Internal {
        feature: String,
        children: BTreeMap<Feature, Decision>,
    },
}

impl Decision {
    pub fn leaf(value: Target) -> Self {
        Decision::Output(value)
    }

    pub fn is_output(&self) -> bool {
        matches!(self, Decision::Output(_))
    }

    /// Label the instance, overwriting its target.
    pub fn classify(&self, instance: &mut Instance) -> Result<(), Id3Error> {
        instance.target = self.predict(instance)?;
        Ok(())
    }

    /// Walk the tree for `instance` without touching it.
    pub fn predict(&self, instance: &Instance) -> Result<Target, Id3Error> {
        let mut node = self;
        loop {
            match node {
                Decision::Output(value) => return Ok(*value),
                Decision::Internal { feature, children } => {
                    let value = instance
                        .feature(feature)
                        .ok_or_else(|| Id3Error::MissingFeature {
                            feature: feature.clone(),
                        })?;
                    node = children
                        .get(&value)
                        .ok_or_else(|| Id3Error::UnknownFeatureValue {
                            feature: feature.clone(),
                            value,
                        })?;
                }
            }
        }
    }

    /// Node reached by following `path` edge labels from here.
    pub fn descendant_mut(&mut self, path: &[Feature]) -> Option<&mut Decision> {
        let mut node = self;
        for value in path {
            node = match node {
                Decision::Internal { children, .. } => children.get_mut(value)?,
                Decision::Output(_) => return None,
            };
        }
        Some(node)
    }

    pub fn leaf_count(&self) -> usize {
        match self {
            Decision::Output(_) => 1,
            Decision::Internal { children, .. } => children.values().map(Self::leaf_count).sum(),
        }
    }

    pub fn node_count(&self) -> usize {
        match self {
            Decision::Output(_) => 1,
            Decision::Internal { children, .. } => {
                1 + children.values().map(Self::node_count).sum::<usize>()
            }
        }
    }

    /// Number of edges on the longest root-to-leaf path.
    pub fn depth(&self) -> usize {
        match self {
            Decision::Output(_) => 0,
            Decision::Internal { children, .. } => {
                1 + children.values().map(Self::depth).max().unwrap_or(0)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn weather_tree() -> Decision {
        Decision::Internal {
            feature: "outlook".to_string(),
            children: BTreeMap::from([
                (1, Decision::leaf(true)),
                (
                    2,
                    Decision::Internal {
                        feature: "humidity".to_string(),
                        children: BTreeMap::from([
                            (0, Decision::leaf(true)),
                            (1, Decision::leaf(false)),
                        ]),
                    },
                ),
            ]),
        }
    }

    #[test]
    fn test_classify_overwrites_target() {
        let tree = weather_tree();
        let mut inst = Instance::from_pairs([("outlook", 2), ("humidity", 1)], true);
        tree.classify(&mut inst).unwrap();
        assert!(!inst.target);
        assert_eq!(inst.features.len(), 2);
    }

    #[test]
    fn test_classify_at_leaf() {
        let mut inst = Instance::from_pairs([("outlook", 9)], false);
        Decision::leaf(true).classify(&mut inst).unwrap();
        assert!(inst.target);
    }

    #[test]
    fn test_missing_feature() {
        let tree = weather_tree();
        let mut inst = Instance::from_pairs([("outlook", 2)], true);
        match tree.classify(&mut inst) {
            Err(Id3Error::MissingFeature { feature }) => assert_eq!(feature, "humidity"),
            other => panic!("unexpected {:?}", other),
        }
        assert!(inst.target);
    }

    #[test]
    fn test_unknown_feature_value() {
        let tree = weather_tree();
        let inst = Instance::from_pairs([("outlook", 0), ("humidity", 0)], true);
        match tree.predict(&inst) {
            Err(Id3Error::UnknownFeatureValue { feature, value }) => {
                assert_eq!(feature, "outlook");
                assert_eq!(value, 0);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_descendant_mut() {
        let mut tree = weather_tree();
        assert!(tree.descendant_mut(&[]).is_some());
        assert!(tree.descendant_mut(&[2, 0]).unwrap().is_output());
        assert!(tree.descendant_mut(&[1, 0]).is_none());
        assert!(tree.descendant_mut(&[3]).is_none());
        *tree.descendant_mut(&[2]).unwrap() = Decision::leaf(false);
        assert_eq!(tree.leaf_count(), 2);
    }

    #[test]
    fn test_tree_statistics() {
        let tree = weather_tree();
        assert_eq!(tree.leaf_count(), 3);
        assert_eq!(tree.node_count(), 5);
        assert_eq!(tree.depth(), 2);
        assert_eq!(Decision::leaf(true).depth(), 0);
    }
}
