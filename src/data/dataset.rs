use crate::errors::Id3Error;
use rand::seq::SliceRandom;
use rand::{rngs::StdRng, SeedableRng};
use std::collections::BTreeMap;
use std::fmt::{self, Debug, Formatter};

/// Discrete feature code. Up to 256 distinct values per feature.
pub type Feature = u8;

/// The boolean label being predicted.
pub type Target = bool;

/// A single record: feature name to feature code, plus its label.
///
/// Cloning is a deep copy, the feature map is never shared between clones.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct Instance {
    pub features: BTreeMap<String, Feature>,
    pub target: Target,
}

impl Instance {
    pub fn new(features: BTreeMap<String, Feature>, target: Target) -> Self {
        Self { features, target }
    }

    /// Builds an instance from `(name, code)` pairs.
    pub fn from_pairs<N: Into<String>>(
        pairs: impl IntoIterator<Item = (N, Feature)>,
        target: Target,
    ) -> Self {
        Self {
            features: pairs
                .into_iter()
                .map(|(name, value)| (name.into(), value))
                .collect(),
            target,
        }
    }

    pub fn feature(&self, name: &str) -> Option<Feature> {
        self.features.get(name).copied()
    }

    /// Returns a deep copy of this instance with `name` removed from the feature map.
    pub fn without_feature(&self, name: &str) -> Self {
        let mut clone = self.clone();
        clone.features.remove(name);
        clone
    }
}

/// Fractions of a dataset assigned to the training and validation partitions.
/// Whatever remains goes to the test partition.
#[derive(Clone, Copy, Debug)]
pub struct SplitRatios {
    pub train: f64,
    pub validation: f64,
}

impl SplitRatios {
    pub fn new(train: f64, validation: f64) -> Result<Self, Id3Error> {
        for (name, ratio) in [("train", train), ("validation", validation)] {
            if !(0.0..=1.0).contains(&ratio) {
                return Err(Id3Error::InvalidParameter(
                    name.to_string(),
                    "a ratio between 0.0 and 1.0".to_string(),
                    ratio.to_string(),
                ));
            }
        }
        if train + validation > 1.0 {
            return Err(Id3Error::InvalidParameter(
                "train + validation".to_string(),
                "a sum of at most 1.0".to_string(),
                (train + validation).to_string(),
            ));
        }
        Ok(Self { train, validation })
    }
}

/// An ordered collection of labeled instances. Duplicates are kept.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Dataset {
    pub instances: Vec<Instance>,
}

impl Debug for Dataset {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "Dataset {{")?;
        for instance in &self.instances {
            write!(f, "    [")?;
            for (name, value) in &instance.features {
                write!(f, "{}={}, ", name, value)?;
            }
            writeln!(f, "] -> {}", instance.target)?;
        }
        write!(f, "}}")
    }
}

impl From<Vec<Instance>> for Dataset {
    fn from(instances: Vec<Instance>) -> Self {
        Self::new(instances)
    }
}

impl Dataset {
    pub fn new(instances: Vec<Instance>) -> Self {
        Self { instances }
    }

    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Instance> {
        self.instances.iter()
    }

    pub fn targets(&self) -> Vec<Target> {
        self.instances.iter().map(|inst| inst.target).collect()
    }

    /// Feature names of the first instance, in lexicographic order.
    pub fn feature_names(&self) -> Vec<&str> {
        self.instances
            .first()
            .map(|inst| inst.features.keys().map(String::as_str).collect())
            .unwrap_or_default()
    }

    pub fn shuffle(&mut self, seed: Option<u64>) {
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        self.instances.shuffle(&mut rng);
    }

    /// Shuffles a copy of the dataset and cuts it into train, validation and test partitions.
    pub fn train_validation_test_split(
        &self,
        ratios: SplitRatios,
        seed: Option<u64>,
    ) -> (Self, Self, Self) {
        let mut shuffled = self.clone();
        shuffled.shuffle(seed);

        let n = shuffled.len();
        let train_size = (n as f64 * ratios.train).floor() as usize;
        let validation_size = ((n as f64 * ratios.validation).floor() as usize).min(n - train_size);

        let mut rest = shuffled.instances;
        let mut after_train = rest.split_off(train_size);
        let test = after_train.split_off(validation_size);

        (Self::new(rest), Self::new(after_train), Self::new(test))
    }
}

/// Most frequent target of `instances`; the first value to reach a strictly
/// higher count wins, an empty slice yields `false`.
pub fn majority_target<'a>(instances: impl IntoIterator<Item = &'a Instance>) -> Target {
    let mut counts: BTreeMap<Target, usize> = BTreeMap::new();
    let mut highest_count = 0;
    let mut highest_target = false;
    for inst in instances {
        let count = counts.entry(inst.target).or_insert(0);
        *count += 1;
        if *count > highest_count {
            highest_count = *count;
            highest_target = inst.target;
        }
    }
    highest_target
}
