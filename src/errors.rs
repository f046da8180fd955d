//! Errors
//!
//! Custom error types used throughout the `rusty-id3` crate.
use thiserror::Error;

use crate::data::dataset::Feature;

/// Errors that can occur while loading data, training, classifying or pruning.
#[derive(Debug, Error)]
pub enum Id3Error {
    /// Training or evaluation was asked to work on zero instances.
    #[error("No instances provided.")]
    EmptyDataset,
    /// The builder produced an empty partition. Signals a logic bug.
    #[error("No instances available to extend tree for feature {feature} with value {value}, this shouldn't be possible.")]
    InternalInvariantViolation { feature: String, value: Feature },
    /// The instance has no value for a feature the tree branches on.
    #[error("No value for feature {feature} in instance.")]
    MissingFeature { feature: String },
    /// The instance value for a feature was never seen at this node during training.
    #[error("No decision node corresponding to instance value of {value} for {feature}.")]
    UnknownFeatureValue { feature: String, value: Feature },
    /// First value is the name of the parameter, second is expected, third is what was passed.
    #[error("Invalid parameter value passed for {0}, expected {1} but {2} provided.")]
    InvalidParameter(String, String, String),
    /// The classifier was used before `fit`.
    #[error("Tree wasn't built yet.")]
    NotFitted,
    /// A metric has no value for the given labels.
    #[error("Metric undefined: {0}")]
    UndefinedMetric(String),
    /// A feature has more distinct tokens than a feature code can hold.
    #[error("Feature {feature} has more than 256 distinct values.")]
    TooManyFeatureValues { feature: String },
    /// A record is shorter than the configured columns.
    #[error("Record {line} has no column {column}.")]
    MissingColumn { line: u64, column: usize },
    #[error("Unable to read data: {0}")]
    Csv(#[from] csv::Error),
    #[error("Unable to read file: {0}")]
    Io(#[from] std::io::Error),
}
