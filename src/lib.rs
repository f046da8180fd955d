//! # Rusty-id3
//!
//! `rusty-id3` trains binary decision trees over discrete features with the ID3
//! algorithm, prunes them with Reduced Error Pruning against held-out data and
//! dumps them as a sorted list of root-to-leaf paths.
//!
//! ## Getting Started
//!
//! To use `rusty-id3`, add the following to your `Cargo.toml` file:
//!
//! ```toml
//! [dependencies]
//! rusty-id3 = "*"
//! ```
//!
//! ## Example Usage
//!
//! Training on a tiny dataset where sweetness alone decides the label:
//!
//! ```rust
//! use rusty_id3::data::dataset::{Dataset, Instance};
//! use rusty_id3::trees::builder::train;
//! use rusty_id3::trees::paths::to_paths;
//! use rusty_id3::trees::selector::BestFeatureInformationGain;
//!
//! let dataset = Dataset::new(vec![
//!     Instance::from_pairs([("salty", 0), ("sweet", 0)], false),
//!     Instance::from_pairs([("salty", 1), ("sweet", 0)], false),
//!     Instance::from_pairs([("salty", 1), ("sweet", 1)], true),
//!     Instance::from_pairs([("salty", 0), ("sweet", 1)], true),
//! ]);
//!
//! let tree = train(&dataset, &BestFeatureInformationGain).unwrap();
//!
//! assert_eq!(to_paths(&tree), vec!["sweet[0] ==> false", "sweet[1] ==> true"]);
//! ```

/// Instances, datasets and their ingestion
pub mod data;
/// Error types
pub mod errors;
/// Functions for evaluating model performance
pub mod metrics;
/// Decision trees
pub mod trees;

pub use errors::Id3Error;
pub use trees::classifier::DecisionTreeClassifier;
pub use trees::node::Decision;
