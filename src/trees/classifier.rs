//! Decision Tree Classifier
use super::builder::{train, train_limited};
use super::node::Decision;
use super::params::TreeParams;
use super::paths::to_paths;
use super::prune::reduced_error_prune;
use super::selector::{BestFeatureInformationGain, FeatureSelector};
use crate::data::dataset::{Dataset, Instance, Target};
use crate::errors::Id3Error;
use crate::metrics::confusion::ClassificationMetrics;
use crate::metrics::errors::error_rate;

/// ID3 classifier bundling parameters, a feature selector and the fitted tree.
#[derive(Clone, Debug)]
pub struct DecisionTreeClassifier<S: FeatureSelector = BestFeatureInformationGain> {
    root: Option<Decision>,
    tree_params: TreeParams,
    selector: S,
}

impl Default for DecisionTreeClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: FeatureSelector> ClassificationMetrics for DecisionTreeClassifier<S> {}

impl DecisionTreeClassifier {
    /// Creates a classifier with default parameters, splitting on information gain.
    pub fn new() -> Self {
        Self::with_params(TreeParams::new())
    }

    pub fn with_params(tree_params: TreeParams) -> Self {
        Self::with_selector(BestFeatureInformationGain, tree_params)
    }
}

impl<S: FeatureSelector> DecisionTreeClassifier<S> {
    /// Creates a classifier that splits with a custom selector.
    pub fn with_selector(selector: S, tree_params: TreeParams) -> Self {
        Self {
            root: None,
            tree_params,
            selector,
        }
    }

    pub fn params(&self) -> &TreeParams {
        &self.tree_params
    }

    pub fn set_max_iterations(&mut self, max_iterations: Option<usize>) {
        self.tree_params.set_max_iterations(max_iterations)
    }

    pub fn root(&self) -> Option<&Decision> {
        self.root.as_ref()
    }

    /// Builds the tree from `dataset`, pruning against `validation` when one is
    /// given and pruning is enabled.
    ///
    /// # Errors
    ///
    /// Fails on an empty training set, or when pruning hits an instance the
    /// tree cannot classify. A failed prune leaves the partially pruned tree in place.
    pub fn fit(
        &mut self,
        dataset: &Dataset,
        validation: Option<&Dataset>,
    ) -> Result<String, Id3Error> {
        let root = match self.tree_params.max_iterations() {
            Some(limit) => train_limited(dataset, &self.selector, limit)?,
            None => train(dataset, &self.selector)?,
        };
        self.root = Some(root);

        match validation {
            Some(validation) if self.tree_params.prune() => {
                self.prune(validation)?;
                Ok("Finished building and pruning the tree.".into())
            }
            _ => Ok("Finished building the tree.".into()),
        }
    }

    /// Reduced error pruning of the fitted tree.
    pub fn prune(&mut self, validation: &Dataset) -> Result<(), Id3Error> {
        let root = self.root.as_mut().ok_or(Id3Error::NotFitted)?;
        reduced_error_prune(root, validation)
    }

    /// Overwrites the target of `instance` with the tree's prediction.
    pub fn classify(&self, instance: &mut Instance) -> Result<(), Id3Error> {
        self.fitted()?.classify(instance)
    }

    pub fn predict(&self, dataset: &Dataset) -> Result<Vec<Target>, Id3Error> {
        let root = self.fitted()?;
        dataset.iter().map(|inst| root.predict(inst)).collect()
    }

    pub fn error_rate(&self, dataset: &Dataset) -> Result<f64, Id3Error> {
        error_rate(self.fitted()?, dataset)
    }

    pub fn paths(&self) -> Result<Vec<String>, Id3Error> {
        Ok(to_paths(self.fitted()?))
    }

    fn fitted(&self) -> Result<&Decision, Id3Error> {
        self.root.as_ref().ok_or(Id3Error::NotFitted)
    }
}
