pub mod builder;
pub mod classifier;
pub mod node;
pub mod params;
pub mod paths;
pub mod prune;
pub mod selector;

#[cfg(test)]
pub(crate) mod fixtures;
