use crate::data::dataset::Feature;
use crate::errors::Id3Error;
use std::collections::HashMap;

/// Per-feature bijection between raw categorical tokens and feature codes.
///
/// Codes are handed out incrementally: the first token seen for a feature gets
/// 0, the next new one 1, and so on.
#[derive(Clone, Debug, Default)]
pub struct FeatureEncoder {
    codes: HashMap<String, HashMap<String, Feature>>,
    tokens: HashMap<String, Vec<String>>,
}

impl FeatureEncoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the code for `token`, assigning the next unused one if it is new.
    pub fn encode(&mut self, feature: &str, token: &str) -> Result<Feature, Id3Error> {
        if let Some(code) = self.lookup(feature, token) {
            return Ok(code);
        }
        let tokens = self.tokens.entry(feature.to_string()).or_default();
        let code = Feature::try_from(tokens.len()).map_err(|_| Id3Error::TooManyFeatureValues {
            feature: feature.to_string(),
        })?;
        tokens.push(token.to_string());
        self.codes
            .entry(feature.to_string())
            .or_default()
            .insert(token.to_string(), code);
        Ok(code)
    }

    pub fn lookup(&self, feature: &str, token: &str) -> Option<Feature> {
        self.codes.get(feature)?.get(token).copied()
    }

    pub fn decode(&self, feature: &str, code: Feature) -> Option<&str> {
        self.tokens
            .get(feature)?
            .get(code as usize)
            .map(String::as_str)
    }

    /// Number of distinct tokens seen for `feature`.
    pub fn cardinality(&self, feature: &str) -> usize {
        self.tokens.get(feature).map_or(0, Vec::len)
    }
}
