use crate::errors::Id3Error;

#[derive(Clone, Debug)]
pub struct TreeParams {
    /// Shared budget of recursive expansions; `None` trains until every branch is settled.
    pub max_iterations: Option<usize>,
    /// Run reduced error pruning after fitting when a validation set is given.
    pub prune: bool,
}

impl Default for TreeParams {
    fn default() -> Self {
        Self::new()
    }
}

impl TreeParams {
    pub fn new() -> Self {
        Self {
            max_iterations: None,
            prune: true,
        }
    }

    pub fn set_max_iterations(&mut self, max_iterations: Option<usize>) {
        self.max_iterations = max_iterations;
    }

    pub fn set_prune(&mut self, prune: bool) {
        self.prune = prune;
    }

    pub fn max_iterations(&self) -> Option<usize> {
        self.max_iterations
    }

    pub fn prune(&self) -> bool {
        self.prune
    }

    /// Parses a textual iteration limit, `"none"` or `"unbounded"` meaning no limit.
    pub fn parse_max_iterations(value: &str) -> Result<Option<usize>, Id3Error> {
        match value.trim().to_ascii_lowercase().as_str() {
            "none" | "unbounded" => Ok(None),
            other => other.parse::<usize>().map(Some).map_err(|_| {
                Id3Error::InvalidParameter(
                    "max_iterations".to_string(),
                    "a non-negative integer or 'none'".to_string(),
                    value.to_string(),
                )
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let params = TreeParams::new();
        assert_eq!(params.max_iterations(), None);
        assert!(params.prune());
    }

    #[test]
    fn test_parse_max_iterations() {
        assert_eq!(TreeParams::parse_max_iterations("12").unwrap(), Some(12));
        assert_eq!(TreeParams::parse_max_iterations(" None ").unwrap(), None);
        assert_eq!(TreeParams::parse_max_iterations("0").unwrap(), Some(0));
        assert!(matches!(
            TreeParams::parse_max_iterations("-3"),
            Err(Id3Error::InvalidParameter(..))
        ));
    }
}
