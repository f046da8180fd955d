//! Canonical path dump of a tree.
//!
//! Each leaf yields one line `feature[value] ==> ... ==> output`, and the lines
//! are sorted so trees with the same structure compare equal.
use super::node::Decision;
use std::fmt::{self, Display, Formatter};

const SEPARATOR: &str = " ==> ";

pub fn to_paths(tree: &Decision) -> Vec<String> {
    let mut paths = Vec::with_capacity(tree.leaf_count());
    let mut prefix = Vec::new();
    collect_paths(tree, &mut prefix, &mut paths);
    paths.sort();
    paths
}

fn collect_paths(node: &Decision, prefix: &mut Vec<String>, paths: &mut Vec<String>) {
    match node {
        Decision::Output(value) => {
            let mut path = prefix.join(SEPARATOR);
            if !path.is_empty() {
                path.push_str(SEPARATOR);
            }
            path.push_str(&value.to_string());
            paths.push(path);
        }
        Decision::Internal { feature, children } => {
            for (value, child) in children {
                prefix.push(format!("{}[{}]", feature, value));
                collect_paths(child, prefix, paths);
                prefix.pop();
            }
        }
    }
}

impl Display for Decision {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for path in to_paths(self) {
            writeln!(f, "{}", path)?;
        }
        Ok(())
    }
}
