//! Error types for dependency resolution
//!
//! This module hides error representation details and provides a unified
//! error type for graph construction and ordering.

use super::NodeName;
use thiserror::Error;

/// Result type for resolution operations
pub type ResolveResult<T> = Result<T, ResolveError>;

/// Errors that can occur while building or ordering a dependency graph
#[derive(Debug, Error, Clone)]
#[non_exhaustive]
pub enum ResolveError {
    /// Two input items collide on their case-insensitive name
    #[error("duplicate node name: '{second}' is already declared as '{first}'")]
    DuplicateName {
        /// Spelling of the earlier declaration
        first: NodeName,
        /// Spelling of the later, colliding declaration
        second: NodeName,
    },

    /// A declared dependency does not exist among the inputs
    #[error("node '{node}' depends on unknown node '{dependency}'")]
    UnknownDependency {
        /// The node that declared the dependency
        node: NodeName,
        /// The dependency name that did not resolve
        dependency: NodeName,
    },

    /// The graph admits no linear order
    #[error("cyclic dependency detected: {} ({} nodes unresolved)", render_cycle(.cycle), .remaining.len())]
    CyclicDependency {
        /// A representative cycle: each node depends on the next, and the
        /// last depends on the first
        cycle: Vec<NodeName>,
        /// Every node left unresolved when ordering stalled, in input order
        remaining: Vec<NodeName>,
    },

    /// The input exceeds the configured node budget
    #[error("input has {nodes} nodes, exceeding the limit of {limit}")]
    TooManyNodes {
        /// Number of nodes in the input
        nodes: usize,
        /// Configured upper bound
        limit: usize,
    },
}

impl ResolveError {
    /// Creates a duplicate name error from both declared spellings
    pub fn duplicate_name(first: NodeName, second: NodeName) -> Self {
        Self::DuplicateName { first, second }
    }

    /// Creates an unknown dependency error
    pub fn unknown_dependency(node: NodeName, dependency: NodeName) -> Self {
        Self::UnknownDependency { node, dependency }
    }

    /// Creates a cyclic dependency error from a representative cycle and the
    /// full unresolved remainder
    pub fn cyclic(cycle: Vec<NodeName>, remaining: Vec<NodeName>) -> Self {
        Self::CyclicDependency { cycle, remaining }
    }

    /// Creates a node budget error
    pub fn too_many_nodes(nodes: usize, limit: usize) -> Self {
        Self::TooManyNodes { nodes, limit }
    }
}

fn render_cycle(cycle: &[NodeName]) -> String {
    match cycle.first() {
        Some(first) => {
            let mut path = String::new();
            for name in cycle {
                path.push_str(name.as_str());
                path.push_str(" -> ");
            }
            path.push_str(first.as_str());
            path
        }
        None => String::from("(no cycle path recorded)"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_display_closes_the_loop() {
        let err = ResolveError::cyclic(
            vec![NodeName::new("a"), NodeName::new("b"), NodeName::new("c")],
            vec![NodeName::new("a"), NodeName::new("b"), NodeName::new("c")],
        );
        assert_eq!(
            err.to_string(),
            "cyclic dependency detected: a -> b -> c -> a (3 nodes unresolved)"
        );
    }

    #[test]
    fn test_duplicate_name_display_keeps_both_spellings() {
        let err = ResolveError::duplicate_name(NodeName::new("Age"), NodeName::new("AGE"));
        assert_eq!(
            err.to_string(),
            "duplicate node name: 'AGE' is already declared as 'Age'"
        );
    }
}
