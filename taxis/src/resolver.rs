//! Caller-facing resolution surface
//!
//! Hides how declarations become a graph and how payloads travel through the
//! sort: callers hand in [`Dependent`] items and receive their payloads back
//! in dependency-first order.

use crate::graph::{DepGraph, NodeName, ResolveError, ResolveResult};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// One item to order: a name, the names it depends on, and an opaque payload.
///
/// The payload is handed back untouched in the output order; the resolver
/// only reads the names. `Dependent` deserializes from the obvious wire shape
/// (`depends_on` may be omitted), so data fetched and decoded by an outer
/// layer can map straight onto declarations.
///
/// # Examples
///
/// ```
/// use taxis::Dependent;
///
/// let field = Dependent::new("FullName", 3).depends_on(["FirstName", "LastName"]);
/// assert_eq!(field.name().as_str(), "FullName");
/// assert_eq!(field.dependencies().len(), 2);
/// assert_eq!(*field.payload(), 3);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dependent<T> {
    /// Node name, unique case-insensitively within one input set
    name: NodeName,
    /// Names this item must be preceded by
    #[serde(default)]
    depends_on: Vec<NodeName>,
    /// Caller data carried through resolution
    payload: T,
}

impl<T> Dependent<T> {
    /// Creates a declaration with no dependencies.
    pub fn new(name: impl Into<NodeName>, payload: T) -> Self {
        Self {
            name: name.into(),
            depends_on: Vec::new(),
            payload,
        }
    }

    /// Declares the names this item depends on.
    pub fn depends_on<I, N>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<NodeName>,
    {
        self.depends_on.extend(names.into_iter().map(Into::into));
        self
    }

    /// Returns the node name
    pub fn name(&self) -> &NodeName {
        &self.name
    }

    /// Returns the declared dependency names
    pub fn dependencies(&self) -> &[NodeName] {
        &self.depends_on
    }

    /// Returns a reference to the payload
    pub fn payload(&self) -> &T {
        &self.payload
    }

    /// Consumes the declaration, returning the payload
    pub fn into_payload(self) -> T {
        self.payload
    }
}

/// Dependency resolver with caller-tunable limits.
///
/// A `Resolver` holds no state between calls; each [`resolve`](Self::resolve)
/// builds its own graph snapshot, so one resolver can be shared freely across
/// threads.
///
/// # Examples
///
/// ```
/// use taxis::{Dependent, Resolver};
///
/// let resolver = Resolver::new().with_max_nodes(10_000);
/// let ordered = resolver.resolve(vec![
///     Dependent::new("b", "second").depends_on(["a"]),
///     Dependent::new("a", "first"),
/// ])?;
/// assert_eq!(ordered, vec!["first", "second"]);
/// # Ok::<(), taxis::ResolveError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Resolver {
    /// Upper bound on accepted node count, if any
    max_nodes: Option<usize>,
}

impl Resolver {
    /// Creates a resolver with no node budget.
    pub fn new() -> Self {
        Self::default()
    }

    /// Caps the number of nodes a single call will accept.
    ///
    /// Oversized inputs are rejected up front with
    /// [`ResolveError::TooManyNodes`] instead of being sorted.
    pub fn with_max_nodes(mut self, limit: usize) -> Self {
        self.max_nodes = Some(limit);
        self
    }

    /// Orders `items` so that every item appears after everything it depends
    /// on, returning the payloads in that order.
    ///
    /// The output is a permutation of the input payloads. When several items
    /// are eligible at once, the one declared earliest is placed first, so
    /// equal inputs always produce equal outputs. No partial order is
    /// returned on failure.
    pub fn resolve<T>(
        &self,
        items: impl IntoIterator<Item = Dependent<T>>,
    ) -> ResolveResult<Vec<T>> {
        let items: Vec<Dependent<T>> = items.into_iter().collect();

        if let Some(limit) = self.max_nodes {
            if items.len() > limit {
                return Err(ResolveError::too_many_nodes(items.len(), limit));
            }
        }

        let edges: usize = items.iter().map(|item| item.dependencies().len()).sum();
        debug!(nodes = items.len(), edges, "resolving dependency order");

        let graph = DepGraph::build(
            items
                .iter()
                .map(|item| (item.name(), item.dependencies())),
        )?;
        let order = graph.topo_order()?;

        let mut payloads: Vec<Option<T>> = items
            .into_iter()
            .map(|item| Some(item.into_payload()))
            .collect();
        let ordered = order
            .into_iter()
            .map(|i| {
                payloads[i]
                    .take()
                    .expect("topological order visits every input index exactly once")
            })
            .collect();

        Ok(ordered)
    }
}

/// Orders `items` with default settings. See [`Resolver::resolve`].
///
/// # Examples
///
/// ```
/// use taxis::{resolve, Dependent};
///
/// let ordered = resolve(vec![
///     Dependent::new("Age", "derive age").depends_on(["DateOfBirth"]),
///     Dependent::new("DateOfBirth", "ask for a date"),
/// ])?;
/// assert_eq!(ordered, vec!["ask for a date", "derive age"]);
/// # Ok::<(), taxis::ResolveError>(())
/// ```
pub fn resolve<T>(items: impl IntoIterator<Item = Dependent<T>>) -> ResolveResult<Vec<T>> {
    Resolver::new().resolve(items)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payloads_move_through_unchanged() {
        // Payload type is deliberately not Clone
        struct Step {
            label: &'static str,
        }

        let ordered = resolve(vec![
            Dependent::new("b", Step { label: "second" }).depends_on(["a"]),
            Dependent::new("a", Step { label: "first" }),
        ])
        .unwrap();

        let labels: Vec<&str> = ordered.iter().map(|s| s.label).collect();
        assert_eq!(labels, vec!["first", "second"]);
    }

    #[test]
    fn test_node_budget() {
        let items = || {
            vec![
                Dependent::new("a", 1),
                Dependent::new("b", 2),
                Dependent::new("c", 3),
            ]
        };

        let result = Resolver::new().with_max_nodes(2).resolve(items());
        match result {
            Err(ResolveError::TooManyNodes { nodes, limit }) => {
                assert_eq!(nodes, 3);
                assert_eq!(limit, 2);
            }
            other => panic!("expected TooManyNodes, got {:?}", other),
        }

        // At the budget, resolution proceeds
        let ordered = Resolver::new().with_max_nodes(3).resolve(items()).unwrap();
        assert_eq!(ordered, vec![1, 2, 3]);
    }

    #[test]
    fn test_deserializes_with_depends_on_defaulted() {
        let item: Dependent<u32> = serde_json::from_str(r#"{"name":"a","payload":7}"#).unwrap();
        assert_eq!(item.name().as_str(), "a");
        assert!(item.dependencies().is_empty());
        assert_eq!(*item.payload(), 7);
    }
}
