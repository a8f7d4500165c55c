//! Dependency graph construction and ordering
//!
//! # Design
//!
//! The graph uses a bidirectional adjacency list over input indices:
//! - `depends_on[i]`: indices of the nodes that `i` requires
//! - `dependents[j]`: indices of the nodes that require `j`
//!
//! Bidirectional access keeps both ordering (which walks dependents while
//! counting down outstanding dependencies) and the inspection queries O(1)
//! per edge, instead of rescanning a full adjacency structure per step.
//!
//! Ordering uses Kahn's algorithm with a min-heap of input indices as the
//! ready set: whenever several nodes are simultaneously eligible, the one
//! declared earliest is placed first. The output is a function of the input
//! alone, never of container iteration order.

use super::error::{ResolveError, ResolveResult};
use super::NodeName;
use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap, HashSet};

/// A directed dependency graph over named nodes, built once per resolution.
///
/// Nodes are addressed by their input index. Names resolve through a
/// normalized-key map, so lookups are case-insensitive; declaration order is
/// preserved for deterministic output.
///
/// The graph is immutable once built. Ordering operates on separate
/// bookkeeping state, so a graph can be sorted or queried any number of
/// times.
///
/// # Example
///
/// ```
/// use taxis::DepGraph;
///
/// let graph = DepGraph::build([
///     ("parse", vec![]),
///     ("check", vec!["parse"]),
///     ("emit", vec!["check"]),
/// ])?;
///
/// assert_eq!(graph.topo_order()?, vec![0, 1, 2]);
/// # Ok::<(), taxis::ResolveError>(())
/// ```
#[derive(Debug, Clone)]
pub struct DepGraph {
    /// Node names in input order
    names: Vec<NodeName>,
    /// For each node, the indices it depends on
    depends_on: Vec<Vec<usize>>,
    /// For each node, the indices that depend on it
    dependents: Vec<Vec<usize>>,
    /// Normalized name to input index
    index: HashMap<String, usize>,
}

impl DepGraph {
    /// Builds a graph from `(name, dependency names)` declarations.
    ///
    /// Returns an error if two declarations collide on a case-insensitive
    /// name, or if a dependency names no declared node. A dependency listed
    /// twice by the same node is stored once. A self-reference is admitted
    /// here; it surfaces as a one-node cycle during ordering.
    pub fn build<I, N, D, DN>(decls: I) -> ResolveResult<Self>
    where
        I: IntoIterator<Item = (N, D)>,
        N: Into<NodeName>,
        D: IntoIterator<Item = DN>,
        DN: Into<NodeName>,
    {
        let decls: Vec<(NodeName, Vec<NodeName>)> = decls
            .into_iter()
            .map(|(name, deps)| (name.into(), deps.into_iter().map(Into::into).collect()))
            .collect();

        let mut names: Vec<NodeName> = Vec::with_capacity(decls.len());
        let mut index: HashMap<String, usize> = HashMap::with_capacity(decls.len());
        for (name, _) in &decls {
            if let Some(&first) = index.get(name.normalized()) {
                return Err(ResolveError::duplicate_name(
                    names[first].clone(),
                    name.clone(),
                ));
            }
            index.insert(name.normalized().to_string(), names.len());
            names.push(name.clone());
        }

        let mut depends_on: Vec<Vec<usize>> = vec![Vec::new(); names.len()];
        let mut dependents: Vec<Vec<usize>> = vec![Vec::new(); names.len()];
        for (node, (name, deps)) in decls.iter().enumerate() {
            for dep in deps {
                let target = match index.get(dep.normalized()) {
                    Some(&target) => target,
                    None => {
                        return Err(ResolveError::unknown_dependency(
                            name.clone(),
                            dep.clone(),
                        ))
                    }
                };

                // Repeated edge: already recorded
                if depends_on[node].contains(&target) {
                    continue;
                }

                depends_on[node].push(target);
                dependents[target].push(node);
            }
        }

        Ok(Self {
            names,
            depends_on,
            dependents,
            index,
        })
    }

    /// Returns the number of nodes in the graph
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns true if the graph has no nodes
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Returns true if a node with this name exists (case-insensitive)
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(&NodeName::normalize(name))
    }

    /// Returns an iterator over all node names in input order
    pub fn names(&self) -> impl Iterator<Item = &NodeName> {
        self.names.iter()
    }

    /// Returns the nodes with no dependencies, in input order
    ///
    /// These are the nodes that can be placed immediately.
    pub fn roots(&self) -> Vec<&NodeName> {
        self.names
            .iter()
            .enumerate()
            .filter(|&(i, _)| self.depends_on[i].is_empty())
            .map(|(_, name)| name)
            .collect()
    }

    /// Returns the nodes nothing depends on, in input order
    pub fn leaves(&self) -> Vec<&NodeName> {
        self.names
            .iter()
            .enumerate()
            .filter(|&(i, _)| self.dependents[i].is_empty())
            .map(|(_, name)| name)
            .collect()
    }

    /// Returns how many distinct nodes `name` depends on
    pub fn dependency_count(&self, name: &str) -> Option<usize> {
        self.position(name).map(|i| self.depends_on[i].len())
    }

    /// Returns how many distinct nodes depend on `name`
    pub fn dependent_count(&self, name: &str) -> Option<usize> {
        self.position(name).map(|i| self.dependents[i].len())
    }

    /// Returns true if the graph admits no linear order
    pub fn has_cycle(&self) -> bool {
        self.topo_order().is_err()
    }

    /// Returns a dependency-respecting ordering of input indices.
    ///
    /// Every node appears after all of its dependencies. Among
    /// simultaneously eligible nodes the lowest input index is placed first,
    /// so the result is a deterministic permutation of `0..len()`.
    ///
    /// Fails with [`ResolveError::CyclicDependency`] when nodes remain that
    /// can never become eligible.
    pub fn topo_order(&self) -> ResolveResult<Vec<usize>> {
        if self.is_empty() {
            return Ok(Vec::new());
        }

        // Outstanding = dependencies not yet placed. Eligible nodes sit in a
        // min-heap keyed by input index, which is the tie-break rule.
        let mut outstanding: Vec<usize> = self.depends_on.iter().map(Vec::len).collect();
        let mut ready: BinaryHeap<Reverse<usize>> = BinaryHeap::new();
        for (node, &count) in outstanding.iter().enumerate() {
            if count == 0 {
                ready.push(Reverse(node));
            }
        }

        let mut order: Vec<usize> = Vec::with_capacity(self.len());
        while let Some(Reverse(node)) = ready.pop() {
            order.push(node);

            for &dependent in &self.dependents[node] {
                outstanding[dependent] -= 1;
                if outstanding[dependent] == 0 {
                    ready.push(Reverse(dependent));
                }
            }
        }

        if order.len() != self.len() {
            let mut placed = vec![false; self.len()];
            for &node in &order {
                placed[node] = true;
            }
            let remaining: Vec<NodeName> = (0..self.len())
                .filter(|&node| !placed[node])
                .map(|node| self.names[node].clone())
                .collect();
            return Err(ResolveError::cyclic(self.find_cycle(&placed), remaining));
        }

        Ok(order)
    }

    /// Returns the unplaced nodes whose dependencies are all placed.
    ///
    /// Supports staged placement: callers placing items incrementally can ask
    /// which nodes are unblocked given the set placed so far. Membership in
    /// `placed` is case-insensitive; the result is in input order.
    pub fn ready(&self, placed: &HashSet<NodeName>) -> Vec<&NodeName> {
        let mut eligible = Vec::new();

        for (node, name) in self.names.iter().enumerate() {
            if placed.contains(name) {
                continue;
            }

            let unblocked = self.depends_on[node]
                .iter()
                .all(|&dep| placed.contains(&self.names[dep]));
            if unblocked {
                eligible.push(name);
            }
        }

        eligible
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.index.get(&NodeName::normalize(name)).copied()
    }

    /// Extracts one representative cycle from the unresolved remainder.
    ///
    /// Every unplaced node still has at least one unplaced dependency, so
    /// walking first unplaced dependencies from any unplaced node must
    /// revisit a node within `len` steps; the path from that node's first
    /// visit onward is the cycle.
    fn find_cycle(&self, placed: &[bool]) -> Vec<NodeName> {
        let start = match (0..self.len()).find(|&node| !placed[node]) {
            Some(start) => start,
            None => return Vec::new(),
        };

        let mut seen_at: HashMap<usize, usize> = HashMap::new();
        let mut path: Vec<usize> = Vec::new();
        let mut current = start;
        loop {
            if let Some(&first_visit) = seen_at.get(&current) {
                return path[first_visit..]
                    .iter()
                    .map(|&node| self.names[node].clone())
                    .collect();
            }
            seen_at.insert(current, path.len());
            path.push(current);
            current = self.depends_on[current]
                .iter()
                .copied()
                .find(|&dep| !placed[dep])
                // no unplaced dependency cannot happen here; falling back to
                // `current` closes the walk on the next iteration
                .unwrap_or(current);
        }
    }
}
