//! Node identifier type
//!
//! This module defines the NodeName type which identifies an item within a
//! single resolution run. Names compare case-insensitively while the
//! spelling the caller declared is preserved for display and diagnostics.
//!
//! # Design Decision
//!
//! The normalized key is computed once at construction rather than on every
//! comparison:
//! 1. Equality and hashing stay cheap inside the name-to-index map
//! 2. Error messages keep the spelling the caller actually wrote
//! 3. The normalization rule lives in exactly one place

use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

/// Name of a node being ordered, unique within one input set.
///
/// Two names are equal when their Unicode-lowercased forms match, so
/// `"FullName"` and `"fullname"` identify the same node. `Display` and error
/// messages use the declared spelling.
///
/// # Examples
///
/// ```
/// use taxis::NodeName;
///
/// let name = NodeName::new("FullName");
/// assert_eq!(name.as_str(), "FullName");
/// assert_eq!(name, NodeName::new("FULLNAME"));
/// ```
#[derive(Clone, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct NodeName {
    /// The spelling the caller declared
    raw: String,
    /// Lowercased form used for equality and hashing
    key: String,
}

impl NodeName {
    /// Creates a node name from its declared spelling.
    pub fn new(name: impl Into<String>) -> Self {
        let raw = name.into();
        let key = Self::normalize(&raw);
        Self { raw, key }
    }

    /// Lowercases `input` the way node names are compared.
    pub fn normalize(input: &str) -> String {
        input.to_lowercase()
    }

    /// Returns the spelling the name was declared with.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Returns the normalized form used for comparison.
    pub fn normalized(&self) -> &str {
        &self.key
    }
}

impl PartialEq for NodeName {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Hash for NodeName {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key.hash(state);
    }
}

impl fmt::Display for NodeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}

impl fmt::Debug for NodeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeName({})", self.raw)
    }
}

impl From<&str> for NodeName {
    fn from(s: &str) -> Self {
        NodeName::new(s)
    }
}

impl From<String> for NodeName {
    fn from(s: String) -> Self {
        NodeName::new(s)
    }
}

impl From<&NodeName> for NodeName {
    fn from(name: &NodeName) -> Self {
        name.clone()
    }
}

impl From<NodeName> for String {
    fn from(name: NodeName) -> Self {
        name.raw
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_name_creation() {
        let name = NodeName::new("DateOfBirth");
        assert_eq!(name.as_str(), "DateOfBirth");
        assert_eq!(name.normalized(), "dateofbirth");
    }

    #[test]
    fn test_case_insensitive_equality() {
        assert_eq!(NodeName::new("Age"), NodeName::new("AGE"));
        assert_eq!(NodeName::new("Age"), NodeName::new("age"));
        assert_ne!(NodeName::new("Age"), NodeName::new("Ages"));
    }

    #[test]
    fn test_display_preserves_spelling() {
        let name = NodeName::new("FirstName");
        assert_eq!(format!("{}", name), "FirstName");
        assert_eq!(format!("{:?}", name), "NodeName(FirstName)");
    }

    #[test]
    fn test_hash_matches_equality() {
        use std::collections::HashSet;

        let mut set = HashSet::new();
        set.insert(NodeName::new("step_a"));
        set.insert(NodeName::new("STEP_A")); // same node, different spelling
        set.insert(NodeName::new("step_b"));

        assert_eq!(set.len(), 2);
        assert!(set.contains(&NodeName::new("Step_A")));
    }

    #[test]
    fn test_from_string() {
        let name: NodeName = "FullName".into();
        assert_eq!(name.as_str(), "FullName");

        let owned: NodeName = String::from("FullName").into();
        assert_eq!(owned, name);
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let name = NodeName::new("LastName");
        assert_eq!(serde_json::to_string(&name).unwrap(), "\"LastName\"");

        let parsed: NodeName = serde_json::from_str("\"lastname\"").unwrap();
        assert_eq!(parsed, name);
        assert_eq!(parsed.as_str(), "lastname");
    }
}
