//! Taxis: Deterministic Dependency Ordering
//!
//! `taxis` (τάξις, Greek for "order" or "arrangement") is a dependency-ordering
//! engine: hand it named items that declare which other items they depend on,
//! and it returns the payloads in an order where every item follows everything
//! it depends on, or a typed error explaining why no such order exists.
//!
//! # Features
//!
//! - **Case-insensitive identity**: `"FullName"` and `"fullname"` name the
//!   same node; the declared spelling is preserved in diagnostics
//! - **Deterministic output**: among simultaneously eligible nodes the one
//!   declared first wins, so equal inputs always produce equal outputs
//! - **Typed failures**: duplicate names, unknown dependencies, cycles, and
//!   oversized inputs are distinct inspectable errors; cycle errors carry a
//!   representative path and the full unresolved set
//! - **Payload-generic**: the engine orders opaque payloads and never reads
//!   them
//!
//! # Quick Start
//!
//! ```
//! use taxis::{resolve, Dependent};
//!
//! let fields = vec![
//!     Dependent::new("FirstName", "first"),
//!     Dependent::new("FullName", "full").depends_on(["FirstName", "LastName"]),
//!     Dependent::new("LastName", "last"),
//! ];
//!
//! let ordered = resolve(fields)?;
//! assert_eq!(ordered, vec!["first", "last", "full"]);
//! # Ok::<(), taxis::ResolveError>(())
//! ```
//!
//! # Module Organization
//!
//! Each module hides a design decision that is likely to change:
//!
//! - [`graph`]: graph representation and ordering algorithm (hides the
//!   adjacency layout and the ready-set structure)
//! - [`resolver`]: caller-facing surface (hides how payloads travel through
//!   the sort)
//!
//! # Concurrency
//!
//! Resolution is synchronous, performs no I/O, and holds no shared state;
//! every call owns its graph snapshot, so concurrent calls from multiple
//! threads need no locking.

pub mod graph;
pub mod resolver;

pub use graph::{DepGraph, NodeName, ResolveError, ResolveResult};
pub use resolver::{resolve, Dependent, Resolver};
