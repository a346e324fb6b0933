//! # Radix Map
//!
//! A mutable radix tree (compressed prefix tree) mapping string keys to values.
//!
//! Edges carry whole string labels rather than single characters, so runs of
//! keys with a shared prefix collapse into a single edge. Inserting a key that
//! partially overlaps an existing edge label splits that edge around the
//! shared prefix, and the tree never holds two sibling edges whose labels
//! share a non-empty prefix. That invariant is what makes lookup a single
//! deterministic descent with no backtracking.
//!
//! ## Features
//!
//! - **In-place insertion**: `insert` mutates the tree directly, splitting
//!   edges as needed; a duplicate key simply overwrites its value
//! - **Prefix-compressed lookup**: exact-key search walks one edge per node,
//!   bounded by the key length
//! - **Generic values**: any payload type, with absence expressed as
//!   `Option` rather than a reserved sentinel value
//! - **Subtree operations**: [`Node::insert`] and [`Node::find`] work on any
//!   node, not just the root
//!
//! Keys are matched as literal character sequences. A token like `{id}` is
//! ordinary text, not a pattern; this is a map, not a router.
//!
//! ## Example
//!
//! ```rust
//! use radix_map::Radix;
//!
//! let mut tree = Radix::new();
//!
//! tree.insert("cars/volvo", 1);
//! tree.insert("cars/audi", 2);
//!
//! assert_eq!(tree.get("cars/volvo"), Some(&1));
//! assert_eq!(tree.get("cars/audi"), Some(&2));
//! assert_eq!(tree.get("cars/"), None);
//! ```

pub mod node;
mod radix;
mod util;

// Re-export public types
pub use crate::node::Node;
pub use crate::radix::Radix;
pub use crate::util::left_collision;
