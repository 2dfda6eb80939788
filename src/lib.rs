//! # Landis -- a persistent AVL tree you can watch rebalance
//!
//! This crate exports a single tree type -- [`AvlTree`] -- built for teaching tools and
//! visualizers: programs that show a balanced binary search tree *as it is being balanced*. That
//! requirement shapes everything else here.
//!
//! ### Notable features
//!
//! * Persistence -- every insertion, removal, and rotation returns a new version of the tree, and
//!     no version is ever changed once it's been returned. Cloning a tree is O(1), and versions
//!     share every node that neither of them changed.
//! * Manual stepping -- with the [`Manual`](param::Manual) configuration, mutations don't
//!     rebalance. Instead, [`AvlTree::detect_imbalance`] reports which rotation the root needs and
//!     [`AvlTree::apply_one_rotation`] performs exactly that one, so each rotation can be shown on
//!     its own.
//! * One case table -- the automatic rebalancing and the manual stepper pick rotations the same
//!     way, so stepping a tree by hand ends in the same shapes the automatic mode produces.
//! * Read-only node access -- [`AvlTree::root`] hands out [`Node`]s with their value, cached
//!     height, children, and balance factor, which is everything needed to lay the tree out.
//!
//! On top of the tree, the [`history`] and [`session`] modules provide what an interactive
//! front-end usually writes for itself: a timestamped log of operations, and a small controller
//! tying the current tree version to that log.
//!
//! ### Feature flags
//!
//! * `serde` -- `Serialize`/`Deserialize` for trees (as their pre-order sequence of values),
//!     rotations, node summaries, and operation logs
//! * `tracing` -- debug-level events for every mutation and trace-level events for every
//!     rotation, through the [`tracing`](https://docs.rs/tracing) crate
//! * `fuzz` -- exposes the test-only validation methods and the [`mock`] oracle, for the fuzzing
//!     harness in `fuzz/`
//!
//! ### Naming
//!
//! AVL trees are named after their inventors, Georgy Adelson-Velsky and Evgenii Landis. The first
//! name was already taken.

#![deny(unsafe_code)]

#[macro_use]
mod macros;

pub mod error;
pub mod history;
pub mod param;
pub mod session;

#[cfg(feature = "fuzz")]
pub mod mock;
#[cfg(feature = "serde")]
mod serde;
mod tree;

pub use error::StepError;
pub use history::{History, Operation, OperationKind};
pub use session::Session;
pub use tree::{AvlTree, Node, NodeInfo, Rotation};
