//! Various collections of unit tests
//!
//! Most of the confidence in the pipelines comes from the property tests and from fuzzing. Each
//! failure found that way is added here as a regular unit test.

use crate::param::{Auto, Manual};
use crate::AvlTree;

type AutoTree = AvlTree<i64, Auto>;
type ManualTree = AvlTree<i64, Manual>;

/// Builds a tree by inserting each value in order, validating after every step
fn build<P: crate::param::RebalanceConfig>(values: &[i64]) -> AvlTree<i64, P> {
    let mut tree = AvlTree::new();
    for &v in values {
        tree = tree.insert(v);
        tree.validate();
    }
    tree
}

/// Returns `(value, left value, right value)` for the root
fn root_triple<P>(tree: &AvlTree<i64, P>) -> (i64, Option<i64>, Option<i64>) {
    let root = tree.root().expect("tree should not be empty");
    (
        *root.value(),
        root.left().map(|n| *n.value()),
        root.right().map(|n| *n.value()),
    )
}

/// "Basic" regression tests -- insertion, removal, and stepping
///
/// Generated from the `auto_rebalance` and `manual_steps` fuzz targets.
mod basic;
