//! Insertion pipeline
//!
//! **General strategy**: recurse down to the empty link where the value belongs, put a new leaf
//! there, and then fix up each node on the way back to the root: recompute its height and, when
//! rebalancing, correct it if it's now out of balance.

use std::cmp::Ordering;
use std::sync::Arc;

use crate::param::{Rebalance, RebalanceConfig};
use crate::AvlTree;

use super::node::{Link, Node, Side};
use super::rotate::Rotation;

impl<T, P> AvlTree<T, P>
where
    T: Ord + Copy,
    P: RebalanceConfig,
{
    /// Inserts `value`, returning the next version of the tree
    ///
    /// Rebalancing follows the tree's configuration: with [`Auto`], the returned tree satisfies
    /// the AVL invariant; with [`Manual`], any imbalance is left for
    /// [`apply_one_rotation`](Self::apply_one_rotation).
    ///
    /// If `value` is already present, this is a no-op and the same nodes are returned.
    ///
    /// Other versions of the tree -- clones made before this call -- are unaffected.
    ///
    /// [`Auto`]: crate::param::Auto
    /// [`Manual`]: crate::param::Manual
    #[must_use = "`insert` returns the new version of the tree"]
    pub fn insert(self, value: T) -> Self {
        self.insert_with(value, P::MODE)
    }

    /// Like [`insert`](Self::insert), but with rebalancing given explicitly instead of taken from
    /// the tree's configuration
    #[must_use = "`insert_with` returns the new version of the tree"]
    pub fn insert_with(mut self, value: T, mode: Rebalance) -> Self {
        if self.contains(&value) {
            return self;
        }

        debug_log!(len = self.len, ?mode, "inserting new value");

        self.root = Some(insert_into(self.root.take(), value, mode));
        self.len += 1;
        self
    }
}

/// Recursive body of the insertion, returning the new root of the subtree
///
/// A value equal to one already in the subtree leaves it unchanged.
pub(super) fn insert_into<T: Ord + Copy>(link: Link<T>, value: T, mode: Rebalance) -> Arc<Node<T>> {
    let mut node = match link {
        None => return Arc::new(Node::leaf(value)),
        Some(n) => n,
    };

    let went = match value.cmp(&node.value) {
        Ordering::Equal => return node,
        Ordering::Less => Side::Left,
        Ordering::Greater => Side::Right,
    };

    let n = Arc::make_mut(&mut node);
    let child = n.child_mut(went);
    *child = Some(insert_into(child.take(), value, mode));
    n.recompute_height();

    if !mode.is_auto() {
        return node;
    }

    let rotation = Rotation::classify(node.balance_factor(), |heavy| {
        match node.child(heavy) {
            // The new value is somewhere under the heavy child, so it's on the inside exactly when
            // it's on the inner side of that child.
            Some(c) if heavy == went => match heavy {
                Side::Left => value > c.value,
                Side::Right => value < c.value,
            },
            // The imbalance was already here before this insertion (only possible if an earlier
            // mutation skipped rebalancing), so the value says nothing about it.
            _ => node.child_leans_inward(heavy),
        }
    });

    match rotation {
        Some(r) => {
            trace_log!(rotation = r.name(), "rebalancing after insert");
            r.apply(node)
        }
        None => node,
    }
}
