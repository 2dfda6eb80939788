//! Removal pipeline
//!
//! Unlike insertion, there's no inserted value to say which way the path went below an
//! imbalanced node, so every correction here is chosen from the heavy child's current balance
//! factor -- the same way the manual stepper chooses.

use std::cmp::Ordering;
use std::sync::Arc;

use crate::param::{Rebalance, RebalanceConfig};
use crate::AvlTree;

use super::node::Link;

impl<T, P> AvlTree<T, P>
where
    T: Ord + Copy,
    P: RebalanceConfig,
{
    /// Removes `value`, returning the next version of the tree
    ///
    /// A node with two children is replaced by its in-order successor, so the node that's
    /// physically removed always has at most one child. Rebalancing follows the tree's
    /// configuration, as with [`insert`](Self::insert).
    ///
    /// If `value` isn't present, this is a no-op and the same nodes are returned.
    #[must_use = "`remove` returns the new version of the tree"]
    pub fn remove(self, value: &T) -> Self {
        self.remove_with(value, P::MODE)
    }

    /// Like [`remove`](Self::remove), but with rebalancing given explicitly instead of taken from
    /// the tree's configuration
    #[must_use = "`remove_with` returns the new version of the tree"]
    pub fn remove_with(mut self, value: &T, mode: Rebalance) -> Self {
        if !self.contains(value) {
            return self;
        }

        debug_log!(len = self.len, ?mode, "removing value");

        self.root = remove_from(self.root.take(), value, mode);
        self.len -= 1;
        self
    }
}

/// Recursive body of the removal, returning the new root of the subtree (if any remains)
pub(super) fn remove_from<T: Ord + Copy>(link: Link<T>, value: &T, mode: Rebalance) -> Link<T> {
    let mut node = link?;
    let n = Arc::make_mut(&mut node);

    match value.cmp(&n.value) {
        Ordering::Less => n.left = remove_from(n.left.take(), value, mode),
        Ordering::Greater => n.right = remove_from(n.right.take(), value, mode),
        Ordering::Equal => match (n.left.take(), n.right.take()) {
            // At most one child: splice this node out. There's nothing left here to fix up.
            (None, only) | (only, None) => return only,
            (Some(left), Some(right)) => {
                let successor = right.leftmost().value;
                n.value = successor;
                n.left = Some(left);
                n.right = remove_from(Some(right), &successor, mode);
            }
        },
    }

    n.recompute_height();

    if mode.is_auto() {
        if let Some(r) = node.imbalance() {
            trace_log!(rotation = r.name(), "rebalancing after remove");
            node = r.apply(node);
        }
    }

    Some(node)
}
