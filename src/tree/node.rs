//! Node type and the height/balance bookkeeping on top of it
//!
//! Nodes are immutable once they're reachable from a returned [`AvlTree`](crate::AvlTree). All
//! changes go through [`Arc::make_mut`], which copies a node if another version still holds it,
//! and otherwise hands out the (unique) node itself. A mutation therefore copies exactly the nodes
//! on its path that are shared, and nothing else.

use std::fmt::{self, Debug, Formatter};
use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Link from a node to one of its children
pub(crate) type Link<T> = Option<Arc<Node<T>>>;

/// A single value in an [`AvlTree`](crate::AvlTree), along with its subtrees
///
/// Nodes are handed out by [`AvlTree::root`](crate::AvlTree::root) for read-only traversal, e.g.
/// to lay the tree out on screen. The height is cached in the node, so [`height`] and
/// [`balance_factor`] are both O(1).
///
/// [`height`]: Self::height
/// [`balance_factor`]: Self::balance_factor
#[derive(Clone)]
pub struct Node<T> {
    pub(crate) value: T,
    // Height of the subtree rooted here; a leaf has height 1
    pub(crate) height: usize,
    pub(crate) left: Link<T>,
    pub(crate) right: Link<T>,
}

/// Which child of a node -- used to describe the heavy side of an imbalance, or the direction a
/// search went
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Side {
    Left,
    Right,
}

/// Returns the height of the subtree at `link`, or zero if there isn't one
pub(crate) fn height<T>(link: &Link<T>) -> usize {
    link.as_ref().map_or(0, |n| n.height)
}

/// Returns the balance factor of the subtree at `link`, or zero if there isn't one
pub(crate) fn balance_factor<T>(link: &Link<T>) -> isize {
    link.as_ref().map_or(0, |n| n.balance_factor())
}

impl<T> Node<T> {
    /// Creates a new node with no children
    pub(crate) fn leaf(value: T) -> Self {
        Node {
            value,
            height: 1,
            left: None,
            right: None,
        }
    }

    /// Returns the value stored in the node
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Returns the height of the subtree rooted at this node; a leaf has height 1
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the left child, if there is one
    pub fn left(&self) -> Option<&Node<T>> {
        self.left.as_deref()
    }

    /// Returns the right child, if there is one
    pub fn right(&self) -> Option<&Node<T>> {
        self.right.as_deref()
    }

    /// Returns the height of the left subtree minus the height of the right subtree
    ///
    /// Positive values mean the node is left-heavy, negative values right-heavy. Under the AVL
    /// invariant, this is always between -1 and 1.
    pub fn balance_factor(&self) -> isize {
        height(&self.left) as isize - height(&self.right) as isize
    }

    /// Returns a summary of this node, as displayed when inspecting a single node
    pub fn info(&self) -> NodeInfo<T>
    where
        T: Copy,
    {
        NodeInfo {
            value: self.value,
            height: self.height,
            balance: self.balance_factor(),
        }
    }

    /// Resets the cached height from the heights of the children
    ///
    /// This must be called after any change to the node's children, before anything reads this
    /// node's height.
    pub(crate) fn recompute_height(&mut self) {
        self.height = 1 + height(&self.left).max(height(&self.right));
    }

    pub(crate) fn child(&self, side: Side) -> &Link<T> {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    pub(crate) fn child_mut(&mut self, side: Side) -> &mut Link<T> {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }

    /// Returns whether the child on `heavy` is itself heavy towards the inside of this node --
    /// i.e. whether correcting an imbalance on that side takes a double rotation
    pub(crate) fn child_leans_inward(&self, heavy: Side) -> bool {
        match heavy {
            Side::Left => balance_factor(&self.left) < 0,
            Side::Right => balance_factor(&self.right) > 0,
        }
    }

    /// Returns the leftmost node in this subtree -- its minimum value
    pub(crate) fn leftmost(&self) -> &Node<T> {
        let mut current = self;
        while let Some(left) = current.left.as_deref() {
            current = left;
        }
        current
    }
}

impl<T: Ord> Node<T> {
    /// Point lookup returning the node that holds `value`
    pub(crate) fn find(&self, value: &T) -> Option<&Node<T>> {
        let mut current = Some(self);
        while let Some(node) = current {
            current = match value.cmp(&node.value) {
                std::cmp::Ordering::Less => node.left(),
                std::cmp::Ordering::Greater => node.right(),
                std::cmp::Ordering::Equal => return Some(node),
            };
        }
        None
    }
}

// Written out by hand so that the tree prints as nested `(value: left right)` groups, with `.`
// for missing children.
impl<T: Debug> Debug for Node<T> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "(h{} {:?}: ", self.height, self.value)?;
        match self.left() {
            None => f.write_str(".")?,
            Some(l) => l.fmt(f)?,
        }
        f.write_str(" ")?;
        match self.right() {
            None => f.write_str(".")?,
            Some(r) => r.fmt(f)?,
        }
        f.write_str(")")
    }
}

/// Snapshot of a single node: its value, the height of its subtree, and its balance factor
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NodeInfo<T> {
    pub value: T,
    pub height: usize,
    pub balance: isize,
}
