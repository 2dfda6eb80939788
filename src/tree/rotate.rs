//! Rotation primitives and the case table shared by every rebalancing path
//!
//! Both mutation pipelines and the manual stepper decide *which* correction to make with
//! [`Rotation::classify`] and make it with [`Rotation::apply`], so that automatic rebalancing and
//! a single manual step can never disagree about what a given imbalance needs.

use std::fmt::{self, Display, Formatter};
use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::node::{Node, Side};

/// One corrective action for an imbalanced node, named after the final rotation it performs
///
/// The double rotations ([`LeftRight`] and [`RightLeft`]) first rotate the heavy child in the
/// opposite direction; they are still a single action, not two separate steps.
///
/// [`LeftRight`]: Self::LeftRight
/// [`RightLeft`]: Self::RightLeft
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum Rotation {
    /// Single left rotation; corrects a right-heavy node whose right child is not left-heavy
    Left,
    /// Single right rotation; corrects a left-heavy node whose left child is not right-heavy
    Right,
    /// Left rotation of the left child, then right rotation of the node
    LeftRight,
    /// Right rotation of the right child, then left rotation of the node
    RightLeft,
}

impl Rotation {
    /// Picks the correction for a node with the given balance factor, or `None` if the node is
    /// within the AVL bounds
    ///
    /// `leans_inward` is only called for imbalanced nodes, with the heavy side. It must return
    /// whether the child on that side is heavy towards the inside (i.e. the left child is
    /// right-heavy, or the right child is left-heavy), which is what separates the single and
    /// double rotation cases.
    pub(crate) fn classify(balance: isize, leans_inward: impl FnOnce(Side) -> bool) -> Option<Self> {
        if balance > 1 {
            if leans_inward(Side::Left) {
                Some(Rotation::LeftRight)
            } else {
                Some(Rotation::Right)
            }
        } else if balance < -1 {
            if leans_inward(Side::Right) {
                Some(Rotation::RightLeft)
            } else {
                Some(Rotation::Left)
            }
        } else {
            None
        }
    }

    /// Performs the correction on `node`, returning the new root of the subtree
    ///
    /// ## Panics
    ///
    /// This method panics if the children that the rotation moves aren't present. That can't
    /// happen for a rotation chosen by [`classify`](Self::classify) for the same node.
    pub(crate) fn apply<T: Clone>(self, mut node: Arc<Node<T>>) -> Arc<Node<T>> {
        match self {
            Rotation::Left => rotate_left(node),
            Rotation::Right => rotate_right(node),
            Rotation::LeftRight => {
                let n = Arc::make_mut(&mut node);
                let left = match n.left.take() {
                    Some(l) => l,
                    None => panic!("left-right rotation requires a left child"),
                };
                n.left = Some(rotate_left(left));
                rotate_right(node)
            }
            Rotation::RightLeft => {
                let n = Arc::make_mut(&mut node);
                let right = match n.right.take() {
                    Some(r) => r,
                    None => panic!("right-left rotation requires a right child"),
                };
                n.right = Some(rotate_right(right));
                rotate_left(node)
            }
        }
    }

    /// Returns the name of the rotation, as used in operation logs and the serialized form
    pub fn name(self) -> &'static str {
        match self {
            Rotation::Left => "left",
            Rotation::Right => "right",
            Rotation::LeftRight => "leftRight",
            Rotation::RightLeft => "rightLeft",
        }
    }
}

impl Display for Rotation {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Rotates the subtree at `y` to the right, returning its new root (`y`'s former left child)
///
/// ```text
///        y            x
///       / \          / \
///      x   C  ==>   A   y
///     / \              / \
///    A   T2           T2  C
/// ```
///
/// Heights are recomputed for `y` first, then for `x`, because `x`'s height depends on `y`'s.
///
/// ## Panics
///
/// This function panics if `y` has no left child.
pub(crate) fn rotate_right<T: Clone>(mut y: Arc<Node<T>>) -> Arc<Node<T>> {
    let y_mut = Arc::make_mut(&mut y);
    let mut x = match y_mut.left.take() {
        Some(x) => x,
        None => panic!("`rotate_right` requires a left child"),
    };
    let x_mut = Arc::make_mut(&mut x);

    trace_log!(height = y_mut.height, "rotating right");

    y_mut.left = x_mut.right.take();
    y_mut.recompute_height();
    x_mut.right = Some(y);
    x_mut.recompute_height();
    x
}

/// Rotates the subtree at `x` to the left, returning its new root (`x`'s former right child)
///
/// This is the mirror of [`rotate_right`].
///
/// ## Panics
///
/// This function panics if `x` has no right child.
pub(crate) fn rotate_left<T: Clone>(mut x: Arc<Node<T>>) -> Arc<Node<T>> {
    let x_mut = Arc::make_mut(&mut x);
    let mut y = match x_mut.right.take() {
        Some(y) => y,
        None => panic!("`rotate_left` requires a right child"),
    };
    let y_mut = Arc::make_mut(&mut y);

    trace_log!(height = x_mut.height, "rotating left");

    x_mut.right = y_mut.left.take();
    x_mut.recompute_height();
    y_mut.left = Some(x);
    y_mut.recompute_height();
    y
}
